pub mod cart;
pub mod derive;
pub mod fixtures;
pub mod ipc;
pub mod model;
pub mod prefs;
