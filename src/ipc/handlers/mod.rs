pub mod academics;
pub mod assignments;
pub mod canteen;
pub mod communities;
pub mod core;
pub mod dashboard;
pub mod events;
pub mod leave;
pub mod materials;
pub mod mentor;
pub mod placement;
pub mod schedule;
pub mod settings;
