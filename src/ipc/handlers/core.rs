use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "portal.ping" => Some(ok(
            &req.id,
            json!({
                "service": "campusd",
                "version": env!("CARGO_PKG_VERSION"),
            }),
        )),
        _ => None,
    }
}
