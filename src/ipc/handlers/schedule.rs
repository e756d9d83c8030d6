use serde_json::{json, Value};

use crate::ipc::error::ok;
use crate::ipc::helpers::{bad_params, get_required_str, to_value, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::Day;

fn schedule_open(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let raw_day = get_required_str(params, "day")?;
    let day = Day::from_wire(&raw_day)
        .ok_or_else(|| bad_params("day must be Monday through Saturday"))?;

    let classes: Vec<Value> = state
        .fixtures
        .class_schedule
        .iter()
        .filter(|c| c.day == day)
        .map(to_value)
        .collect();

    Ok(json!({
        "day": to_value(&day),
        "classes": classes,
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "schedule.open" => Some(match schedule_open(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
