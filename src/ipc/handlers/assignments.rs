use serde_json::{json, Value};

use crate::derive::{classify_due, days_remaining, Urgency};
use crate::ipc::error::ok;
use crate::ipc::helpers::{annotated, bad_params, optional_filter, resolve_now, to_value, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::AssignmentStatus;

fn assignments_list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let now = resolve_now(params);
    let status = match optional_filter(params, "status") {
        None => None,
        Some(raw) => Some(
            AssignmentStatus::from_wire(&raw)
                .ok_or_else(|| bad_params("status must be pending, in-progress, or completed"))?,
        ),
    };

    let assignments: Vec<Value> = state
        .fixtures
        .assignments
        .iter()
        .filter(|a| status.map(|s| a.status == s).unwrap_or(true))
        .map(|a| {
            let completed = a.status == AssignmentStatus::Completed;
            let urgency = classify_due(now, a.due_date, completed);
            let is_overdue = urgency == Urgency::Overdue;
            // Overdue entries show an "Overdue" badge, never a countdown.
            let days_left = if is_overdue {
                Value::Null
            } else {
                json!(days_remaining(now, a.due_date))
            };
            annotated(
                a,
                vec![
                    ("daysLeft", days_left),
                    ("isOverdue", json!(is_overdue)),
                    ("urgency", to_value(&urgency)),
                ],
            )
        })
        .collect();

    Ok(json!({ "assignments": assignments }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "assignments.list" => Some(match assignments_list(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
