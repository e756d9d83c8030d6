use serde_json::{json, Value};
use uuid::Uuid;

use crate::ipc::error::ok;
use crate::ipc::helpers::{
    bad_params, get_required_date, get_required_str, resolve_now, to_value, HandlerErr,
};
use crate::ipc::types::{AppState, Request};
use crate::model::{LeaveApplication, LeaveStatus};

fn leave_list(state: &AppState) -> Result<Value, HandlerErr> {
    let applications: Vec<Value> = state.session.leave_applications.iter().map(to_value).collect();
    Ok(json!({ "applications": applications }))
}

fn leave_apply(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let leave_type = get_required_str(params, "leaveType")?;
    let from_date = get_required_date(params, "fromDate")?;
    let to_date = get_required_date(params, "toDate")?;
    let reason = get_required_str(params, "reason")?;
    let contact_number = get_required_str(params, "contactNumber")?;

    if reason.trim().is_empty() {
        return Err(bad_params("reason must not be empty"));
    }
    if to_date < from_date {
        return Err(bad_params("toDate must not be before fromDate"));
    }

    let application = LeaveApplication {
        id: Uuid::new_v4().to_string(),
        leave_type,
        from_date,
        to_date,
        reason,
        contact_number,
        status: LeaveStatus::Pending,
        applied_on: resolve_now(params).date_naive(),
    };
    // Newest first, the way the applications list reads.
    state.session.leave_applications.insert(0, application.clone());

    Ok(json!({ "application": to_value(&application) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "leave.list" => Some(match leave_list(state) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "leave.apply" => Some(match leave_apply(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
