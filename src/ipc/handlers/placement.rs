use serde_json::{json, Value};

use crate::derive::{days_remaining, is_past};
use crate::ipc::error::ok;
use crate::ipc::helpers::{
    annotated, bad_params, get_required_u32, not_found, optional_filter, resolve_now, HandlerErr,
};
use crate::ipc::types::{AppState, Request};
use crate::model::OpportunityKind;

fn placement_list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let now = resolve_now(params);
    let kind = match optional_filter(params, "type") {
        None => None,
        Some(raw) => Some(
            OpportunityKind::from_wire(&raw)
                .ok_or_else(|| bad_params("type must be internship or full-time"))?,
        ),
    };

    let opportunities: Vec<Value> = state
        .fixtures
        .placements
        .iter()
        .filter(|o| kind.map(|k| o.kind == k).unwrap_or(true))
        .map(|o| {
            let closed = is_past(now, o.deadline);
            let days_left = if closed {
                Value::Null
            } else {
                json!(days_remaining(now, o.deadline))
            };
            annotated(o, vec![("closed", json!(closed)), ("daysLeft", days_left)])
        })
        .collect();

    Ok(json!({ "opportunities": opportunities }))
}

/// Registration happens in the shell's browser; the daemon just hands the
/// outbound URL over and consumes no response.
fn placement_register(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let opportunity_id = get_required_u32(params, "opportunityId")?;
    let opportunity = state
        .fixtures
        .placement(opportunity_id)
        .ok_or_else(|| not_found("opportunity not found"))?;

    Ok(json!({
        "opportunityId": opportunity_id,
        "company": opportunity.company,
        "url": opportunity.registration_link,
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "placement.list" => Some(match placement_list(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "placement.register" => Some(match placement_register(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
