use serde_json::{json, Value};

use crate::derive::{days_remaining, is_past};
use crate::ipc::error::ok;
use crate::ipc::helpers::{
    annotated, bad_params, get_required_u32, not_found, optional_filter, resolve_now, HandlerErr,
};
use crate::ipc::types::{AppState, Request, Session};
use crate::model::Event;

fn effective_attendees(event: &Event, session: &Session) -> u32 {
    if session.rsvped_event_ids.contains(&event.id) {
        event.attendees + 1
    } else {
        event.attendees
    }
}

fn events_list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let now = resolve_now(params);
    let want_past = match optional_filter(params, "filter").as_deref() {
        None => None,
        Some("upcoming") => Some(false),
        Some("past") => Some(true),
        Some(_) => return Err(bad_params("filter must be all, upcoming, or past")),
    };

    let events: Vec<Value> = state
        .fixtures
        .events
        .iter()
        .filter(|e| want_past.map(|p| is_past(now, e.date) == p).unwrap_or(true))
        .map(|e| {
            let past = is_past(now, e.date);
            let attendees = effective_attendees(e, &state.session);
            let days_until = if past {
                Value::Null
            } else {
                json!(days_remaining(now, e.date))
            };
            annotated(
                e,
                vec![
                    ("attendees", json!(attendees)),
                    ("isPast", json!(past)),
                    ("daysUntil", days_until),
                    ("isFull", json!(attendees >= e.max_attendees)),
                    ("rsvped", json!(state.session.rsvped_event_ids.contains(&e.id))),
                ],
            )
        })
        .collect();

    Ok(json!({ "events": events }))
}

fn events_rsvp_toggle(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let event_id = get_required_u32(params, "eventId")?;
    let now = resolve_now(params);
    let event = state
        .fixtures
        .event(event_id)
        .ok_or_else(|| not_found("event not found"))?;

    if !event.rsvp_required {
        return Err(bad_params("event does not take RSVPs"));
    }
    if is_past(now, event.date) {
        return Err(HandlerErr::new("event_over", "event has already taken place"));
    }

    let rsvped = if state.session.rsvped_event_ids.contains(&event_id) {
        // Backing out is always allowed, full event or not.
        state.session.rsvped_event_ids.remove(&event_id);
        false
    } else {
        if event.attendees >= event.max_attendees {
            return Err(HandlerErr::new("event_full", "event is at capacity"));
        }
        state.session.rsvped_event_ids.insert(event_id);
        true
    };

    Ok(json!({
        "eventId": event_id,
        "rsvped": rsvped,
        "attendees": effective_attendees(event, &state.session),
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "events.list" => Some(match events_list(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "events.rsvpToggle" => Some(match events_rsvp_toggle(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
