use chrono::Datelike;
use serde_json::{json, Value};

use crate::derive::{classify_due, days_remaining, upcoming_by_date, Urgency};
use crate::ipc::error::ok;
use crate::ipc::helpers::{annotated, resolve_now, to_value, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{AssignmentStatus, Day, MessageSender};

/// Number of entries the dashboard summary lists carry.
const SUMMARY_LIMIT: usize = 3;

fn dashboard_open(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let fixtures = &state.fixtures;
    let now = resolve_now(params);
    let today = Day::from_weekday(now.date_naive().weekday());

    let today_classes: Vec<Value> = fixtures
        .class_schedule
        .iter()
        .filter(|c| today.map(|d| c.day == d).unwrap_or(false))
        .map(to_value)
        .collect();

    let pending_assignments = fixtures
        .assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Pending)
        .count();
    let unread_messages = fixtures
        .mentor_messages
        .iter()
        .filter(|m| m.sender == MessageSender::Mentor && !m.read)
        .count();
    let upcoming_assignments: Vec<Value> =
        upcoming_by_date(&fixtures.assignments, now, |a| a.due_date, SUMMARY_LIMIT)
            .into_iter()
            .map(|a| {
                let completed = a.status == AssignmentStatus::Completed;
                let urgency = classify_due(now, a.due_date, completed);
                let days_left = if urgency == Urgency::Overdue {
                    Value::Null
                } else {
                    json!(days_remaining(now, a.due_date))
                };
                annotated(
                    a,
                    vec![("daysLeft", days_left), ("urgency", to_value(&urgency))],
                )
            })
            .collect();

    let upcoming_events: Vec<Value> =
        upcoming_by_date(&fixtures.events, now, |e| e.date, SUMMARY_LIMIT)
            .into_iter()
            .map(|e| {
                annotated(e, vec![("daysUntil", json!(days_remaining(now, e.date)))])
            })
            .collect();

    Ok(json!({
        "student": to_value(&fixtures.student),
        "date": now.date_naive(),
        "day": to_value(&today),
        "todayClasses": today_classes,
        "stats": {
            "todayClasses": today_classes.len(),
            "pendingAssignments": pending_assignments,
            "unreadMessages": unread_messages,
            // Counts the summary list itself, not every future event.
            "upcomingEvents": upcoming_events.len(),
        },
        "upcomingAssignments": upcoming_assignments,
        "upcomingEvents": upcoming_events,
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.open" => Some(match dashboard_open(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
