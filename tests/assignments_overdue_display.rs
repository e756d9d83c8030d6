
use serde_json::{json, Value};
use test_support::{new_state, request_ok, NOW};

fn list(state: &mut campusd::ipc::AppState, params: Value) -> Vec<Value> {
    request_ok(state, "1", "assignments.list", params)["assignments"]
        .as_array()
        .expect("assignments array")
        .clone()
}

fn by_id(entries: &[Value], id: u64) -> &Value {
    entries
        .iter()
        .find(|a| a["id"] == json!(id))
        .unwrap_or_else(|| panic!("assignment {} missing", id))
}

#[test]
fn past_due_unfinished_work_is_overdue_with_no_countdown() {
    let mut state = new_state();
    let entries = list(&mut state, json!({ "now": NOW }));

    for entry in &entries {
        let past_due = entry["dueDate"].as_str().unwrap() < "2025-01-20";
        let completed = entry["status"] == "completed";
        if past_due && !completed {
            assert_eq!(entry["isOverdue"], true, "entry: {}", entry);
            assert!(entry["daysLeft"].is_null(), "overdue entries hide daysLeft");
            assert_eq!(entry["urgency"], "overdue");
        }
    }

    // The fixture has exactly one such assignment.
    let overdue_count = entries.iter().filter(|a| a["isOverdue"] == true).count();
    assert_eq!(overdue_count, 1);
}

#[test]
fn completed_work_is_never_overdue() {
    let mut state = new_state();
    let entries = list(&mut state, json!({ "now": NOW }));
    let completed = by_id(&entries, 5);
    assert_eq!(completed["isOverdue"], false);
    assert_eq!(completed["urgency"], "normal");
}

#[test]
fn urgency_bands_follow_days_remaining() {
    let mut state = new_state();
    let entries = list(&mut state, json!({ "now": NOW }));

    let due_tomorrow = by_id(&entries, 1);
    assert_eq!(due_tomorrow["daysLeft"], 0);
    assert_eq!(due_tomorrow["urgency"], "critical");

    let due_in_four = by_id(&entries, 2);
    assert_eq!(due_in_four["daysLeft"], 3);
    assert_eq!(due_in_four["urgency"], "warning");

    let due_in_two_weeks = by_id(&entries, 3);
    assert_eq!(due_in_two_weeks["urgency"], "normal");
}

#[test]
fn status_filter_narrows_and_all_does_not() {
    let mut state = new_state();
    let all = list(&mut state, json!({ "now": NOW, "status": "all" }));
    assert_eq!(all.len(), 6);

    let pending = list(&mut state, json!({ "now": NOW, "status": "pending" }));
    assert_eq!(pending.len(), 4);
    assert!(pending.iter().all(|a| a["status"] == "pending"));
}
