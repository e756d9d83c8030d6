
use serde_json::json;
use test_support::{new_state, request, request_ok};

#[test]
fn ping_answers_with_service_identity() {
    let mut state = new_state();
    let result = request_ok(&mut state, "1", "portal.ping", json!({}));
    assert_eq!(result["service"], "campusd");
    assert!(result["version"].as_str().is_some());
}

#[test]
fn unknown_methods_answer_not_implemented() {
    let mut state = new_state();
    let resp = request(&mut state, "2", "portal.noSuchThing", json!({}));
    assert_eq!(resp["ok"], false);
    assert_eq!(resp["error"]["code"], "not_implemented");
    assert_eq!(resp["id"], "2");
}

#[test]
fn schedule_open_lists_classes_for_the_day() {
    let mut state = new_state();
    let result = request_ok(&mut state, "3", "schedule.open", json!({ "day": "Monday" }));
    let classes = result["classes"].as_array().expect("classes array");
    assert_eq!(classes.len(), 3);
    assert!(classes.iter().all(|c| c["day"] == "Monday"));

    let resp = request(&mut state, "4", "schedule.open", json!({ "day": "Sunday" }));
    assert_eq!(resp["error"]["code"], "bad_params");
}
