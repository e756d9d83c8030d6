
use serde_json::json;
use test_support::{new_state, request_err, request_ok, NOW};

#[test]
fn a_new_application_is_pending_and_listed_first() {
    let mut state = new_state();
    let created = request_ok(
        &mut state,
        "1",
        "leave.apply",
        json!({
            "leaveType": "Sick Leave",
            "fromDate": "2025-01-27",
            "toDate": "2025-01-28",
            "reason": "Viral fever, advised two days rest.",
            "contactNumber": "+91 98200 44556",
            "now": NOW,
        }),
    );
    let application = &created["application"];
    assert_eq!(application["status"], "pending");
    assert_eq!(application["appliedOn"], "2025-01-20");
    let new_id = application["id"].as_str().unwrap().to_string();
    assert!(!new_id.is_empty());

    let listed = request_ok(&mut state, "2", "leave.list", json!({}));
    let applications = listed["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 3);
    assert_eq!(applications[0]["id"], new_id.as_str());
}

#[test]
fn inverted_date_ranges_are_rejected() {
    let mut state = new_state();
    let error = request_err(
        &mut state,
        "1",
        "leave.apply",
        json!({
            "leaveType": "Personal Leave",
            "fromDate": "2025-01-28",
            "toDate": "2025-01-27",
            "reason": "Travel.",
            "contactNumber": "+91 98200 44556",
        }),
    );
    assert_eq!(error["code"], "bad_params");

    let listed = request_ok(&mut state, "2", "leave.list", json!({}));
    assert_eq!(listed["applications"].as_array().unwrap().len(), 2);
}

#[test]
fn malformed_dates_and_missing_fields_are_bad_params() {
    let mut state = new_state();
    let error = request_err(
        &mut state,
        "1",
        "leave.apply",
        json!({
            "leaveType": "Sick Leave",
            "fromDate": "not-a-date",
            "toDate": "2025-01-28",
            "reason": "x",
            "contactNumber": "1",
        }),
    );
    assert_eq!(error["code"], "bad_params");

    let error = request_err(&mut state, "2", "leave.apply", json!({ "leaveType": "Sick Leave" }));
    assert_eq!(error["code"], "bad_params");
}
