
use serde_json::json;
use test_support::{new_state, request_err, request_ok};

#[test]
fn leaving_a_seeded_group_lowers_the_visible_count() {
    let mut state = new_state();
    // The branch hub is seeded as joined with its membership included.
    let result = request_ok(&mut state, "1", "communities.joinToggle", json!({ "groupId": 2 }));
    assert_eq!(result["joined"], false);
    assert_eq!(result["members"], 479);

    let rejoined = request_ok(&mut state, "2", "communities.joinToggle", json!({ "groupId": 2 }));
    assert_eq!(rejoined["joined"], true);
    assert_eq!(rejoined["members"], 480);
}

#[test]
fn joining_a_fresh_group_raises_the_visible_count() {
    let mut state = new_state();
    let result = request_ok(&mut state, "1", "communities.joinToggle", json!({ "groupId": 6 }));
    assert_eq!(result["joined"], true);
    assert_eq!(result["members"], 181);

    let listed = request_ok(&mut state, "2", "communities.list", json!({}));
    let drama = listed["groups"]
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["id"] == 6)
        .unwrap()
        .clone();
    assert_eq!(drama["joined"], true);
    assert_eq!(drama["members"], 181);
}

#[test]
fn recommendations_follow_branch_and_year() {
    let mut state = new_state();
    let result = request_ok(&mut state, "1", "communities.recommended", json!({}));
    let ids: Vec<u64> = result["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn type_filter_narrows_the_list() {
    let mut state = new_state();
    let result = request_ok(&mut state, "1", "communities.list", json!({ "type": "club" }));
    let groups = result["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g["type"] == "club"));

    let error = request_err(&mut state, "2", "communities.list", json!({ "type": "sports" }));
    assert_eq!(error["code"], "bad_params");

    let error = request_err(&mut state, "3", "communities.joinToggle", json!({ "groupId": 99 }));
    assert_eq!(error["code"], "not_found");
}
