
use serde_json::json;
use test_support::{new_state, request_err, request_ok, state_with_prefs_path, temp_prefs_path};

#[test]
fn defaults_are_light_and_blue() {
    let mut state = new_state();
    let settings = request_ok(&mut state, "1", "settings.get", json!({}));
    assert_eq!(settings["theme"], "light");
    assert_eq!(settings["accentColor"], "blue");
    assert_eq!(settings["accentHex"], "#0ea5e9");
    assert_eq!(settings["accentColors"].as_array().unwrap().len(), 6);
}

#[test]
fn preferences_survive_a_process_restart() {
    let path = temp_prefs_path("roundtrip");

    let mut state = state_with_prefs_path(path.clone());
    request_ok(&mut state, "1", "settings.setTheme", json!({ "theme": "dark" }));
    request_ok(&mut state, "2", "settings.setAccent", json!({ "color": "green" }));
    drop(state);

    let mut restarted = state_with_prefs_path(path.clone());
    let settings = request_ok(&mut restarted, "3", "settings.get", json!({}));
    assert_eq!(settings["theme"], "dark");
    assert_eq!(settings["accentColor"], "green");
    assert_eq!(settings["accentHex"], "#10b981");
    let _ = std::fs::remove_file(path);
}

#[test]
fn a_corrupt_prefs_file_reads_as_defaults() {
    let path = temp_prefs_path("corrupt");
    std::fs::write(&path, "definitely not json").unwrap();

    let mut state = state_with_prefs_path(path.clone());
    let settings = request_ok(&mut state, "1", "settings.get", json!({}));
    assert_eq!(settings["theme"], "light");
    assert_eq!(settings["accentColor"], "blue");
    let _ = std::fs::remove_file(path);
}

#[test]
fn toggle_flips_the_theme_both_ways() {
    let mut state = new_state();
    let settings = request_ok(&mut state, "1", "settings.toggleTheme", json!({}));
    assert_eq!(settings["theme"], "dark");
    let settings = request_ok(&mut state, "2", "settings.toggleTheme", json!({}));
    assert_eq!(settings["theme"], "light");
}

#[test]
fn unknown_values_are_rejected() {
    let mut state = new_state();
    let error = request_err(&mut state, "1", "settings.setTheme", json!({ "theme": "sepia" }));
    assert_eq!(error["code"], "bad_params");
    let error = request_err(&mut state, "2", "settings.setAccent", json!({ "color": "teal" }));
    assert_eq!(error["code"], "bad_params");
}
