
use serde_json::json;
use test_support::{new_state, request_ok};

#[test]
fn overall_attendance_sums_counts_before_dividing() {
    let mut state = new_state();
    let result = request_ok(&mut state, "1", "attendance.open", json!({}));

    let subjects = result["subjects"].as_array().expect("subjects");
    let mut present_sum = 0.0;
    let mut total_sum = 0.0;
    let mut percent_sum = 0.0;
    for subject in subjects {
        present_sum += subject["overall"]["present"].as_f64().unwrap();
        total_sum += subject["overall"]["total"].as_f64().unwrap();
        percent_sum += subject["overall"]["percent"].as_f64().unwrap();
    }

    let overall = &result["overall"];
    assert_eq!(overall["present"].as_f64().unwrap(), present_sum);
    assert_eq!(overall["total"].as_f64().unwrap(), total_sum);

    let expected = (100.0 * present_sum / total_sum * 100.0).round() / 100.0;
    let reported = overall["percent"].as_f64().unwrap();
    assert!((reported - expected).abs() < 1e-9, "overall percent must be sum-then-divide");

    // The demo data is chosen so the wrong aggregation would differ.
    let mean_of_percents = percent_sum / subjects.len() as f64;
    assert!((reported - mean_of_percents).abs() > 0.05);
}

#[test]
fn per_subject_bands_split_at_75_and_85() {
    let mut state = new_state();
    let result = request_ok(&mut state, "1", "attendance.open", json!({}));

    for subject in result["subjects"].as_array().unwrap() {
        let pct = subject["overall"]["percent"].as_f64().unwrap();
        let band = subject["overall"]["band"].as_str().unwrap();
        let expected = if pct < 75.0 {
            "danger"
        } else if pct < 85.0 {
            "moderate"
        } else {
            "good"
        };
        assert_eq!(band, expected, "subject: {}", subject["code"]);
    }

    // One subject in the fixture is in shortage territory.
    let danger = result["subjects"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["overall"]["band"] == "danger")
        .count();
    assert_eq!(danger, 1);
}

#[test]
fn monthly_buckets_carry_their_own_percentages() {
    let mut state = new_state();
    let result = request_ok(&mut state, "1", "attendance.open", json!({}));

    for subject in result["subjects"].as_array().unwrap() {
        for month in subject["monthly"].as_array().unwrap() {
            let present = month["present"].as_f64().unwrap();
            let total = month["total"].as_f64().unwrap();
            let expected = (100.0 * present / total * 100.0).round() / 100.0;
            assert!((month["percent"].as_f64().unwrap() - expected).abs() < 1e-9);
        }
    }
}
