use serde_json::{json, Value};

use crate::derive::{
    attendance_band, attendance_percent, days_remaining, is_past, mean_gpa, overall_attendance,
    round1, round2,
};
use crate::ipc::error::ok;
use crate::ipc::helpers::{annotated, bad_params, optional_filter, resolve_now, to_value, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::Tally;

fn percent_entry(tally: Tally) -> (Value, Value) {
    match attendance_percent(tally) {
        Some(pct) => (json!(round2(pct)), to_value(&attendance_band(pct))),
        None => (Value::Null, Value::Null),
    }
}

fn attendance_open(state: &AppState) -> Result<Value, HandlerErr> {
    let subjects: Vec<Value> = state
        .fixtures
        .attendance
        .iter()
        .map(|subject| {
            let (percent, band) = percent_entry(subject.overall);
            let monthly: Vec<Value> = subject
                .monthly
                .iter()
                .map(|month| {
                    let tally = Tally {
                        present: month.present,
                        total: month.total,
                    };
                    let (percent, band) = percent_entry(tally);
                    annotated(month, vec![("percent", percent), ("band", band)])
                })
                .collect();
            json!({
                "code": subject.code,
                "subject": subject.subject,
                "overall": {
                    "present": subject.overall.present,
                    "total": subject.overall.total,
                    "percent": percent,
                    "band": band,
                },
                "monthly": monthly,
            })
        })
        .collect();

    let overall = overall_attendance(state.fixtures.attendance.iter().map(|s| &s.overall));
    let (percent, band) = percent_entry(Tally {
        present: overall.present,
        total: overall.total,
    });

    Ok(json!({
        "overall": {
            "present": overall.present,
            "total": overall.total,
            "percent": percent,
            "band": band,
        },
        "subjects": subjects,
    }))
}

fn results_open(state: &AppState) -> Result<Value, HandlerErr> {
    let results: Vec<Value> = state
        .fixtures
        .exam_results
        .iter()
        .map(|r| {
            let percent = if r.marks.total == 0 {
                Value::Null
            } else {
                json!(round1(100.0 * f64::from(r.marks.obtained) / f64::from(r.marks.total)))
            };
            annotated(r, vec![("percent", percent)])
        })
        .collect();

    let overall_gpa = mean_gpa(state.fixtures.exam_results.iter().map(|r| r.gpa));

    Ok(json!({
        "overallGpa": overall_gpa.map(round2),
        "results": results,
    }))
}

fn exam_schedule_list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let now = resolve_now(params);
    let want_past = match optional_filter(params, "filter").as_deref() {
        None => None,
        Some("upcoming") => Some(false),
        Some("past") => Some(true),
        Some(_) => return Err(bad_params("filter must be all, upcoming, or past")),
    };

    let exams: Vec<Value> = state
        .fixtures
        .exam_schedule
        .iter()
        .filter(|slot| want_past.map(|p| is_past(now, slot.date) == p).unwrap_or(true))
        .map(|slot| {
            let past = is_past(now, slot.date);
            let days_until = if past {
                Value::Null
            } else {
                json!(days_remaining(now, slot.date))
            };
            annotated(slot, vec![("isPast", json!(past)), ("daysUntil", days_until)])
        })
        .collect();

    Ok(json!({ "exams": exams }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.open" => Some(match attendance_open(state) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "results.open" => Some(match results_open(state) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "examSchedule.list" => Some(match exam_schedule_list(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
