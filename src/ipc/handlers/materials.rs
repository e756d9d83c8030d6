use serde_json::{json, Value};

use crate::derive::matches_query;
use crate::ipc::error::ok;
use crate::ipc::helpers::{bad_params, optional_filter, optional_str, to_value, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::MaterialKind;

fn materials_search(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let query = optional_str(params, "query");
    let subject = optional_filter(params, "subject");
    let kind = match optional_filter(params, "type") {
        None => None,
        Some(raw) => Some(
            MaterialKind::from_wire(&raw)
                .ok_or_else(|| bad_params("type must be notes, manual, or guide"))?,
        ),
    };

    let materials: Vec<Value> = state
        .fixtures
        .materials
        .iter()
        .filter(|m| {
            let query_ok = query
                .as_deref()
                .map(|q| matches_query(q, &[&m.title, &m.subject]))
                .unwrap_or(true);
            let subject_ok = subject
                .as_deref()
                .map(|s| m.subject == s)
                .unwrap_or(true);
            let kind_ok = kind.map(|k| m.kind == k).unwrap_or(true);
            query_ok && subject_ok && kind_ok
        })
        .map(to_value)
        .collect();

    let subjects: Vec<&str> = {
        let mut seen = Vec::new();
        for m in &state.fixtures.materials {
            if !seen.contains(&m.subject.as_str()) {
                seen.push(m.subject.as_str());
            }
        }
        seen
    };

    Ok(json!({
        "materials": materials,
        "subjects": subjects,
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "materials.search" => Some(match materials_search(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
