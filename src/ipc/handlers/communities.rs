use serde_json::{json, Value};

use crate::ipc::error::ok;
use crate::ipc::helpers::{
    annotated, bad_params, get_required_u32, not_found, optional_filter, HandlerErr,
};
use crate::ipc::types::{AppState, Request, Session};
use crate::model::{Group, GroupKind};

/// Fixture member totals already include seeded memberships, so the
/// visible count moves only when the session diverges from the seed.
fn effective_members(group: &Group, session: &Session) -> u32 {
    let joined = session.joined_group_ids.contains(&group.id);
    let seeded = session.seeded_group_ids.contains(&group.id);
    match (joined, seeded) {
        (true, false) => group.members + 1,
        (false, true) => group.members.saturating_sub(1),
        _ => group.members,
    }
}

fn group_entry(group: &Group, session: &Session) -> Value {
    annotated(
        group,
        vec![
            ("members", json!(effective_members(group, session))),
            ("joined", json!(session.joined_group_ids.contains(&group.id))),
        ],
    )
}

fn communities_list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let kind = match optional_filter(params, "type") {
        None => None,
        Some(raw) => Some(
            GroupKind::from_wire(&raw)
                .ok_or_else(|| bad_params("type must be college-wide, branch, year, or club"))?,
        ),
    };

    let groups: Vec<Value> = state
        .fixtures
        .groups
        .iter()
        .filter(|g| kind.map(|k| g.kind == k).unwrap_or(true))
        .map(|g| group_entry(g, &state.session))
        .collect();

    Ok(json!({ "groups": groups }))
}

fn communities_join_toggle(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let group_id = get_required_u32(params, "groupId")?;
    let group = state
        .fixtures
        .group(group_id)
        .ok_or_else(|| not_found("group not found"))?;

    let joined = if state.session.joined_group_ids.contains(&group_id) {
        state.session.joined_group_ids.remove(&group_id);
        false
    } else {
        state.session.joined_group_ids.insert(group_id);
        true
    };

    Ok(json!({
        "groupId": group_id,
        "joined": joined,
        "members": effective_members(group, &state.session),
    }))
}

/// The recommendation rule from the portal: groups for the student's own
/// branch, and year groups for their branch and year.
fn communities_recommended(state: &AppState) -> Result<Value, HandlerErr> {
    let student = &state.fixtures.student;
    let groups: Vec<Value> = state
        .fixtures
        .groups
        .iter()
        .filter(|g| match g.kind {
            GroupKind::Branch => g.branch.as_deref() == Some(student.branch.as_str()),
            GroupKind::Year => {
                g.branch.as_deref() == Some(student.branch.as_str()) && g.year == Some(student.year)
            }
            _ => false,
        })
        .map(|g| group_entry(g, &state.session))
        .collect();

    Ok(json!({ "groups": groups }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "communities.list" => Some(match communities_list(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "communities.joinToggle" => Some(match communities_join_toggle(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "communities.recommended" => Some(match communities_recommended(state) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
