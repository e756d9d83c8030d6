use serde_json::{json, Value};
use uuid::Uuid;

use crate::ipc::error::ok;
use crate::ipc::helpers::{bad_params, get_required_str, resolve_now, to_value, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::model::{MentorMessage, MessageSender};

fn mentor_messages(state: &AppState) -> Result<Value, HandlerErr> {
    // Messages sent this session first, then the fixture thread.
    let messages: Vec<Value> = state
        .session
        .sent_messages
        .iter()
        .rev()
        .chain(state.fixtures.mentor_messages.iter())
        .map(to_value)
        .collect();

    Ok(json!({
        "mentor": to_value(&state.fixtures.mentor),
        "messages": messages,
    }))
}

fn mentor_send(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let subject = get_required_str(params, "subject")?;
    let body = get_required_str(params, "body")?;
    if subject.trim().is_empty() || body.trim().is_empty() {
        return Err(bad_params("subject and body must not be empty"));
    }

    let message = MentorMessage {
        id: Uuid::new_v4().to_string(),
        sender: MessageSender::Student,
        subject,
        body,
        sent_on: resolve_now(params).date_naive(),
        read: true,
    };
    state.session.sent_messages.push(message.clone());

    Ok(json!({ "message": to_value(&message) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "mentor.messages" => Some(match mentor_messages(state) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "mentor.send" => Some(match mentor_send(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
