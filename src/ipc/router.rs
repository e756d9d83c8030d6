use std::panic::{catch_unwind, AssertUnwindSafe};

use super::handlers;
use super::types::{AppState, Request};
use crate::ipc::error::err;

/// Dispatches one request. A panic inside a handler is downgraded to an
/// `internal_error` response so the serving loop survives.
pub fn handle_request(state: &mut AppState, req: Request) -> serde_json::Value {
    let id = req.id.clone();
    catch_unwind(AssertUnwindSafe(|| dispatch(state, &req)))
        .unwrap_or_else(|_| err(&id, "internal_error", "request handler panicked", None))
}

#[cfg(test)]
const PANIC_METHOD: &str = "debug.panic";

fn dispatch(state: &mut AppState, req: &Request) -> serde_json::Value {
    #[cfg(test)]
    if req.method == PANIC_METHOD {
        panic!("induced handler panic");
    }

    if let Some(resp) = handlers::core::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::dashboard::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::schedule::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::assignments::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::events::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::communities::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::materials::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::canteen::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::academics::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::placement::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::leave::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::mentor::try_handle(state, req) {
        return resp;
    }
    if let Some(resp) = handlers::settings::try_handle(state, req) {
        return resp;
    }

    err(
        &req.id,
        "not_implemented",
        format!("unknown method: {}", req.method),
        None,
    )
}
