use serde_json::{json, Value};

use crate::ipc::error::ok;
use crate::ipc::helpers::{bad_params, get_required_str, to_value, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::prefs::{AccentColor, Theme};

fn settings_view(state: &AppState) -> Value {
    let accent = state.prefs.accent_color();
    let palette: Vec<Value> = AccentColor::ALL
        .iter()
        .map(|c| json!({ "name": to_value(c), "hex": c.hex() }))
        .collect();
    json!({
        "theme": to_value(&state.prefs.theme()),
        "accentColor": to_value(&accent),
        "accentHex": accent.hex(),
        "accentColors": palette,
    })
}

fn settings_set_theme(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let raw = get_required_str(params, "theme")?;
    let theme = Theme::from_wire(&raw).ok_or_else(|| bad_params("theme must be light or dark"))?;
    state.prefs.set_theme(theme);
    Ok(settings_view(state))
}

fn settings_toggle_theme(state: &mut AppState) -> Result<Value, HandlerErr> {
    let next = state.prefs.theme().toggled();
    state.prefs.set_theme(next);
    Ok(settings_view(state))
}

fn settings_set_accent(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let raw = get_required_str(params, "color")?;
    let accent = AccentColor::from_wire(&raw)
        .ok_or_else(|| bad_params("color must be blue, purple, pink, green, orange, or red"))?;
    state.prefs.set_accent_color(accent);
    Ok(settings_view(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "settings.get" => Some(ok(&req.id, settings_view(state))),
        "settings.setTheme" => Some(match settings_set_theme(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "settings.toggleTheme" => Some(match settings_toggle_theme(state) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "settings.setAccent" => Some(match settings_set_accent(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
