use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::ipc::error::err;

pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl HandlerErr {
    pub fn new(code: &'static str, message: impl Into<String>) -> HandlerErr {
        HandlerErr {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> Value {
        err(id, self.code, self.message, self.details)
    }
}

pub fn bad_params(message: impl Into<String>) -> HandlerErr {
    HandlerErr::new("bad_params", message)
}

pub fn not_found(message: impl Into<String>) -> HandlerErr {
    HandlerErr::new("not_found", message)
}

pub fn get_required_str(params: &Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| bad_params(format!("missing {}", key)))
}

pub fn get_required_u32(params: &Value, key: &str) -> Result<u32, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| bad_params(format!("missing {}", key)))
}

pub fn get_required_i64(params: &Value, key: &str) -> Result<i64, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| bad_params(format!("missing {}", key)))
}

pub fn get_required_date(params: &Value, key: &str) -> Result<NaiveDate, HandlerErr> {
    let raw = get_required_str(params, key)?;
    raw.trim()
        .parse::<NaiveDate>()
        .map_err(|_| bad_params(format!("{} must be a YYYY-MM-DD date", key)))
}

/// A filter param where absence, null, empty, or the literal "all" all
/// mean "no constraint".
pub fn optional_filter(params: &Value, key: &str) -> Option<String> {
    let raw = params.get(key)?.as_str()?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(raw.to_string())
    }
}

pub fn optional_str(params: &Value, key: &str) -> Option<String> {
    let raw = params.get(key)?.as_str()?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// The reference instant for date-relative views. Callers may pin it with
/// an RFC 3339 `now` param; anything absent or unparseable falls back to
/// the daemon clock rather than failing the request.
pub fn resolve_now(params: &Value) -> DateTime<Utc> {
    params
        .get("now")
        .and_then(|v| v.as_str())
        .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

pub fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Serializes `base` and annotates the resulting object with derived
/// fields, the way views decorate raw records for display.
pub fn annotated<T: Serialize>(base: &T, fields: Vec<(&str, Value)>) -> Value {
    let mut value = to_value(base);
    if let Value::Object(map) = &mut value {
        for (key, field) in fields {
            map.insert(key.to_string(), field);
        }
    }
    value
}
