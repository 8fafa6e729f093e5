//! Request validation on top of the `validator` crate.
//!
//! Request types derive [`Validate`] with one `custom` rule per message. All
//! rules run, and [`validate_request`] flattens the result into [`FieldError`]s
//! in the field order the request type declares, so the client receives the
//! full list rather than the first problem found.
//!
//! Fields are kept as raw [`Value`]s; `Value::Null` stands for a missing field.

use poem_openapi::Object;
use serde_json::Value;
use validator::{Validate, ValidationError};

use business::domain::product::model::ProductId;

/// A single failed rule.
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

/// All rule failures for one request, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn single(field: &str, message: &str) -> Self {
        Self(vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }])
    }
}

/// Order in which a request's fields are reported.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Runs every rule of `request` and reports failures field by field.
pub fn validate_request<T: Validate + FieldOrder>(request: &T) -> Result<(), FieldErrors> {
    let Err(errors) = request.validate() else {
        return Ok(());
    };

    let by_field = errors.field_errors();
    let collected = T::FIELDS
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();

    Err(FieldErrors(collected))
}

fn rule(holds: bool, code: &'static str) -> Result<(), ValidationError> {
    if holds {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

pub fn is_int(value: &Value) -> Result<(), ValidationError> {
    rule(as_id(value).is_some(), "is_int")
}

pub fn is_numeric(value: &Value) -> Result<(), ValidationError> {
    rule(as_number(value).is_some(), "is_numeric")
}

/// Missing, null and `""` are empty. Whitespace is not.
pub fn not_empty(value: &Value) -> Result<(), ValidationError> {
    rule(as_text(value).is_some_and(|s| !s.is_empty()), "not_empty")
}

pub fn is_boolean(value: &Value) -> Result<(), ValidationError> {
    rule(as_bool(value).is_some(), "is_boolean")
}

/// Decimal integer that fits a product id, either as a JSON number or as text.
pub fn as_id(value: &Value) -> Option<ProductId> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| ProductId::try_from(n).ok()),
        Value::String(s) => parse_id(s),
        _ => None,
    }
}

pub fn parse_id(raw: &str) -> Option<ProductId> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// JSON number, or a string of plain decimal notation such as `"12"` or `"-0.5"`.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
            let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
            let plain = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
            if (int.is_empty() && frac.is_empty())
                || !plain(int)
                || !plain(frac)
                || unsigned.ends_with('.')
            {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}

/// JSON boolean, or one of `"true"`, `"false"`, `"1"`, `"0"` (also as numbers 1/0).
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Scalar rendered as text. Arrays, objects and null have no text form.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
