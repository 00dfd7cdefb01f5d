use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use validator::Validate;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    String,
    Number,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::String => "expected string",
            Self::Number => "expected number",
        }
    }
}

/// Declares the required top-level fields of a JSON payload and their types.
pub trait PayloadShape {
    const FIELDS: &'static [(&'static str, FieldKind)];
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Error)]
#[error("Request validation failed: {}", summarize(.violations))]
pub struct RequestValidationError {
    violations: Vec<FieldViolation>,
}

impl RequestValidationError {
    fn body(message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new("body", message)],
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn has_violation_for(&self, field: &str) -> bool {
        self.violations.iter().any(|violation| violation.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{}: {}", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parses a raw request body into `T`, reporting every missing, mistyped or invalid field at once.
pub fn parse_payload<T>(raw: &[u8]) -> Result<T, RequestValidationError>
where
    T: PayloadShape + DeserializeOwned + Validate,
{
    let value: Value = serde_json::from_slice(raw)
        .map_err(|_| RequestValidationError::body("request body is not valid JSON"))?;
    let Value::Object(object) = value else {
        return Err(RequestValidationError::body(
            "request body must be a JSON object",
        ));
    };

    let violations = shape_violations(&object, T::FIELDS);
    if !violations.is_empty() {
        return Err(RequestValidationError { violations });
    }

    let payload: T = serde_json::from_value(Value::Object(object))
        .map_err(|e| RequestValidationError::body(e.to_string()))?;

    if let Err(errors) = payload.validate() {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    FieldViolation::new(field.to_string(), message)
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
        return Err(RequestValidationError { violations });
    }

    Ok(payload)
}

fn shape_violations(
    object: &Map<String, Value>,
    fields: &[(&'static str, FieldKind)],
) -> Vec<FieldViolation> {
    fields
        .iter()
        .filter_map(|(name, kind)| match object.get(*name) {
            None | Some(Value::Null) => Some(FieldViolation::new(*name, "field required")),
            Some(value) if !kind.accepts(value) => Some(FieldViolation::new(*name, kind.describe())),
            Some(_) => None,
        })
        .collect()
}
