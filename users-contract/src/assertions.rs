//! Shape and value checks applied to API response bodies.
//!
//! Every check returns a `ScenarioError` describing expected vs. actual, so a
//! scenario can bail out with `?` on the first violation.

use serde_json::{Map, Value};

use crate::error::{ScenarioError, ScenarioResult};
use crate::types::{UserPayload, ValidationError};

/// JSON type name used in shape error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn expect_array(body: &Value) -> ScenarioResult<&[Value]> {
    body.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ScenarioError::UnexpectedShape {
            expected: "array",
            actual: kind_of(body).to_string(),
        })
}

pub fn expect_object(body: &Value) -> ScenarioResult<&Map<String, Value>> {
    body.as_object().ok_or_else(|| ScenarioError::UnexpectedShape {
        expected: "object",
        actual: kind_of(body).to_string(),
    })
}

pub fn expect_len(items: &[Value], expected: usize) -> ScenarioResult<()> {
    if items.len() == expected {
        Ok(())
    } else {
        Err(ScenarioError::UnexpectedLength {
            expected,
            actual: items.len(),
        })
    }
}

/// Fail on the first of `fields` the record does not carry
pub fn require_fields(record: &Value, fields: &[&str]) -> ScenarioResult<()> {
    let object = expect_object(record)?;
    match fields.iter().find(|field| !object.contains_key(**field)) {
        Some(missing) => Err(ScenarioError::MissingField(missing.to_string())),
        None => Ok(()),
    }
}

/// Numeric `id` of a user record
pub fn record_id(record: &Value) -> ScenarioResult<u64> {
    let id = expect_object(record)?
        .get("id")
        .ok_or_else(|| ScenarioError::MissingField("id".to_string()))?;
    id.as_u64().ok_or_else(|| ScenarioError::UnexpectedShape {
        expected: "numeric id",
        actual: id.to_string(),
    })
}

/// The field must be present and equal to `expected`
pub fn expect_field(record: &Value, field: &str, expected: &Value) -> ScenarioResult<()> {
    let actual = expect_object(record)?
        .get(field)
        .ok_or_else(|| ScenarioError::MissingField(field.to_string()))?;
    if actual == expected {
        Ok(())
    } else {
        Err(ScenarioError::FieldMismatch {
            field: field.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        })
    }
}

/// Every field the payload submitted must come back with the submitted value.
/// A record that omits a submitted field fails.
pub fn expect_payload_echoed(record: &Value, payload: &UserPayload) -> ScenarioResult<()> {
    for (field, value) in payload.submitted_fields() {
        expect_field(record, field, &value)?;
    }
    Ok(())
}

/// `fields` must hold the same values in `after` as in `before`
pub fn expect_fields_unchanged(before: &Value, after: &Value, fields: &[&str]) -> ScenarioResult<()> {
    let before = expect_object(before)?;
    for field in fields {
        let expected = before
            .get(*field)
            .ok_or_else(|| ScenarioError::MissingField(field.to_string()))?;
        expect_field(after, field, expected)?;
    }
    Ok(())
}

/// Both records carry identical values for every field in `fields`
pub fn expect_same_record(first: &Value, second: &Value, fields: &[&str]) -> ScenarioResult<()> {
    require_fields(first, fields)?;
    expect_fields_unchanged(first, second, fields)
}

/// The body is a list of validation errors naming every one of `fields`
pub fn expect_validation_errors(body: &Value, fields: &[&str]) -> ScenarioResult<Vec<ValidationError>> {
    let entries = expect_array(body)?;
    for entry in entries {
        require_fields(entry, &["field"])?;
    }
    let errors: Vec<ValidationError> =
        serde_json::from_value(body.clone()).map_err(|e| ScenarioError::UnexpectedShape {
            expected: "array of validation errors",
            actual: e.to_string(),
        })?;

    for field in fields {
        if !errors.iter().any(|error| error.field == *field) {
            return Err(ScenarioError::MissingValidationError(field.to_string()));
        }
    }
    Ok(errors)
}
