// src/application/dto/parser.rs
// Parsers for raw form input

use serde_json::Value;

use super::ApplicationError;
use crate::domain::model::{FormField, TicketFormInput};

/// Parse a JSON object of raw form values keyed by wire name.
///
/// Strings are taken as typed, numbers are rendered as text and `null`
/// leaves the field empty. The concert id is fixed by configuration, so a
/// supplied `concertId` is ignored, as are unknown keys.
pub fn parse_form_input(json: &str, concert_id: i64) -> Result<TicketFormInput, ApplicationError> {
    let value: Value = serde_json::from_str(json)?;
    let object = value
        .as_object()
        .ok_or_else(|| ApplicationError::ParseError("Form input must be a JSON object".to_string()))?;

    let mut input = TicketFormInput::new(concert_id);
    for (key, raw) in object {
        let field = match key.parse::<FormField>() {
            Ok(field) => field,
            Err(_) => {
                log::warn!("Ignoring unknown form field: {}", key);
                continue;
            }
        };

        if !field.is_editable() {
            log::warn!("Ignoring read-only form field: {}", key);
            continue;
        }

        input.set(field, raw_to_string(field, raw)?)?;
    }

    Ok(input)
}

fn raw_to_string(field: FormField, raw: &Value) -> Result<String, ApplicationError> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(ApplicationError::ParseError(format!(
            "Invalid {} format: expected string or number",
            field
        ))),
    }
}
