//! Template JSON parsing and data binding paths

use serde_json::{Number, Value};

use crate::{Result, Template, TemplateError};

/// Parse a template from JSON string
pub fn parse_template(json: &str) -> Result<Template> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Resolve a dotted binding path against data
///
/// Supports simple paths like:
/// - `patient.name` - Nested field
/// - `treatments.0.name` - Array element by dotted index
/// - `treatments[0].name` - Array element by bracket index
///
/// A leading `$.` is accepted and ignored. Returns `None` as soon as a segment
/// is missing or the current value cannot be indexed.
pub fn resolve_binding<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
    let path = path.trim();
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return None;
    }

    let mut current = data;

    for segment in path.split('.') {
        // Check for array index
        if let Some(bracket_pos) = segment.find('[') {
            let field = &segment[..bracket_pos];
            let index_str = segment[bracket_pos + 1..].strip_suffix(']')?;
            let index: usize = index_str.parse().ok()?;

            if !field.is_empty() {
                current = step(current, field)?;
            }
            current = current.as_array()?.get(index)?;
        } else {
            current = step(current, segment)?;
        }
    }

    Some(current)
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

/// Convert a JSON value to string for substitution
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_string(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

// Floats print without a trailing ".0" so 100.0 renders as "100".
fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}
