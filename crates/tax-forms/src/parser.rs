//! Input parsing: safe numeric coercion and record decoding

use crate::{FormError, FormRecord, FormType, Result};
use serde::de::{Deserialize, Deserializer, Error, Unexpected};
use serde_json::Value;
use std::collections::HashMap;

/// Loose key/value view used for the repeated field groups
pub(crate) type TextMap = HashMap<String, Value>;

const EXPECTED_TEXT: &str = "a string or number";

/// Coerce a form input to a number
///
/// Empty, blank, or unparseable input (and non-finite results such as `NaN`
/// or `inf`) yield exactly 0.0. Surrounding whitespace is ignored.
///
/// # Examples
/// ```
/// use tax_forms::safe_parse;
/// assert_eq!(safe_parse("1,000"), 0.0);
/// assert_eq!(safe_parse(" 12.5 "), 12.5);
/// assert_eq!(safe_parse(""), 0.0);
/// ```
pub fn safe_parse(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Decode a record of the given form type from its JSON body
pub fn parse_record(form_type: FormType, json: &str) -> Result<FormRecord> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| FormError::InvalidRecord(e.to_string()))?;
    FormRecord::from_json(form_type, value)
}

/// Convert a JSON value to the text a form field holds
///
/// Strings are kept as-is, numbers keep their JSON text and `null` is blank.
/// Booleans, arrays and objects are not form text.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
        _ => Unexpected::Other("value"),
    }
}

/// `deserialize_with` for text fields, so `"1000"` and `1000` read the same
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_string(&value)
        .ok_or_else(|| D::Error::invalid_type(unexpected(&value), &EXPECTED_TEXT))
}

/// Remove `key` from the map and return its text, or `""` when absent
pub(crate) fn take_text<E: Error>(map: &mut TextMap, key: &str) -> std::result::Result<String, E> {
    let Some(value) = map.remove(key) else {
        return Ok(String::new());
    };
    value_to_string(&value).ok_or_else(|| {
        E::custom(format_args!(
            "{key}: invalid type: {}, expected {EXPECTED_TEXT}",
            unexpected(&value)
        ))
    })
}
