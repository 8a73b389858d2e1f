use serde::Serialize;
use serde_json::Value;

/// A single typed cell value.
///
/// Typing is decided purely from the cell's text, independent of which
/// column it came from: integer first, then float, then the trimmed text
/// itself. Serializes untagged, so JSON output carries the bare number or
/// string.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Integer(value) => Value::from(value),
            Scalar::Float(value) => Value::from(value),
            Scalar::Text(value) => Value::String(value),
        }
    }
}

/// Converts raw cell text into a typed scalar.
///
/// Absent cells (a row shorter than the header) arrive as `None` and
/// become the empty string; there is no null in the output. Whitespace is
/// trimmed before any typing decision, so the string fallback is always
/// the trimmed form. `i64` parsing rejects decimal points and exponents,
/// which is what routes `1e3` to the float branch. Float spellings the
/// Rust grammar admits but JSON cannot carry (`inf`, `NaN`) fall through
/// to the string case.
pub fn parse_scalar(raw: Option<&str>) -> Scalar {
    let Some(raw) = raw else {
        return Scalar::Text(String::new());
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Scalar::Text(String::new());
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Scalar::Integer(parsed);
    }
    if let Ok(parsed) = trimmed.parse::<f64>() {
        if parsed.is_finite() {
            return Scalar::Float(parsed);
        }
    }
    Scalar::Text(trimmed.to_string())
}
