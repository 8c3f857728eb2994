use std::fmt;

/// A field's current engineering value.
///
/// Unscaled integer kinds stay `Integer`; any field with a scale factor, and
/// every `Float32` field, carries a `Float`. `Text` holds decoded packed
/// strings (device identifiers, serial numbers).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value, if it has one.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(x) => Some(*x),
            FieldValue::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// JSON representation for the outbound telemetry document.
    ///
    /// Floats are rounded to two decimal places, matching what the plant
    /// backend expects for engineering units.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Integer(n) => serde_json::json!(n),
            FieldValue::Float(x) => serde_json::json!((x * 100.0).round() / 100.0),
            FieldValue::Text(s) => serde_json::json!(s),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Integer(0)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(x) => write!(f, "{x:.2}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    #[inline]
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<f64> for FieldValue {
    #[inline]
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<&str> for FieldValue {
    #[inline]
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}
