//! Leaf value coercion.
//!
//! Every trailing value in a system document goes through [`coerce_value`],
//! which turns the raw text into a number, boolean, list or string. There is
//! no escaping: an unquoted value containing a comma always becomes a list.

use std::fmt;

use serde::{Serialize, Serializer};

/// Characters that mark a value as quoted. Quoted values are never split.
const QUOTES: [char; 2] = ['"', '\''];

/// A typed scalar (or list of scalars) read from a document line.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// The string content if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Whole numbers go out as integers so `40` stays `40`, not `40.0`
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
        }
    }
}

/// Coerce the raw trailing text of a line.
///
/// Returns `None` for an empty value; the tree builder turns that into an
/// empty object placeholder.
pub fn coerce_value(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }
    Some(coerce_part(raw))
}

fn coerce_part(raw: &str) -> Value {
    if let Some(n) = parse_number(raw) {
        return Value::Number(n);
    }

    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if raw.contains(',') && !is_quoted(raw) {
        return Value::List(raw.split(',').map(coerce_part).collect());
    }

    Value::Text(raw.to_string())
}

/// Decimal number with optional sign. `inf` and `NaN` are rejected.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // f64::from_str accepts "inf", "infinity" and "nan"; require a digit
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A value is quoted when it, or any of its comma-separated parts, opens with a quote.
fn is_quoted(raw: &str) -> bool {
    raw.split(',')
        .any(|part| part.trim_start().starts_with(QUOTES))
}
