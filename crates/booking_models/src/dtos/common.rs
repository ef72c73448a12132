use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};

/// Text shown in place of a field the backend did not send.
pub const FIELD_PLACEHOLDER: &str = "-";

/// Identifier of a backend record. The backend is not ours, so both numeric
/// and textual ids are accepted and shown as they arrive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

pub fn or_placeholder<T: Display>(value: Option<&T>) -> String {
    value
        .map(|x| x.to_string())
        .filter(|x| !x.is_empty())
        .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string())
}

/// Any JSON value a record field may carry. Values of another shape (arrays,
/// objects, null) land in `Other` and read as absent.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Other(IgnoredAny),
}

fn field_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FieldValue, D::Error> {
    FieldValue::deserialize(deserializer)
}

pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match field_value(deserializer)? {
        FieldValue::Integer(n) => Some(RecordId::Number(n)),
        FieldValue::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            Some(RecordId::Number(f as i64))
        }
        FieldValue::Float(f) => Some(RecordId::Text(f.to_string())),
        FieldValue::Text(s) => Some(RecordId::Text(s)),
        FieldValue::Boolean(_) | FieldValue::Other(_) => None,
    })
}

/// Whole numbers, rounded floats and numeric strings.
pub fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let from_float = |f: f64| f.is_finite().then(|| f.round() as i64);
    Ok(match field_value(deserializer)? {
        FieldValue::Integer(n) => Some(n),
        FieldValue::Float(f) => from_float(f),
        FieldValue::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(from_float))
        }
        FieldValue::Boolean(_) | FieldValue::Other(_) => None,
    })
}

/// Scalars rendered as text.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match field_value(deserializer)? {
        FieldValue::Integer(n) => Some(n.to_string()),
        FieldValue::Float(f) => Some(f.to_string()),
        FieldValue::Boolean(b) => Some(b.to_string()),
        FieldValue::Text(s) => Some(s),
        FieldValue::Other(_) => None,
    })
}

/// Booleans, `0`/`1` and `"true"`/`"false"`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match field_value(deserializer)? {
        FieldValue::Boolean(b) => Some(b),
        FieldValue::Integer(0) => Some(false),
        FieldValue::Integer(1) => Some(true),
        FieldValue::Text(s) => s.trim().to_lowercase().parse().ok(),
        _ => None,
    })
}
