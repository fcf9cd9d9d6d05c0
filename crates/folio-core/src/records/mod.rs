//! Typed records for the backend's JSON shapes.
//!
//! The backend owns these schemas and fills optional fields loosely. Every
//! optional field goes through a lenient deserializer here: a missing, null
//! or wrongly typed value becomes its default instead of failing the record,
//! and one bad record never fails a whole collection. Rendering code
//! downstream never has to guard against a missing field.

pub mod blog;
pub mod cdn_image;
pub mod photo;
pub mod portfolio;

pub use blog::{BlogPost, BlogPostSummary};
pub use cdn_image::CdnImage;
pub use photo::{Photo, PhotoData};
pub use portfolio::{EntryKind, MediaLink, PortfolioEntry};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text of a scalar value. Numbers and booleans keep their JSON spelling,
/// so `2021` and `"2021"` read the same.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accept any scalar as text; null, arrays and objects are absent.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// [`lenient_string`] for fields that are never absent, defaulting to empty.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// Accept only a JSON string; every other shape is absent.
pub(crate) fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accept an array and keep its scalar elements as text; anything else is empty.
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

/// Accept a non-negative integer or its decimal string. Floats are
/// truncated; anything else, or a value past `u32::MAX`, is absent.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).ok(),
            None => n
                .as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
                .map(|v| v as u32),
        },
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decode each element on its own, dropping the ones that are not records
/// at all (null, bare strings).
pub fn decode_records<R: DeserializeOwned>(values: Vec<Value>) -> Vec<R> {
    let total = values.len();
    let records: Vec<R> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    if records.len() < total {
        tracing::debug!("Skipped {} undecodable record(s) of {}", total - records.len(), total);
    }
    records
}

/// Array of records via [`decode_records`]; a non-array is empty.
pub(crate) fn lenient_records<'de, D, R>(deserializer: D) -> Result<Vec<R>, D::Error>
where
    D: Deserializer<'de>,
    R: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => decode_records(values),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "lenient_string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "lenient_strings")]
        list: Vec<String>,
        #[serde(default, deserialize_with = "lenient_u32")]
        size: Option<u32>,
    }

    fn decode(value: Value) -> Loose {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_scalars_become_text() {
        assert_eq!(decode(json!({"text": 2020})).text.as_deref(), Some("2020"));
        assert_eq!(decode(json!({"text": true})).text.as_deref(), Some("true"));
        assert_eq!(decode(json!({"text": null})).text, None);
        assert_eq!(decode(json!({"text": {"a": 1}})).text, None);
    }

    #[test]
    fn test_list_keeps_scalar_elements() {
        let loose = decode(json!({"list": [2023, "web", null, {"x": 1}, false]}));
        assert_eq!(loose.list, vec!["2023", "web", "false"]);
    }

    #[test]
    fn test_sizes_accept_numeric_strings() {
        assert_eq!(decode(json!({"size": 1200})).size, Some(1200));
        assert_eq!(decode(json!({"size": "1200"})).size, Some(1200));
        assert_eq!(decode(json!({"size": 640.7})).size, Some(640));
        assert_eq!(decode(json!({"size": "wide"})).size, None);
        assert_eq!(decode(json!({"size": -3})).size, None);
        assert_eq!(decode(json!({"size": 5_000_000_000u64})).size, None);
        assert_eq!(decode(json!({"size": null})).size, None);
    }

    #[test]
    fn test_decode_records_skips_non_records() {
        let titles: Vec<String> = decode_records::<PortfolioEntry>(vec![
            json!({"title": "Kept"}),
            Value::Null,
            json!("bare"),
            json!({"title": null}),
        ])
        .into_iter()
        .map(|e| e.title)
        .collect();
        assert_eq!(titles, vec!["Kept", ""]);
    }
}
