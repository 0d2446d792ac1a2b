//! The flat legacy record shape.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of the legacy export.
///
/// Every field may be missing, `null`, a string or a number; numbers are
/// kept in their textual form.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LegacyRecord {
    /// Destination category name.
    #[serde(rename = "aqua_menu", default, deserialize_with = "lenient_string")]
    pub category: Option<String>,

    /// Display name of the entry.
    #[serde(rename = "aqua_name", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Ordering hint, a numeric string.
    #[serde(rename = "aqua_m1", default, deserialize_with = "lenient_string")]
    pub order_hint: Option<String>,

    /// Image list or type marker (`www`, `docs`).
    #[serde(rename = "aqua_img", default, deserialize_with = "lenient_string")]
    pub image_hint: Option<String>,

    /// URL or folder reference, depending on the type.
    #[serde(rename = "aqua_m2", default, deserialize_with = "lenient_string")]
    pub secondary_hint: Option<String>,
}

impl LegacyRecord {
    pub fn name(&self) -> &str {
        trimmed(&self.name)
    }

    pub fn image_hint(&self) -> &str {
        trimmed(&self.image_hint)
    }

    pub fn secondary_hint(&self) -> &str {
        trimmed(&self.secondary_hint)
    }

    pub fn order_hint(&self) -> &str {
        trimmed(&self.order_hint)
    }

    pub fn category(&self) -> &str {
        trimmed(&self.category)
    }
}

fn trimmed(field: &Option<String>) -> &str {
    field.as_deref().map_or("", str::trim)
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_legacy_field_names() {
        let record: LegacyRecord = serde_json::from_value(json!({
            "aqua_menu": " Pool Care ",
            "aqua_name": "Opening",
            "aqua_m1": "3",
            "aqua_img": "23,24",
            "aqua_m2": null
        }))
        .unwrap();

        assert_eq!(record.category(), "Pool Care");
        assert_eq!(record.name(), "Opening");
        assert_eq!(record.order_hint(), "3");
        assert_eq!(record.image_hint(), "23,24");
        assert_eq!(record.secondary_hint, None);
    }

    #[test]
    fn numbers_and_missing_fields_are_tolerated() {
        let record: LegacyRecord =
            serde_json::from_value(json!({ "aqua_m1": 7, "aqua_img": 12 })).unwrap();
        assert_eq!(record.order_hint(), "7");
        assert_eq!(record.image_hint(), "12");
        assert_eq!(record.name(), "");
        assert_eq!(record.category, None);
    }

    #[test]
    fn nested_values_are_rejected() {
        let result: std::result::Result<LegacyRecord, _> =
            serde_json::from_value(json!({ "aqua_name": ["x"] }));
        assert!(result.is_err());
    }
}
