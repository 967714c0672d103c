//! Deserialization helpers for loosely typed backend payloads

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accept either `"1024"` or `1024` and keep it as text
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    }))
}

/// Items of a listing that is either wrapped (`{"orders": [...]}`) or a bare array
pub fn listing_items<'a>(value: &'a serde_json::Value, key: &str) -> &'a [serde_json::Value] {
    if let Some(items) = value.as_array() {
        return items;
    }
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "string_or_number")]
        session: Option<String>,
    }

    #[test]
    fn test_null_and_numbers() {
        let s: Sample = serde_json::from_value(json!({ "name": null, "session": 42 })).unwrap();
        assert_eq!(s.name, "");
        assert_eq!(s.session.as_deref(), Some("42"));

        let s: Sample = serde_json::from_value(json!({ "session": "S-7" })).unwrap();
        assert_eq!(s.session.as_deref(), Some("S-7"));

        let s: Sample = serde_json::from_value(json!({})).unwrap();
        assert!(s.session.is_none());
    }

    #[test]
    fn test_listing_items() {
        let wrapped = json!({ "orders": [1, 2, 3] });
        let bare = json!([1, 2]);
        let broken = json!({ "unexpected": true });
        assert_eq!(listing_items(&wrapped, "orders").len(), 3);
        assert_eq!(listing_items(&bare, "orders").len(), 2);
        assert!(listing_items(&broken, "orders").is_empty());
    }
}
