//! Conversion of parameter structs into query strings.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// Flattens a serializable parameter struct into query pairs.
///
/// Nulls and empty strings are skipped, arrays become comma-separated
/// lists, and nested objects are sent as JSON.
///
/// # Errors
///
/// Returns [`ResourceError::Serialize`] if `params` cannot be serialized.
///
/// # Example
///
/// ```rust
/// use aftership::rest::serialize_to_query;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Params {
///     page: u32,
///     slug: Vec<&'static str>,
///     keyword: Option<String>,
/// }
///
/// let query = serialize_to_query(&Params { page: 2, slug: vec!["ups", "dhl"], keyword: None }).unwrap();
/// assert_eq!(query.get("page").map(String::as_str), Some("2"));
/// assert_eq!(query.get("slug").map(String::as_str), Some("ups,dhl"));
/// assert!(!query.contains_key("keyword"));
/// ```
pub fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::Serialize {
        reason: e.to_string(),
    })?;

    let mut query = BTreeMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    if !s.is_empty() {
                        query.insert(key, s);
                    }
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) if !s.is_empty() => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
