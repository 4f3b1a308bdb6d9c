use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::FilterError;

/// Select-box value meaning "no selection"
pub const PLACEHOLDER: &str = "--";

/// Value of one filter key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl FilterValue {
    /// Falsy values and the placeholder never reach the URL
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::Flag(b) => !b,
            FilterValue::Integer(n) => *n == 0,
            FilterValue::Text(s) => s.is_empty() || s == PLACEHOLDER,
            FilterValue::List(items) => items.is_empty(),
        }
    }

    /// Raw text as written to the query string (lists comma-joined)
    pub fn as_query_text(&self) -> String {
        match self {
            FilterValue::Flag(b) => b.to_string(),
            FilterValue::Integer(n) => n.to_string(),
            FilterValue::Text(s) => s.clone(),
            FilterValue::List(items) => items.join(","),
        }
    }

    pub fn as_list(&self) -> Vec<String> {
        match self {
            FilterValue::List(items) => items.clone(),
            FilterValue::Text(s) => s
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            other if other.is_blank() => Vec::new(),
            other => vec![other.as_query_text()],
        }
    }

    fn from_json(value: Value) -> Option<FilterValue> {
        match value {
            Value::Null | Value::Object(_) => None,
            Value::Bool(b) => Some(FilterValue::Flag(b)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => FilterValue::Integer(i),
                None => FilterValue::Text(n.to_string()),
            }),
            Value::String(s) => Some(FilterValue::Text(s)),
            Value::Array(items) => Some(FilterValue::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        Value::Null => None,
                        other => Some(other.to_string()),
                    })
                    .collect(),
            )),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Integer(i64::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::List(value)
    }
}

/// Flat filter record of one list page, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(BTreeMap<String, FilterValue>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    /// Text of an active key
    pub fn text(&self, key: &str) -> Option<String> {
        self.active(key).map(FilterValue::as_query_text)
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.active(key).map(FilterValue::as_list).unwrap_or_default()
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.active(key)? {
            FilterValue::Integer(n) => Some(*n),
            other => other.as_query_text().trim().parse().ok(),
        }
    }

    fn active(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key).filter(|v| !v.is_blank())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `{...self, ...overlay}`
    pub fn merged(&self, overlay: &FilterSet) -> FilterSet {
        let mut merged = self.clone();
        for (key, value) in overlay.iter() {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Copy with blank and placeholder values dropped
    pub fn pruned(&self) -> FilterSet {
        FilterSet(
            self.0
                .iter()
                .filter(|(_, v)| !v.is_blank())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Copy without the given keys
    pub fn without<S: AsRef<str>>(&self, keys: &[S]) -> FilterSet {
        let mut copy = self.clone();
        for key in keys {
            copy.0.remove(key.as_ref());
        }
        copy
    }

    /// Copy with each of `keys` cleared to an empty string
    pub fn cleared<S: AsRef<str>>(&self, keys: &[S]) -> FilterSet {
        let mut copy = self.clone();
        for key in keys {
            copy.insert(key.as_ref(), "");
        }
        copy
    }

    /// Number of keys holding a non-blank value, `skip` excluded
    pub fn active_count<S: AsRef<str>>(&self, skip: &[S]) -> usize {
        self.0
            .iter()
            .filter(|(k, v)| !v.is_blank() && !skip.iter().any(|s| s.as_ref() == k.as_str()))
            .count()
    }

    /// Build from any serializable filter struct
    ///
    /// `None` fields are dropped; nested objects are not supported and are
    /// skipped.
    pub fn from_typed<T: Serialize>(filters: &T) -> Result<FilterSet, FilterError> {
        let value = serde_json::to_value(filters)?;
        let mut set = FilterSet::new();
        if let Value::Object(map) = value {
            for (key, value) in map {
                match FilterValue::from_json(value) {
                    Some(v) => set.insert(key, v),
                    None => log::debug!("filter key '{}' has no scalar value, skipped", key),
                }
            }
        }
        Ok(set)
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pruned_drops_blank_and_placeholder() {
        let set = FilterSet::new()
            .with("a", "")
            .with("b", "x")
            .with("c", PLACEHOLDER)
            .with("page", 0i64)
            .with("flag", false)
            .with("ids", Vec::<String>::new());
        let pruned = set.pruned();
        assert_eq!(pruned.keys().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_merged_overlays_keys() {
        let base = FilterSet::new().with("status", "active").with("page", 2i64);
        let merged = base.merged(&FilterSet::new().with("status", "done"));
        assert_eq!(merged.text("status").as_deref(), Some("done"));
        assert_eq!(merged.integer("page"), Some(2));
    }

    #[test]
    fn test_list_reads_comma_text() {
        let set = FilterSet::new().with("wards", "4,5,6");
        assert_eq!(set.list("wards"), vec!["4", "5", "6"]);
        assert!(set.list("missing").is_empty());
    }

    #[test]
    fn test_from_typed_skips_none() {
        #[derive(Serialize)]
        struct AssetQuery {
            search: Option<String>,
            status: Option<String>,
            page: u32,
            ids: Vec<String>,
        }
        let set = FilterSet::from_typed(&AssetQuery {
            search: Some("pump".into()),
            status: None,
            page: 3,
            ids: vec!["1".into()],
        })
        .unwrap();
        assert_eq!(set.text("search").as_deref(), Some("pump"));
        assert!(set.get("status").is_none());
        assert_eq!(set.get("page"), Some(&FilterValue::Integer(3)));
        assert_eq!(set.list("ids"), vec!["1"]);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let set = FilterSet::new()
            .with("name", "ann")
            .with("page", 2i64)
            .with("wards", vec!["1".to_string(), "2".to_string()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"name":"ann","page":2,"wards":["1","2"]}"#);
        let back: FilterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_active_count_skips_paging() {
        let set = FilterSet::new()
            .with("name", "ann")
            .with("srf_id", "")
            .with("page", 4i64);
        assert_eq!(set.active_count(&["page", "limit"]), 1);
    }
}
