//! URL query string encoding of a [`FilterSet`]

use serde::de::DeserializeOwned;

use super::error::FilterError;
use super::value::{FilterSet, FilterValue};

/// Encode the active keys of `filters` as `k=v&...`
///
/// Lists are written as comma-joined, individually escaped items.
pub fn encode_query(filters: &FilterSet) -> String {
    filters
        .pruned()
        .iter()
        .map(|(key, value)| {
            let encoded = match value {
                FilterValue::List(items) => items
                    .iter()
                    .map(|item| urlencoding::encode(item).into_owned())
                    .collect::<Vec<_>>()
                    .join(","),
                other => urlencoding::encode(&other.as_query_text()).into_owned(),
            };
            format!("{}={}", urlencoding::encode(key), encoded)
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string (with or without the leading `?`) into text values
///
/// Pairs are read one at a time: a bracketed or undecodable key is skipped
/// with a warning and a repeated key keeps its last value.
pub fn decode_query(query: &str) -> FilterSet {
    let mut filters = FilterSet::new();
    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let (key, value) = match (decode_component(raw_key), decode_component(raw_value)) {
            (Some(key), Some(value)) => (key, value),
            _ => {
                log::warn!("ignoring undecodable query pair '{}'", pair);
                continue;
            }
        };
        if key.is_empty() || key.contains(['[', ']']) {
            log::warn!("ignoring unsupported query key '{}'", key);
            continue;
        }
        filters.insert(key, value);
    }
    filters
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Decode a query string straight into a page's typed filter struct
pub fn decode_typed<T: DeserializeOwned>(query: &str) -> Result<T, FilterError> {
    Ok(serde_qs::from_str(query.trim_start_matches('?'))?)
}

/// Serde adapter for comma-joined id lists
///
/// Serializes as a sequence and accepts either a sequence or a single
/// comma-joined string.
pub mod comma_list {
    use std::fmt;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        items.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        struct CommaList;

        impl<'de> Visitor<'de> for CommaList {
            type Value = Vec<String>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a comma-separated string or a list of strings")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Vec::new())
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<String>()? {
                    items.push(item);
                }
                Ok(items)
            }
        }

        deserializer.deserialize_any(CommaList)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn test_encode_skips_blank_keys() {
        let filters = FilterSet::new().with("a", "").with("b", "x").with("c", "--");
        assert_eq!(encode_query(&filters), "b=x");
    }

    #[test]
    fn test_encode_lists_and_escapes() {
        let filters = FilterSet::new()
            .with("name", "John Doe")
            .with("wards", vec!["12".to_string(), "15".to_string()])
            .with("page", 2i64);
        assert_eq!(encode_query(&filters), "name=John%20Doe&page=2&wards=12,15");
    }

    #[test]
    fn test_decode_reads_text_values() {
        let filters = decode_query("?status=done&page=2&wards=1,2");
        assert_eq!(filters.text("status").as_deref(), Some("done"));
        assert_eq!(filters.integer("page"), Some(2));
        assert_eq!(filters.list("wards"), vec!["1", "2"]);
        assert!(decode_query("").is_empty());
    }

    #[test]
    fn test_decode_keeps_valid_pairs_beside_bad_keys() {
        let filters = decode_query("a[]=1&status=done&a=1&a=2&name=John+Doe%21");
        assert_eq!(filters.text("status").as_deref(), Some("done"));
        assert_eq!(filters.text("a").as_deref(), Some("2"));
        assert_eq!(filters.text("name").as_deref(), Some("John Doe!"));
        assert!(filters.get("a[]").is_none());
    }

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct ResultQuery {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        page: Option<u32>,
        #[serde(default, with = "comma_list")]
        local_bodies: Vec<String>,
    }

    #[test]
    fn test_decode_typed_splits_comma_lists() {
        let q: ResultQuery = decode_typed("name=ann&page=3&local_bodies=7,9").unwrap();
        assert_eq!(
            q,
            ResultQuery {
                name: Some("ann".into()),
                page: Some(3),
                local_bodies: vec!["7".into(), "9".into()],
            }
        );
        let empty: ResultQuery = decode_typed("").unwrap();
        assert_eq!(empty, ResultQuery::default());
    }

    #[test]
    fn test_typed_struct_becomes_list_filter() {
        let q = ResultQuery {
            name: None,
            page: Some(1),
            local_bodies: vec!["7".into()],
        };
        let set = FilterSet::from_typed(&q).unwrap();
        assert_eq!(set.get("local_bodies"), Some(&FilterValue::List(vec!["7".into()])));
        assert_eq!(encode_query(&set), "local_bodies=7&page=1");
    }
}
