use std::fmt::Debug;
use std::hash::Hash;

/// Field name of a concrete form record
///
/// Implemented by a fieldless enum per record so field names are checked at
/// compile time.
pub trait FormField: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// HTML `name` attribute and wire key of the field
    fn name(self) -> &'static str;

    /// Every field, in declaration order
    fn all() -> &'static [Self];

    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

/// A named-field value bag edited by one form
pub trait FormRecord: Clone + PartialEq + Debug + Send + Sync + 'static {
    type Field: FormField;

    fn value(&self, field: Self::Field) -> FieldValue;

    /// Store `value` into `field`, coercing it to the field's native type
    fn set_value(&mut self, field: Self::Field, value: FieldValue);

    /// Copy of `self` with one field replaced
    fn with_value(&self, field: Self::Field, value: FieldValue) -> Self {
        let mut next = self.clone();
        next.set_value(field, value);
        next
    }
}

/// Dynamic value exchanged between field components and records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(Option<i64>),
    Flag(bool),
    List(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Text rendition used by text inputs
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(Some(n)) => n.to_string(),
            FieldValue::Integer(None) => String::new(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::List(items) => items.join(","),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            other => other.as_text(),
        }
    }

    /// Integer coercion; blank or unparsable text becomes `None`
    pub fn into_integer(self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => n,
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Flag(b) => Some(i64::from(b)),
            FieldValue::List(items) => items.first().and_then(|s| s.trim().parse().ok()),
        }
    }

    pub fn into_flag(self) -> bool {
        match self {
            FieldValue::Flag(b) => b,
            FieldValue::Text(s) => matches!(s.trim(), "true" | "on" | "1"),
            FieldValue::Integer(n) => n.unwrap_or(0) != 0,
            FieldValue::List(items) => !items.is_empty(),
        }
    }

    pub fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Text(s) => s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            FieldValue::Integer(Some(n)) => vec![n.to_string()],
            FieldValue::Integer(None) => Vec::new(),
            FieldValue::Flag(b) => vec![b.to_string()],
        }
    }

    /// Mirrors JS truthiness: `""`, `None`, `false` and `[]` are blank
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Integer(n) => n.is_none(),
            FieldValue::Flag(b) => !b,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(FieldValue::from(" 42 ").into_integer(), Some(42));
        assert_eq!(FieldValue::from("").into_integer(), None);
        assert_eq!(FieldValue::from("abc").into_integer(), None);
        assert_eq!(FieldValue::Flag(true).into_integer(), Some(1));
    }

    #[test]
    fn test_list_coercion_splits_commas() {
        assert_eq!(
            FieldValue::from("1, 2,,3").into_list(),
            vec!["1".to_string(), "2".to_string(), "3".to_string()]
        );
        assert!(FieldValue::Integer(None).into_list().is_empty());
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::from("  ").is_blank());
        assert!(FieldValue::Flag(false).is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(!FieldValue::Integer(Some(0)).is_blank());
        assert!(!FieldValue::from("x").is_blank());
    }
}
