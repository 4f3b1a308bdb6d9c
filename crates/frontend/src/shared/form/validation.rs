//! Field rules and the submit-time validation pass

use std::sync::Arc;

use chrono::NaiveDate;

use super::binding::Validator;
use super::record::{FieldValue, FormField, FormRecord};
use super::state::Errors;

pub const REQUIRED: &str = "Field is required";

/// Result of a whole-form validation pass
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport<F: FormField> {
    pub errors: Errors<F>,
    /// First failing field in rule declaration order
    pub first_invalid: Option<F>,
}

impl<F: FormField> ValidationReport<F> {
    pub fn is_valid(&self) -> bool {
        self.first_invalid.is_none()
    }
}

/// Ordered list of per-field rules for one record type
pub struct FormValidation<R: FormRecord> {
    rules: Vec<(R::Field, Validator)>,
}

impl<R: FormRecord> Default for FormValidation<R> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<R: FormRecord> Clone for FormValidation<R> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<R: FormRecord> FormValidation<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(
        mut self,
        field: R::Field,
        validate: impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        let validate: Validator = Arc::new(validate);
        self.rules.push((field, validate));
        self
    }

    /// Combined validator of every rule on `field`, for validate-on-change
    pub fn field_validator(&self, field: R::Field) -> Option<Validator> {
        let rules: Vec<Validator> = self
            .rules
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, v)| Arc::clone(v))
            .collect();
        if rules.is_empty() {
            return None;
        }
        Some(Arc::new(move |value: &FieldValue| {
            rules.iter().find_map(|validate| validate(value))
        }))
    }

    /// Run every rule; the first failing rule of a field provides its message
    pub fn check(&self, form: &R) -> ValidationReport<R::Field> {
        let mut errors = Errors::new();
        let mut first_invalid = None;
        for (field, validate) in &self.rules {
            if errors.contains_key(field) {
                continue;
            }
            if let Some(message) = validate(&form.value(*field)) {
                errors.insert(*field, message);
                if first_invalid.is_none() {
                    first_invalid = Some(*field);
                }
            }
        }
        ValidationReport {
            errors,
            first_invalid,
        }
    }
}

pub fn required() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| value.is_blank().then(|| REQUIRED.to_string())
}

/// Select fields whose "nothing chosen" option carries id 0
pub fn required_selection() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| {
        let chosen = value.clone().into_integer().unwrap_or(0);
        (chosen == 0).then(|| REQUIRED.to_string())
    }
}

pub fn max_length(limit: usize) -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    move |value: &FieldValue| {
        (value.as_text().chars().count() > limit)
            .then(|| format!("Must be at most {} characters", limit))
    }
}

/// Indian postal code: six digits, first one non-zero
pub fn is_valid_pincode(raw: &str) -> bool {
    let raw = raw.trim();
    raw.len() == 6
        && raw.chars().all(|c| c.is_ascii_digit())
        && !raw.starts_with('0')
}

pub fn pincode() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| {
        (!is_valid_pincode(&value.as_text())).then(|| "Please enter valid pincode".to_string())
    }
}

/// Normalise an Indian phone number to E.164 (`+91` and ten digits)
///
/// Only the Indian numbering plan is supported: ten national digits not
/// starting with 0 or 1. Accepts `+91`, `91` and trunk `0` prefixes with
/// spaces, dashes or parentheses in between. Any other country code is
/// rejected.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let national = if let Some(rest) = compact.strip_prefix("+91") {
        rest
    } else if compact.len() == 12 && compact.starts_with("91") {
        &compact[2..]
    } else if compact.len() == 11 && compact.starts_with('0') {
        &compact[1..]
    } else {
        compact.as_str()
    };
    let valid = national.len() == 10
        && national.chars().all(|c| c.is_ascii_digit())
        && !national.starts_with('0')
        && !national.starts_with('1');
    valid.then(|| format!("+91{}", national))
}

pub fn phone_number() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| {
        normalize_phone(&value.as_text())
            .is_none()
            .then(|| "Please enter valid phone number".to_string())
    }
}

fn coordinate_in(value: &FieldValue, bound: f64) -> bool {
    let text = value.as_text();
    let text = text.trim();
    if text.is_empty() {
        return true;
    }
    text.parse::<f64>()
        .map(|v| v.is_finite() && (-bound..=bound).contains(&v))
        .unwrap_or(false)
}

/// Optional latitude; blank passes
pub fn latitude() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| {
        (!coordinate_in(value, 90.0))
            .then(|| "Please enter valid latitude between -90 and 90.".to_string())
    }
}

/// Optional longitude; blank passes
pub fn longitude() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| {
        (!coordinate_in(value, 180.0))
            .then(|| "Please enter valid longitude between -180 and 180.".to_string())
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !raw.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

pub fn email() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| {
        (!is_valid_email(&value.as_text())).then(|| "Please enter a valid email".to_string())
    }
}

/// Optional `YYYY-MM-DD` date; blank passes
pub fn iso_date() -> impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static {
    |value: &FieldValue| {
        let text = value.as_text();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .err()
            .map(|_| "Please enter a date as YYYY-MM-DD".to_string())
    }
}
