use std::collections::BTreeMap;

use super::record::{FieldValue, FormRecord};

/// Per-field validation messages; a field without an entry is valid
pub type Errors<F> = BTreeMap<F, String>;

/// Values and errors of one form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R: FormRecord> {
    pub form: R,
    pub errors: Errors<R::Field>,
}

impl<R: FormRecord + Default> Default for FormState<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

/// Structured update of a [`FormState`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction<R: FormRecord> {
    /// Replace the whole value record; errors are left alone
    SetForm(R),
    /// Replace the whole error record
    SetErrors(Errors<R::Field>),
    /// Set one field's value and its error together
    SetField {
        field: R::Field,
        value: FieldValue,
        error: Option<String>,
    },
}

impl<R: FormRecord> FormState<R> {
    pub fn new(form: R) -> Self {
        Self {
            form,
            errors: Errors::new(),
        }
    }

    pub fn apply(&mut self, action: FormAction<R>) {
        match action {
            FormAction::SetForm(form) => self.form = form,
            FormAction::SetErrors(errors) => self.errors = errors,
            FormAction::SetField { field, value, error } => {
                self.form.set_value(field, value);
                match error {
                    Some(message) => {
                        self.errors.insert(field, message);
                    }
                    None => {
                        self.errors.remove(&field);
                    }
                }
            }
        }
    }

    /// Pure reducer form of [`FormState::apply`]
    pub fn reduce(mut self, action: FormAction<R>) -> Self {
        self.apply(action);
        self
    }

    /// Error to display next to `field`; empty messages count as none
    pub fn error(&self, field: R::Field) -> Option<&str> {
        self.errors
            .get(&field)
            .map(String::as_str)
            .filter(|e| !e.is_empty())
    }

    pub fn is_valid(&self) -> bool {
        self.errors.values().all(|e| e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::test_support::{ContactField, ContactForm};
    use proptest::prelude::*;

    fn set_field(field: ContactField, value: &str, error: Option<&str>) -> FormAction<ContactForm> {
        FormAction::SetField {
            field,
            value: FieldValue::from(value),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_required_error_shows_then_clears() {
        let mut state = FormState::new(ContactForm {
            name: String::new(),
            email: "a@b.com".into(),
            notes: String::new(),
        });

        state.apply(set_field(ContactField::Name, "", Some("required")));
        assert_eq!(state.error(ContactField::Name), Some("required"));

        state.apply(set_field(ContactField::Name, "X", None));
        assert_eq!(state.error(ContactField::Name), None);
        assert_eq!(state.form.name, "X");
        assert_eq!(state.form.email, "a@b.com");
    }

    #[test]
    fn test_set_form_keeps_errors() {
        let mut state = FormState::new(ContactForm::default());
        state.apply(set_field(ContactField::Email, "bad", Some("invalid email")));

        state.apply(FormAction::SetForm(ContactForm {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            notes: String::new(),
        }));

        assert_eq!(state.form.name, "Ann");
        assert_eq!(state.error(ContactField::Email), Some("invalid email"));
    }

    #[test]
    fn test_set_errors_keeps_form() {
        let mut state = FormState::new(ContactForm {
            name: "Ann".into(),
            ..Default::default()
        });
        let before = state.form.clone();

        let mut errors = Errors::new();
        errors.insert(ContactField::Notes, "too long".to_string());
        state.apply(FormAction::SetErrors(errors.clone()));

        assert_eq!(state.form, before);
        assert_eq!(state.errors, errors);
    }

    #[test]
    fn test_empty_error_is_not_displayed() {
        let state = FormState::new(ContactForm::default())
            .reduce(set_field(ContactField::Name, "", Some("")));
        assert_eq!(state.error(ContactField::Name), None);
        assert!(state.is_valid());
    }

    fn field_strategy() -> impl Strategy<Value = ContactField> {
        prop_oneof![
            Just(ContactField::Name),
            Just(ContactField::Email),
            Just(ContactField::Notes),
        ]
    }

    fn action_strategy() -> impl Strategy<Value = (ContactField, String, Option<String>)> {
        (
            field_strategy(),
            "[a-z@.]{0,8}",
            proptest::option::of("[a-z ]{1,10}"),
        )
    }

    proptest! {
        #[test]
        fn prop_set_field_sets_value_and_error(actions in proptest::collection::vec(action_strategy(), 1..20)) {
            let mut state = FormState::new(ContactForm::default());
            for (field, value, error) in actions {
                state.apply(FormAction::SetField {
                    field,
                    value: FieldValue::Text(value.clone()),
                    error: error.clone(),
                });
                prop_assert_eq!(state.form.value(field), FieldValue::Text(value));
                prop_assert_eq!(state.errors.get(&field).cloned(), error);
            }
        }

        #[test]
        fn prop_set_field_is_idempotent((field, value, error) in action_strategy()) {
            let action = FormAction::SetField {
                field,
                value: FieldValue::Text(value),
                error,
            };
            let once = FormState::new(ContactForm::default()).reduce(action.clone());
            let twice = once.clone().reduce(action);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_whole_record_actions_are_independent(
            seed in proptest::collection::vec(action_strategy(), 0..10),
            name in "[a-z]{0,6}",
            message in "[a-z]{1,6}",
        ) {
            let mut state = FormState::new(ContactForm::default());
            for (field, value, error) in seed {
                state.apply(FormAction::SetField { field, value: FieldValue::Text(value), error });
            }

            let errors_before = state.errors.clone();
            state.apply(FormAction::SetForm(ContactForm { name, ..Default::default() }));
            prop_assert_eq!(&state.errors, &errors_before);

            let form_before = state.form.clone();
            let mut errors = Errors::new();
            errors.insert(ContactField::Email, message);
            state.apply(FormAction::SetErrors(errors));
            prop_assert_eq!(&state.form, &form_before);
        }
    }
}
