use leptos::prelude::*;

use super::binding::{FieldBinding, FormDispatch, Validator};
use super::record::{FieldValue, FormRecord};
use super::state::{FormAction, FormState};
use super::validation::{FormValidation, ValidationReport};

/// Reactive owner of one page's [`FormState`]
///
/// Cheap to copy into event handlers and view closures.
pub struct FormController<R: FormRecord> {
    state: RwSignal<FormState<R>>,
}

impl<R: FormRecord> Clone for FormController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: FormRecord> Copy for FormController<R> {}

impl<R: FormRecord> FormController<R> {
    pub fn new(form: R) -> Self {
        Self {
            state: RwSignal::new(FormState::new(form)),
        }
    }

    pub fn dispatch(&self, action: FormAction<R>) {
        self.state.update(|state| state.apply(action));
    }

    pub fn state(&self) -> ReadSignal<FormState<R>> {
        self.state.read_only()
    }

    pub fn form(&self) -> R {
        self.state.with(|s| s.form.clone())
    }

    pub fn form_untracked(&self) -> R {
        self.state.with_untracked(|s| s.form.clone())
    }

    pub fn value(&self, field: R::Field) -> FieldValue {
        self.state.with(|s| s.form.value(field))
    }

    pub fn error(&self, field: R::Field) -> Option<String> {
        self.state.with(|s| s.error(field).map(str::to_string))
    }

    /// Start over from `form` with no errors (edit flows after fetch, after submit)
    pub fn reset(&self, form: R) {
        self.state.set(FormState::new(form));
    }

    pub fn bind(&self) -> FieldBinding<R, Self> {
        FieldBinding::controlled(*self)
    }

    /// Binding that validates on every change with the rules of `field`
    pub fn bind_with(&self, rules: &FormValidation<R>, field: R::Field) -> FieldBinding<R, Self> {
        FieldBinding::Controlled {
            dispatcher: *self,
            validate: rules.field_validator(field),
        }
    }

    pub fn bind_validated(&self, validate: Validator) -> FieldBinding<R, Self> {
        FieldBinding::Controlled {
            dispatcher: *self,
            validate: Some(validate),
        }
    }

    /// Submit-time pass: replaces the error record and returns the report
    pub fn validate(&self, rules: &FormValidation<R>) -> ValidationReport<R::Field> {
        let report = self.state.with_untracked(|s| rules.check(&s.form));
        if let Some(field) = report.first_invalid {
            log::debug!("form invalid, first field: {:?}", field);
        }
        self.dispatch(FormAction::SetErrors(report.errors.clone()));
        report
    }
}

impl<R: FormRecord> FormDispatch<R> for FormController<R> {
    fn dispatch(&self, action: FormAction<R>) {
        FormController::dispatch(self, action);
    }

    fn with_state<O>(&self, f: impl FnOnce(&FormState<R>) -> O) -> O {
        self.state.with(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::binding::FieldChange;
    use crate::shared::form::test_support::{ContactField, ContactForm};
    use crate::shared::form::validation::{email, required};

    #[test]
    fn test_controller_validates_on_change() {
        let controller = FormController::new(ContactForm::default());
        let rules = FormValidation::new()
            .rule(ContactField::Email, required())
            .rule(ContactField::Email, email());
        let handler = controller.bind_with(&rules, ContactField::Email).change_handler();

        handler(FieldChange {
            field: ContactField::Email,
            value: FieldValue::from("broken"),
        });
        assert_eq!(
            controller.error(ContactField::Email).as_deref(),
            Some("Please enter a valid email")
        );

        handler(FieldChange {
            field: ContactField::Email,
            value: FieldValue::from("a@b.com"),
        });
        assert_eq!(controller.error(ContactField::Email), None);
        assert_eq!(controller.form_untracked().email, "a@b.com");
    }

    #[test]
    fn test_submit_validation_replaces_errors() {
        let controller = FormController::new(ContactForm::default());
        let rules = FormValidation::new()
            .rule(ContactField::Name, required())
            .rule(ContactField::Email, required());

        let report = controller.validate(&rules);
        assert_eq!(report.first_invalid, Some(ContactField::Name));
        assert!(controller.error(ContactField::Email).is_some());

        controller.reset(ContactForm {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            notes: String::new(),
        });
        assert!(controller.validate(&rules).is_valid());
        assert_eq!(controller.error(ContactField::Name), None);
    }
}
