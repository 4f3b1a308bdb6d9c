use std::sync::Arc;

use super::record::{FieldValue, FormRecord};
use super::state::{FormAction, FormState};

/// Change event emitted by a field component on user edit
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange<F> {
    pub field: F,
    pub value: FieldValue,
}

pub type ChangeHandler<F> = Arc<dyn Fn(FieldChange<F>) + Send + Sync>;

/// Per-field validator; `None` means valid
pub type Validator = Arc<dyn Fn(&FieldValue) -> Option<String> + Send + Sync>;

pub type Getter<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Owner of a [`FormState`] that accepts [`FormAction`]s
pub trait FormDispatch<R: FormRecord>: Clone + Send + Sync + 'static {
    fn dispatch(&self, action: FormAction<R>);

    fn with_state<O>(&self, f: impl FnOnce(&FormState<R>) -> O) -> O;
}

/// How a field component is wired to its data
///
/// A field is either driven by props owned outside the form controller, or
/// bound to a controller (optionally validating on every change). The two are
/// never mixed.
pub enum FieldBinding<R: FormRecord, D: FormDispatch<R>> {
    External {
        value: Getter<FieldValue>,
        error: Getter<Option<String>>,
        on_change: ChangeHandler<R::Field>,
    },
    Controlled {
        dispatcher: D,
        validate: Option<Validator>,
    },
}

impl<R: FormRecord, D: FormDispatch<R>> Clone for FieldBinding<R, D> {
    fn clone(&self) -> Self {
        match self {
            FieldBinding::External {
                value,
                error,
                on_change,
            } => FieldBinding::External {
                value: Arc::clone(value),
                error: Arc::clone(error),
                on_change: Arc::clone(on_change),
            },
            FieldBinding::Controlled {
                dispatcher,
                validate,
            } => FieldBinding::Controlled {
                dispatcher: dispatcher.clone(),
                validate: validate.clone(),
            },
        }
    }
}

impl<R: FormRecord, D: FormDispatch<R>> FieldBinding<R, D> {
    pub fn external(
        value: impl Fn() -> FieldValue + Send + Sync + 'static,
        error: impl Fn() -> Option<String> + Send + Sync + 'static,
        on_change: impl Fn(FieldChange<R::Field>) + Send + Sync + 'static,
    ) -> Self {
        FieldBinding::External {
            value: Arc::new(value),
            error: Arc::new(error),
            on_change: Arc::new(on_change),
        }
    }

    pub fn controlled(dispatcher: D) -> Self {
        FieldBinding::Controlled {
            dispatcher,
            validate: None,
        }
    }

    pub fn validated(
        dispatcher: D,
        validate: impl Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        FieldBinding::Controlled {
            dispatcher,
            validate: Some(Arc::new(validate)),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, FieldBinding::Controlled { .. })
    }

    /// Resolve the handler a field component calls on user edit
    pub fn change_handler(&self) -> ChangeHandler<R::Field> {
        match self {
            FieldBinding::External { on_change, .. } => Arc::clone(on_change),
            FieldBinding::Controlled {
                dispatcher,
                validate: Some(validate),
            } => {
                let dispatcher = dispatcher.clone();
                let validate = Arc::clone(validate);
                Arc::new(move |change: FieldChange<R::Field>| {
                    let error = validate(&change.value);
                    dispatcher.dispatch(FormAction::SetField {
                        field: change.field,
                        value: change.value,
                        error,
                    });
                })
            }
            FieldBinding::Controlled {
                dispatcher,
                validate: None,
            } => {
                let dispatcher = dispatcher.clone();
                Arc::new(move |change: FieldChange<R::Field>| {
                    let form = dispatcher
                        .with_state(|state| state.form.with_value(change.field, change.value));
                    dispatcher.dispatch(FormAction::SetForm(form));
                })
            }
        }
    }

    pub fn value(&self, field: R::Field) -> FieldValue {
        match self {
            FieldBinding::External { value, .. } => value(),
            FieldBinding::Controlled { dispatcher, .. } => {
                dispatcher.with_state(|state| state.form.value(field))
            }
        }
    }

    /// Error shown under the field; controller errors win only for bound fields
    pub fn error(&self, field: R::Field) -> Option<String> {
        let error = match self {
            FieldBinding::External { error, .. } => error(),
            FieldBinding::Controlled { dispatcher, .. } => {
                dispatcher.with_state(|state| state.errors.get(&field).cloned())
            }
        };
        error.filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::shared::form::record::FormRecord;
    use crate::shared::form::test_support::{ContactField, ContactForm};

    #[derive(Clone, Default)]
    struct Recorder {
        state: Arc<Mutex<FormState<ContactForm>>>,
        actions: Arc<Mutex<Vec<FormAction<ContactForm>>>>,
    }

    impl FormDispatch<ContactForm> for Recorder {
        fn dispatch(&self, action: FormAction<ContactForm>) {
            self.actions.lock().unwrap().push(action.clone());
            self.state.lock().unwrap().apply(action);
        }

        fn with_state<O>(&self, f: impl FnOnce(&FormState<ContactForm>) -> O) -> O {
            f(&self.state.lock().unwrap())
        }
    }

    fn change(field: ContactField, value: &str) -> FieldChange<ContactField> {
        FieldChange {
            field,
            value: FieldValue::from(value),
        }
    }

    #[test]
    fn test_external_handler_is_used_verbatim() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let binding: FieldBinding<ContactForm, Recorder> = FieldBinding::external(
            || FieldValue::from("outside"),
            || Some("outside error".to_string()),
            move |c| sink.lock().unwrap().push(c),
        );

        binding.change_handler()(change(ContactField::Name, "typed"));

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(binding.value(ContactField::Name), FieldValue::from("outside"));
        assert_eq!(binding.error(ContactField::Name).as_deref(), Some("outside error"));
        assert!(!binding.is_controlled());
    }

    #[test]
    fn test_validated_handler_dispatches_set_field() {
        let recorder = Recorder::default();
        let binding = FieldBinding::validated(recorder.clone(), |v: &FieldValue| {
            v.is_blank().then(|| "required".to_string())
        });
        let handler = binding.change_handler();

        handler(change(ContactField::Name, ""));
        assert_eq!(binding.error(ContactField::Name).as_deref(), Some("required"));

        handler(change(ContactField::Name, "Ann"));
        assert_eq!(binding.error(ContactField::Name), None);
        assert_eq!(binding.value(ContactField::Name), FieldValue::from("Ann"));

        let actions = recorder.actions.lock().unwrap();
        assert!(actions
            .iter()
            .all(|a| matches!(a, FormAction::SetField { .. })));
    }

    #[test]
    fn test_unvalidated_handler_merges_into_form() {
        let recorder = Recorder::default();
        recorder.dispatch(FormAction::SetField {
            field: ContactField::Email,
            value: FieldValue::from("x"),
            error: Some("invalid".into()),
        });
        let binding = FieldBinding::controlled(recorder.clone());

        binding.change_handler()(change(ContactField::Name, "Ann"));
        binding.change_handler()(change(ContactField::Notes, "vip"));

        let form = recorder.with_state(|s| s.form.clone());
        assert_eq!(form.name, "Ann");
        assert_eq!(form.notes, "vip");
        assert_eq!(form.email, "x");
        // set_form leaves the error record alone
        assert_eq!(binding.error(ContactField::Email).as_deref(), Some("invalid"));
        assert!(matches!(
            recorder.actions.lock().unwrap().last(),
            Some(FormAction::SetForm(_))
        ));
    }

    #[test]
    fn test_controlled_error_comes_from_state() {
        let recorder = Recorder::default();
        let binding = FieldBinding::controlled(recorder.clone());
        assert_eq!(binding.error(ContactField::Name), None);

        recorder.dispatch(FormAction::SetField {
            field: ContactField::Name,
            value: FieldValue::from(""),
            error: Some("required".into()),
        });
        assert_eq!(binding.error(ContactField::Name).as_deref(), Some("required"));
        assert_eq!(
            ContactForm::default().value(ContactField::Name),
            binding.value(ContactField::Name)
        );
    }
}
