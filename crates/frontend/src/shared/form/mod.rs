//! Reducer-based form model shared by every create/edit page
//!
//! A page declares a record type implementing [`FormRecord`] with a field
//! enum, creates a [`FormController`] for it and hands a [`FieldBinding`] to
//! each field component.

pub mod binding;
pub mod controller;
pub mod record;
pub mod state;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use binding::{ChangeHandler, FieldBinding, FieldChange, FormDispatch, Getter, Validator};
pub use controller::FormController;
pub use record::{FieldValue, FormField, FormRecord};
pub use state::{Errors, FormAction, FormState};
pub use validation::{FormValidation, ValidationReport, REQUIRED};
