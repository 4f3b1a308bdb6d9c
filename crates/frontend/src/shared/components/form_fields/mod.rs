//! Form inputs wired to a [`FieldBinding`](crate::shared::form::FieldBinding)
//!
//! Every field renders label, control and error text in the same order and
//! reports edits as [`FieldChange`](crate::shared::form::FieldChange) events.

pub mod checkbox;
pub mod checklist;
pub mod label;
pub mod select;
pub mod text;
pub mod textarea;

pub use checkbox::CheckboxFormField;
pub use checklist::ChecklistFormField;
pub use label::{FieldErrorText, FieldLabel, FormField};
pub use select::{SelectFormField, SelectOption};
pub use text::TextFormField;
pub use textarea::TextAreaFormField;
