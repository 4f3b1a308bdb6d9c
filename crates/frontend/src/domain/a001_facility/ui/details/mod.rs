//! Facility create/edit page
//!
//! - form.rs: the form record, its rules and the request mapping
//! - model.rs: API functions
//! - view_model.rs: loading, cascading lookups and submit
//! - view.rs: Leptos component

mod form;
mod model;
mod view;
mod view_model;

pub use form::{facility_rules, FacilityField, FacilityForm};
pub use view::FacilityDetails;
pub use view_model::FacilityDetailsViewModel;
