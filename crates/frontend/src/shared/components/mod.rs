pub mod filter_badges;
pub mod form;
pub mod form_fields;
pub mod pagination_controls;
pub mod search_input;

pub use filter_badges::{FilterBadges, FilterTag};
pub use form::Form;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
