//! Filter state mirrored into the URL query string and local storage
//!
//! Pages own a [`FilterController`]; filter panels call
//! [`FilterController::apply_filter`], badge chips call
//! [`FilterController::remove_badge`], and the page fetches whenever the
//! controller's filter signal changes.

pub mod badges;
pub mod controller;
pub mod error;
pub mod navigator;
pub mod pagination;
pub mod query;
pub mod request;
pub mod storage;
pub mod sync;
pub mod value;

pub use badges::{reconcile_badges, Badge, BadgeRemoval, BadgeSpec, Cascade};
pub use controller::FilterController;
pub use error::FilterError;
pub use navigator::{BrowserHistory, MemoryHistory, QueryNavigator};
pub use pagination::Pagination;
pub use query::{comma_list, decode_query, decode_typed, encode_query};
pub use request::{RequestSeq, RequestTicket};
pub use storage::{FilterSnapshot, KeyValueStorage, LocalStorage, MemoryStorage, PersistedFilters};
pub use sync::FilterSync;
pub use value::{FilterSet, FilterValue, PLACEHOLDER};
