pub mod dto;

pub use dto::{FacilityDto, FacilityLocation, FacilityRequest, FACILITY_FEATURES, FACILITY_TYPES};
