pub mod dto;

pub use dto::{AssetDto, AssetLocationDto, AssetStatus, AssetType};
