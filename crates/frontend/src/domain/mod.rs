pub mod a001_facility;
pub mod a002_asset;
pub mod a003_external_result;
