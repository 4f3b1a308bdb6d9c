pub mod api_utils;
pub mod components;
pub mod export;
pub mod filters;
pub mod form;
pub mod waveform;
