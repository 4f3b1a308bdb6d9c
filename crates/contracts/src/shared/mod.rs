pub mod list_response;
pub mod telemetry;
