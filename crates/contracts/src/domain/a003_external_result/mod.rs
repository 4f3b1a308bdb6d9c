pub mod dto;

pub use dto::ExternalResultDto;
