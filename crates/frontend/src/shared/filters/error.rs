use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("cannot decode query string: {0}")]
    Query(#[from] serde_qs::Error),
    #[error("cannot encode or decode filter snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(String),
}
