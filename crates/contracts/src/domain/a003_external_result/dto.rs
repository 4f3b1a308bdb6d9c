use serde::{Deserialize, Serialize};

/// Laboratory result imported from an external system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalResultDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub srf_id: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub result_date: Option<String>,
    #[serde(default)]
    pub sample_collection_date: Option<String>,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub local_body: Option<i64>,
    #[serde(default)]
    pub ward: Option<i64>,
}
