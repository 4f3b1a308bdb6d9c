use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Internal,
    External,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Internal => "INTERNAL",
            AssetType::External => "EXTERNAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Internal => "Internal",
            AssetType::External => "External",
        }
    }

    pub fn all() -> &'static [AssetType] {
        &[AssetType::Internal, AssetType::External]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Active,
    TransferInProgress,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "ACTIVE",
            AssetStatus::TransferInProgress => "TRANSFER_IN_PROGRESS",
        }
    }

    pub fn all() -> &'static [AssetStatus] {
        &[AssetStatus::Active, AssetStatus::TransferInProgress]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetLocationDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub facility: FacilityRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_working: bool,
    #[serde(default)]
    pub not_working_reason: String,
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub location_object: AssetLocationDto,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub modified_date: String,
}
