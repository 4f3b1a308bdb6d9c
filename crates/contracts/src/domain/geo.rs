use serde::{Deserialize, Serialize};

/// Local self-government body (panchayat / municipality / corporation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBodyRef {
    pub id: i64,
    pub name: String,
}

/// Ward of a local body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardRef {
    pub id: i64,
    pub name: String,
    pub number: i64,
    pub local_body_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictRef {
    pub id: i64,
    pub name: String,
}
