use serde::{Deserialize, Serialize};

/// Facility types offered in the create form: (id, label)
pub const FACILITY_TYPES: &[(i64, &str)] = &[
    (1, "Educational Inst"),
    (2, "Private Hospital"),
    (3, "Other"),
    (4, "Hostel"),
    (5, "Hotel"),
    (6, "Lodge"),
    (7, "TeleMedicine"),
    (8, "Govt Hospital"),
    (9, "Labs"),
    (800, "Primary Health Centres"),
    (830, "Taluk Hospitals"),
    (840, "Women and Child Health Centres"),
    (860, "District Hospitals"),
    (870, "Govt Medical College Hospitals"),
    (1010, "COVID-19 Domiciliary Care Center"),
];

/// Facility features: (id, label)
pub const FACILITY_FEATURES: &[(i64, &str)] = &[
    (1, "CT Scan Facility"),
    (2, "Maternity Care"),
    (3, "X-Ray facility"),
    (4, "Neonatal care"),
    (5, "Operation theater"),
    (6, "Blood Bank"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacilityLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of `POST /api/v1/facility/` and `PUT /api/v1/facility/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRequest {
    pub facility_type: i64,
    pub name: String,
    pub state: i64,
    pub district: i64,
    pub local_body: i64,
    pub ward: i64,
    pub address: String,
    pub pincode: String,
    pub features: Vec<i64>,
    pub kasp_empanelled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<FacilityLocation>,
    pub phone_number: String,
    pub oxygen_capacity: i64,
    pub type_b_cylinders: i64,
    pub type_c_cylinders: i64,
    pub type_d_cylinders: i64,
    pub expected_oxygen_requirement: i64,
    pub expected_type_b_cylinders: i64,
    pub expected_type_c_cylinders: i64,
    pub expected_type_d_cylinders: i64,
}

/// Facility as returned by `GET /api/v1/getallfacilities/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub facility_type: Option<i64>,
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub district: Option<i64>,
    #[serde(default)]
    pub local_body: Option<i64>,
    #[serde(default)]
    pub ward: Option<i64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub features: Vec<i64>,
    #[serde(default)]
    pub kasp_empanelled: bool,
    #[serde(default)]
    pub location: Option<FacilityLocation>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub oxygen_capacity: Option<i64>,
    #[serde(default)]
    pub type_b_cylinders: Option<i64>,
    #[serde(default)]
    pub type_c_cylinders: Option<i64>,
    #[serde(default)]
    pub type_d_cylinders: Option<i64>,
    #[serde(default)]
    pub expected_oxygen_requirement: Option<i64>,
    #[serde(default)]
    pub expected_type_b_cylinders: Option<i64>,
    #[serde(default)]
    pub expected_type_c_cylinders: Option<i64>,
    #[serde(default)]
    pub expected_type_d_cylinders: Option<i64>,
    #[serde(default)]
    pub modified_date: Option<String>,
}

/// Display label for a facility type id
pub fn facility_type_label(id: i64) -> Option<&'static str> {
    FACILITY_TYPES
        .iter()
        .find(|(type_id, _)| *type_id == id)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_omitted_when_absent() {
        let req = FacilityRequest {
            facility_type: 2,
            name: "General".into(),
            state: 1,
            district: 7,
            local_body: 3,
            ward: 12,
            address: "Main road".into(),
            pincode: "682001".into(),
            features: vec![1, 3],
            kasp_empanelled: false,
            location: None,
            phone_number: "+919876543210".into(),
            oxygen_capacity: 0,
            type_b_cylinders: 0,
            type_c_cylinders: 0,
            type_d_cylinders: 0,
            expected_oxygen_requirement: 0,
            expected_type_b_cylinders: 0,
            expected_type_c_cylinders: 0,
            expected_type_d_cylinders: 0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("location").is_none());
        assert_eq!(json["features"], serde_json::json!([1, 3]));
    }

    #[test]
    fn test_facility_type_label() {
        assert_eq!(facility_type_label(2), Some("Private Hospital"));
        assert_eq!(facility_type_label(12345), None);
    }
}
