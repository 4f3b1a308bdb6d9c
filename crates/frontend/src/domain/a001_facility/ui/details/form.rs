use care_contracts::domain::a001_facility::{FacilityDto, FacilityLocation, FacilityRequest};

use crate::shared::form::validation::{
    latitude, longitude, normalize_phone, phone_number, pincode, required, required_selection,
};
use crate::shared::form::{FieldValue, FormField, FormRecord, FormValidation};

/// Type preselected for new facilities ("Private Hospital")
pub const DEFAULT_FACILITY_TYPE: i64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityForm {
    pub facility_type: Option<i64>,
    pub name: String,
    pub state: Option<i64>,
    pub district: Option<i64>,
    pub local_body: Option<i64>,
    pub ward: Option<i64>,
    pub features: Vec<i64>,
    pub kasp_empanelled: bool,
    pub address: String,
    pub phone_number: String,
    pub latitude: String,
    pub longitude: String,
    pub pincode: String,
    pub oxygen_capacity: String,
    pub type_b_cylinders: String,
    pub type_c_cylinders: String,
    pub type_d_cylinders: String,
    pub expected_oxygen_requirement: String,
    pub expected_type_b_cylinders: String,
    pub expected_type_c_cylinders: String,
    pub expected_type_d_cylinders: String,
}

impl Default for FacilityForm {
    fn default() -> Self {
        Self {
            facility_type: Some(DEFAULT_FACILITY_TYPE),
            name: String::new(),
            state: None,
            district: None,
            local_body: None,
            ward: None,
            features: Vec::new(),
            kasp_empanelled: false,
            address: String::new(),
            phone_number: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            pincode: String::new(),
            oxygen_capacity: String::new(),
            type_b_cylinders: String::new(),
            type_c_cylinders: String::new(),
            type_d_cylinders: String::new(),
            expected_oxygen_requirement: String::new(),
            expected_type_b_cylinders: String::new(),
            expected_type_c_cylinders: String::new(),
            expected_type_d_cylinders: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacilityField {
    FacilityType,
    Name,
    State,
    District,
    LocalBody,
    Features,
    Ward,
    KaspEmpanelled,
    Address,
    PhoneNumber,
    Latitude,
    Longitude,
    Pincode,
    OxygenCapacity,
    TypeBCylinders,
    TypeCCylinders,
    TypeDCylinders,
    ExpectedOxygenRequirement,
    ExpectedTypeBCylinders,
    ExpectedTypeCCylinders,
    ExpectedTypeDCylinders,
}

use FacilityField as F;

impl FormField for FacilityField {
    fn name(self) -> &'static str {
        match self {
            F::FacilityType => "facility_type",
            F::Name => "name",
            F::State => "state",
            F::District => "district",
            F::LocalBody => "local_body",
            F::Features => "features",
            F::Ward => "ward",
            F::KaspEmpanelled => "kasp_empanelled",
            F::Address => "address",
            F::PhoneNumber => "phone_number",
            F::Latitude => "latitude",
            F::Longitude => "longitude",
            F::Pincode => "pincode",
            F::OxygenCapacity => "oxygen_capacity",
            F::TypeBCylinders => "type_b_cylinders",
            F::TypeCCylinders => "type_c_cylinders",
            F::TypeDCylinders => "type_d_cylinders",
            F::ExpectedOxygenRequirement => "expected_oxygen_requirement",
            F::ExpectedTypeBCylinders => "expected_type_b_cylinders",
            F::ExpectedTypeCCylinders => "expected_type_c_cylinders",
            F::ExpectedTypeDCylinders => "expected_type_d_cylinders",
        }
    }

    fn all() -> &'static [Self] {
        &[
            F::FacilityType,
            F::Name,
            F::State,
            F::District,
            F::LocalBody,
            F::Features,
            F::Ward,
            F::KaspEmpanelled,
            F::Address,
            F::PhoneNumber,
            F::Latitude,
            F::Longitude,
            F::Pincode,
            F::OxygenCapacity,
            F::TypeBCylinders,
            F::TypeCCylinders,
            F::TypeDCylinders,
            F::ExpectedOxygenRequirement,
            F::ExpectedTypeBCylinders,
            F::ExpectedTypeCCylinders,
            F::ExpectedTypeDCylinders,
        ]
    }
}

impl FacilityForm {
    fn text_mut(&mut self, field: FacilityField) -> Option<&mut String> {
        Some(match field {
            F::Name => &mut self.name,
            F::Address => &mut self.address,
            F::PhoneNumber => &mut self.phone_number,
            F::Latitude => &mut self.latitude,
            F::Longitude => &mut self.longitude,
            F::Pincode => &mut self.pincode,
            F::OxygenCapacity => &mut self.oxygen_capacity,
            F::TypeBCylinders => &mut self.type_b_cylinders,
            F::TypeCCylinders => &mut self.type_c_cylinders,
            F::TypeDCylinders => &mut self.type_d_cylinders,
            F::ExpectedOxygenRequirement => &mut self.expected_oxygen_requirement,
            F::ExpectedTypeBCylinders => &mut self.expected_type_b_cylinders,
            F::ExpectedTypeCCylinders => &mut self.expected_type_c_cylinders,
            F::ExpectedTypeDCylinders => &mut self.expected_type_d_cylinders,
            _ => return None,
        })
    }

    fn id_mut(&mut self, field: FacilityField) -> Option<&mut Option<i64>> {
        Some(match field {
            F::FacilityType => &mut self.facility_type,
            F::State => &mut self.state,
            F::District => &mut self.district,
            F::LocalBody => &mut self.local_body,
            F::Ward => &mut self.ward,
            _ => return None,
        })
    }

    /// Edit-flow starting point from a fetched facility
    pub fn from_dto(dto: &FacilityDto) -> Self {
        let count = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();
        let phone_number = if dto.phone_number.len() == 10 {
            format!("+91{}", dto.phone_number)
        } else {
            dto.phone_number.clone()
        };
        Self {
            facility_type: dto.facility_type,
            name: dto.name.clone(),
            state: dto.state,
            district: dto.district,
            local_body: dto.local_body,
            ward: dto.ward,
            features: dto.features.clone(),
            kasp_empanelled: dto.kasp_empanelled,
            address: dto.address.clone(),
            phone_number,
            latitude: dto.location.map(|l| l.latitude.to_string()).unwrap_or_default(),
            longitude: dto.location.map(|l| l.longitude.to_string()).unwrap_or_default(),
            pincode: dto.pincode.clone().unwrap_or_default(),
            oxygen_capacity: count(dto.oxygen_capacity),
            type_b_cylinders: count(dto.type_b_cylinders),
            type_c_cylinders: count(dto.type_c_cylinders),
            type_d_cylinders: count(dto.type_d_cylinders),
            expected_oxygen_requirement: count(dto.expected_oxygen_requirement),
            expected_type_b_cylinders: count(dto.expected_type_b_cylinders),
            expected_type_c_cylinders: count(dto.expected_type_c_cylinders),
            expected_type_d_cylinders: count(dto.expected_type_d_cylinders),
        }
    }

    /// Request body; assumes [`facility_rules`] passed
    pub fn to_request(&self) -> FacilityRequest {
        let number = |raw: &str| raw.trim().parse::<i64>().unwrap_or(0);
        let coordinate = |raw: &str| raw.trim().parse::<f64>().ok();
        let location = match (coordinate(&self.latitude), coordinate(&self.longitude)) {
            (Some(latitude), Some(longitude)) => Some(FacilityLocation {
                latitude,
                longitude,
            }),
            _ => None,
        };
        FacilityRequest {
            facility_type: self.facility_type.unwrap_or(DEFAULT_FACILITY_TYPE),
            name: self.name.trim().to_string(),
            state: self.state.unwrap_or(0),
            district: self.district.unwrap_or(0),
            local_body: self.local_body.unwrap_or(0),
            ward: self.ward.unwrap_or(0),
            address: self.address.clone(),
            pincode: self.pincode.trim().to_string(),
            features: self.features.clone(),
            kasp_empanelled: self.kasp_empanelled,
            location,
            phone_number: normalize_phone(&self.phone_number)
                .unwrap_or_else(|| self.phone_number.clone()),
            oxygen_capacity: number(&self.oxygen_capacity),
            type_b_cylinders: number(&self.type_b_cylinders),
            type_c_cylinders: number(&self.type_c_cylinders),
            type_d_cylinders: number(&self.type_d_cylinders),
            expected_oxygen_requirement: number(&self.expected_oxygen_requirement),
            expected_type_b_cylinders: number(&self.expected_type_b_cylinders),
            expected_type_c_cylinders: number(&self.expected_type_c_cylinders),
            expected_type_d_cylinders: number(&self.expected_type_d_cylinders),
        }
    }
}

impl FormRecord for FacilityForm {
    type Field = FacilityField;

    fn value(&self, field: FacilityField) -> FieldValue {
        match field {
            F::FacilityType => FieldValue::Integer(self.facility_type),
            F::State => FieldValue::Integer(self.state),
            F::District => FieldValue::Integer(self.district),
            F::LocalBody => FieldValue::Integer(self.local_body),
            F::Ward => FieldValue::Integer(self.ward),
            F::Features => FieldValue::List(self.features.iter().map(i64::to_string).collect()),
            F::KaspEmpanelled => FieldValue::Flag(self.kasp_empanelled),
            F::Name => FieldValue::Text(self.name.clone()),
            F::Address => FieldValue::Text(self.address.clone()),
            F::PhoneNumber => FieldValue::Text(self.phone_number.clone()),
            F::Latitude => FieldValue::Text(self.latitude.clone()),
            F::Longitude => FieldValue::Text(self.longitude.clone()),
            F::Pincode => FieldValue::Text(self.pincode.clone()),
            F::OxygenCapacity => FieldValue::Text(self.oxygen_capacity.clone()),
            F::TypeBCylinders => FieldValue::Text(self.type_b_cylinders.clone()),
            F::TypeCCylinders => FieldValue::Text(self.type_c_cylinders.clone()),
            F::TypeDCylinders => FieldValue::Text(self.type_d_cylinders.clone()),
            F::ExpectedOxygenRequirement => {
                FieldValue::Text(self.expected_oxygen_requirement.clone())
            }
            F::ExpectedTypeBCylinders => FieldValue::Text(self.expected_type_b_cylinders.clone()),
            F::ExpectedTypeCCylinders => FieldValue::Text(self.expected_type_c_cylinders.clone()),
            F::ExpectedTypeDCylinders => FieldValue::Text(self.expected_type_d_cylinders.clone()),
        }
    }

    fn set_value(&mut self, field: FacilityField, value: FieldValue) {
        match field {
            F::Features => {
                self.features = value
                    .into_list()
                    .iter()
                    .filter_map(|id| id.parse().ok())
                    .collect();
            }
            F::KaspEmpanelled => self.kasp_empanelled = value.into_flag(),
            other => {
                if let Some(slot) = self.id_mut(other) {
                    *slot = value.into_integer();
                } else if let Some(slot) = self.text_mut(other) {
                    *slot = value.into_text();
                }
            }
        }
    }
}

/// Submit-time rules, in the order fields appear on the page
pub fn facility_rules() -> FormValidation<FacilityForm> {
    FormValidation::new()
        .rule(F::Name, required())
        .rule(F::State, required_selection())
        .rule(F::District, required_selection())
        .rule(F::LocalBody, required_selection())
        .rule(F::Ward, required_selection())
        .rule(F::Address, required())
        .rule(F::PhoneNumber, phone_number())
        .rule(F::Latitude, latitude())
        .rule(F::Longitude, longitude())
        .rule(F::Pincode, pincode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::REQUIRED;

    fn valid_form() -> FacilityForm {
        FacilityForm {
            name: "CHC Aluva".into(),
            state: Some(1),
            district: Some(7),
            local_body: Some(30),
            ward: Some(401),
            address: "Market road".into(),
            phone_number: "98765 43210".into(),
            pincode: "683101".into(),
            ..FacilityForm::default()
        }
    }

    #[test]
    fn test_empty_form_reports_name_first() {
        let report = facility_rules().check(&FacilityForm::default());
        assert_eq!(report.first_invalid, Some(FacilityField::Name));
        assert_eq!(report.errors.get(&FacilityField::Ward).map(String::as_str), Some(REQUIRED));
        assert_eq!(
            report.errors.get(&FacilityField::Pincode).map(String::as_str),
            Some("Please enter valid pincode")
        );
        assert!(!report.errors.contains_key(&FacilityField::Latitude));
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(facility_rules().check(&valid_form()).is_valid());
    }

    #[test]
    fn test_bad_latitude_is_reported() {
        let form = FacilityForm {
            latitude: "123".into(),
            ..valid_form()
        };
        let report = facility_rules().check(&form);
        assert_eq!(report.first_invalid, Some(FacilityField::Latitude));
    }

    #[test]
    fn test_select_placeholder_reads_as_unset() {
        let form = valid_form().with_value(FacilityField::State, FieldValue::from("--"));
        assert_eq!(form.state, None);
        let form = form.with_value(FacilityField::State, FieldValue::from("4"));
        assert_eq!(form.state, Some(4));
    }

    #[test]
    fn test_request_defaults_and_phone() {
        let request = valid_form().to_request();
        assert_eq!(request.phone_number, "+919876543210");
        assert_eq!(request.oxygen_capacity, 0);
        assert_eq!(request.facility_type, DEFAULT_FACILITY_TYPE);
        assert!(request.location.is_none());
    }

    #[test]
    fn test_location_needs_both_coordinates() {
        let half = FacilityForm {
            latitude: "10.1".into(),
            ..valid_form()
        };
        assert!(half.to_request().location.is_none());

        let full = FacilityForm {
            longitude: "76.3".into(),
            oxygen_capacity: "40".into(),
            ..half
        };
        let request = full.to_request();
        assert_eq!(
            request.location,
            Some(FacilityLocation {
                latitude: 10.1,
                longitude: 76.3
            })
        );
        assert_eq!(request.oxygen_capacity, 40);
    }

    #[test]
    fn test_from_dto_prefixes_ten_digit_phone() {
        let dto = FacilityDto {
            id: "f1".into(),
            name: "CHC".into(),
            phone_number: "9876543210".into(),
            oxygen_capacity: Some(12),
            ..FacilityDto::default()
        };
        let form = FacilityForm::from_dto(&dto);
        assert_eq!(form.phone_number, "+919876543210");
        assert_eq!(form.oxygen_capacity, "12");
        assert_eq!(form.latitude, "");
    }

    #[test]
    fn test_features_round_trip_through_list() {
        let form = valid_form().with_value(
            FacilityField::Features,
            FieldValue::List(vec!["1".into(), "x".into(), "3".into()]),
        );
        assert_eq!(form.features, vec![1, 3]);
    }
}
