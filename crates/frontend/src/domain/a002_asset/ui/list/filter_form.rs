use crate::shared::filters::FilterSet;
use crate::shared::form::{FieldValue, FormField, FormRecord};

/// Draft of the advanced filter panel, applied as a whole
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilterForm {
    pub facility: String,
    pub location: String,
    pub asset_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetFilterField {
    Facility,
    Location,
    AssetType,
}

impl FormField for AssetFilterField {
    fn name(self) -> &'static str {
        match self {
            AssetFilterField::Facility => "facility",
            AssetFilterField::Location => "location",
            AssetFilterField::AssetType => "asset_type",
        }
    }

    fn all() -> &'static [Self] {
        &[
            AssetFilterField::Facility,
            AssetFilterField::Location,
            AssetFilterField::AssetType,
        ]
    }
}

impl FormRecord for AssetFilterForm {
    type Field = AssetFilterField;

    fn value(&self, field: AssetFilterField) -> FieldValue {
        FieldValue::Text(match field {
            AssetFilterField::Facility => self.facility.clone(),
            AssetFilterField::Location => self.location.clone(),
            AssetFilterField::AssetType => self.asset_type.clone(),
        })
    }

    fn set_value(&mut self, field: AssetFilterField, value: FieldValue) {
        let text = value.into_text();
        match field {
            AssetFilterField::Facility => self.facility = text,
            AssetFilterField::Location => self.location = text,
            AssetFilterField::AssetType => self.asset_type = text,
        }
    }
}

impl AssetFilterForm {
    pub fn from_filters(filters: &FilterSet) -> Self {
        let text = |key: &str| filters.text(key).unwrap_or_default();
        Self {
            facility: text("facility"),
            location: text("location"),
            asset_type: text("asset_type"),
        }
    }

    /// Overlay for `apply_filter`; emptied fields clear their key
    pub fn to_filters(&self) -> FilterSet {
        AssetFilterField::all()
            .iter()
            .map(|field| (field.name(), self.value(*field).into_text()))
            .collect()
    }
}

/// Single-field record for the status select, which writes straight to the
/// URL filters instead of the draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFilter {
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusField {
    Status,
}

impl FormField for StatusField {
    fn name(self) -> &'static str {
        "status"
    }

    fn all() -> &'static [Self] {
        &[StatusField::Status]
    }
}

impl FormRecord for StatusFilter {
    type Field = StatusField;

    fn value(&self, _field: StatusField) -> FieldValue {
        FieldValue::Text(self.status.clone())
    }

    fn set_value(&mut self, _field: StatusField, value: FieldValue) {
        self.status = value.into_text();
    }
}
