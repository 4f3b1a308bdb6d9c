use care_contracts::domain::a002_asset::{AssetDto, AssetStatus, AssetType};
use leptos::prelude::*;

use crate::shared::filters::{BadgeSpec, FilterSet, Pagination, RequestSeq, RequestTicket};

pub const PAGE_LIMIT: u32 = 24;

#[derive(Clone, Debug, Default)]
pub struct AssetListState {
    pub items: Vec<AssetDto>,
    pub total_count: usize,
    pub is_loading: bool,
    pub show_filters: bool,
    pub facility_name: Option<String>,
    pub location_name: Option<String>,
}

pub fn create_state() -> RwSignal<AssetListState> {
    RwSignal::new(AssetListState::default())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameLookup {
    Facility,
    Location,
}

/// Badge label fetches; a label lands only from the latest lookup of its kind
#[derive(Clone, Debug, Default)]
pub struct NameLookups {
    facility: RequestSeq,
    location: RequestSeq,
}

impl NameLookups {
    fn seq(&self, kind: NameLookup) -> &RequestSeq {
        match kind {
            NameLookup::Facility => &self.facility,
            NameLookup::Location => &self.location,
        }
    }

    pub fn start(&self, kind: NameLookup) -> RequestTicket {
        self.seq(kind).next()
    }

    pub fn is_current(&self, kind: NameLookup, ticket: RequestTicket) -> bool {
        self.seq(kind).is_current(ticket)
    }

    pub fn settle(
        &self,
        state: &mut AssetListState,
        kind: NameLookup,
        ticket: RequestTicket,
        name: Option<String>,
    ) {
        if !self.is_current(kind, ticket) {
            return;
        }
        match kind {
            NameLookup::Facility => state.facility_name = name,
            NameLookup::Location => state.location_name = name,
        }
    }

    pub fn cancel_all(&self) {
        self.facility.cancel_all();
        self.location.cancel_all();
    }
}

pub fn badge_specs() -> Vec<BadgeSpec> {
    vec![
        BadgeSpec::linked("Facility", "facility", &["location"]),
        BadgeSpec::scalar("Asset Name", "search"),
        BadgeSpec::scalar("Location", "location"),
        BadgeSpec::scalar("Asset Type", "asset_type"),
        BadgeSpec::scalar("Status", "status"),
    ]
}

/// Backend parameters for the page described by `filters`
pub fn api_params(filters: &FilterSet) -> FilterSet {
    let pagination = Pagination::from_filters(filters, PAGE_LIMIT);
    let mut params = FilterSet::new()
        .with("limit", pagination.limit)
        .with("offset", pagination.offset());
    for key in ["facility", "asset_type", "location", "status"] {
        if let Some(value) = filters.text(key) {
            params.insert(key, value);
        }
    }
    if let Some(search) = filters.text("search") {
        params.insert("search_text", search);
    }
    params
}

/// Badge text for a raw filter value
pub fn display_value(state: &AssetListState, key: &str, raw: &str) -> Option<String> {
    match key {
        "facility" => state.facility_name.clone(),
        "location" => state.location_name.clone(),
        "asset_type" => AssetType::all()
            .iter()
            .find(|t| t.as_str() == raw)
            .map(|t| t.label().to_string()),
        "status" => AssetStatus::all()
            .iter()
            .find(|s| s.as_str() == raw)
            .map(|s| s.as_str().replace('_', " ")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::reconcile_badges;

    #[test]
    fn test_api_params_map_search_and_offset() {
        let filters = FilterSet::new()
            .with("search", "ventilator")
            .with("status", "ACTIVE")
            .with("page", "3")
            .with("asset_type", "--");
        let params = api_params(&filters);

        assert_eq!(params.text("search_text").as_deref(), Some("ventilator"));
        assert!(!params.is_active("search"));
        assert!(!params.is_active("asset_type"));
        assert_eq!(params.integer("offset"), Some(48));
        assert_eq!(params.integer("limit"), Some(24));
    }

    #[test]
    fn test_first_page_drops_zero_offset() {
        let params = api_params(&FilterSet::new());
        assert!(!params.is_active("offset"));
        assert_eq!(params.integer("limit"), Some(24));
    }

    #[test]
    fn test_badges_use_resolved_names() {
        let state = AssetListState {
            facility_name: Some("CHC Aluva".into()),
            ..AssetListState::default()
        };
        let filters = FilterSet::new()
            .with("facility", "f-1")
            .with("asset_type", "INTERNAL")
            .with("status", "TRANSFER_IN_PROGRESS");
        let badges = reconcile_badges(&filters, &badge_specs(), |k, v| display_value(&state, k, v));
        let texts: Vec<&str> = badges.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["CHC Aluva", "Internal", "TRANSFER IN PROGRESS"]);
    }

    #[test]
    fn test_stale_name_lookup_is_dropped() {
        let lookups = NameLookups::default();
        let mut state = AssetListState::default();

        let first = lookups.start(NameLookup::Facility);
        let second = lookups.start(NameLookup::Facility);
        lookups.settle(&mut state, NameLookup::Facility, second, Some("CHC Aluva".into()));
        lookups.settle(&mut state, NameLookup::Facility, first, Some("PHC Kochi".into()));
        assert_eq!(state.facility_name.as_deref(), Some("CHC Aluva"));

        let pending = lookups.start(NameLookup::Location);
        let cleared = lookups.start(NameLookup::Location);
        lookups.settle(&mut state, NameLookup::Location, cleared, None);
        lookups.settle(&mut state, NameLookup::Location, pending, Some("ICU".into()));
        assert_eq!(state.location_name, None);

        let late = lookups.start(NameLookup::Facility);
        lookups.cancel_all();
        lookups.settle(&mut state, NameLookup::Facility, late, Some("Gone".into()));
        assert_eq!(state.facility_name.as_deref(), Some("CHC Aluva"));
    }
}
