use care_contracts::domain::a003_external_result::ExternalResultDto;
use care_contracts::domain::geo::{LocalBodyRef, WardRef};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::filters::storage::{load_json, save_json};
use crate::shared::filters::{BadgeSpec, FilterSet, KeyValueStorage, Pagination};
use crate::shared::form::validation::normalize_phone;

/// Last-applied filters of the page
pub const STORAGE_KEY: &str = "external-filters";
/// Names of the local bodies and wards behind the id filters
pub const LOOKUP_STORAGE_KEY: &str = "lsg-ward-data";
pub const RESULT_LIMIT: u32 = 14;
/// Paging never outlives a visit
pub const EPHEMERAL_KEYS: &[&str] = &["page", "limit"];

/// `(label, key)` of the plain text filters, in badge order
pub const TEXT_FILTERS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Phone Number", "mobile_number"),
    ("Created before", "created_date_before"),
    ("Created after", "created_date_after"),
    ("Result before", "result_date_before"),
    ("Result after", "result_date_after"),
    ("Sample created before", "sample_collection_date_before"),
    ("Sample created after", "sample_collection_date_after"),
    ("SRF ID", "srf_id"),
];

/// Local bodies and wards chosen in the filter panel
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LsgWardLookup {
    #[serde(rename = "lsgList", default)]
    pub lsg_list: Vec<LocalBodyRef>,
    #[serde(rename = "wardList", default)]
    pub ward_list: Vec<WardRef>,
}

impl LsgWardLookup {
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        load_json(storage, LOOKUP_STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self, storage: &dyn KeyValueStorage) {
        if let Err(e) = save_json(storage, LOOKUP_STORAGE_KEY, self) {
            log::warn!("cannot persist local body names: {}", e);
        }
    }

    pub fn local_body_name(&self, id: &str) -> Option<String> {
        self.lsg_list
            .iter()
            .find(|lsg| lsg.id.to_string() == id)
            .map(|lsg| lsg.name.clone())
    }

    pub fn ward_name(&self, id: &str) -> Option<String> {
        self.ward_list
            .iter()
            .find(|ward| ward.id.to_string() == id)
            .map(|ward| format!("{}: {}", ward.number, ward.name))
    }

    /// Ward ids belonging to local body `lsg`
    pub fn wards_of(&self, lsg: &str) -> Vec<String> {
        self.ward_list
            .iter()
            .filter(|ward| ward.local_body_id.to_string() == lsg)
            .map(|ward| ward.id.to_string())
            .collect()
    }

    /// Copy holding only entries still selected in `filters`
    pub fn retained(&self, filters: &FilterSet) -> Self {
        let lsgs = filters.list("local_bodies");
        let wards = filters.list("wards");
        Self {
            lsg_list: self
                .lsg_list
                .iter()
                .filter(|lsg| lsgs.contains(&lsg.id.to_string()))
                .cloned()
                .collect(),
            ward_list: self
                .ward_list
                .iter()
                .filter(|ward| wards.contains(&ward.id.to_string()))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExternalResultListState {
    pub items: Vec<ExternalResultDto>,
    pub total_count: usize,
    pub is_loading: bool,
    pub is_exporting: bool,
    pub show_filters: bool,
    pub lookup: LsgWardLookup,
}

pub fn create_state(lookup: LsgWardLookup) -> RwSignal<ExternalResultListState> {
    RwSignal::new(ExternalResultListState {
        lookup,
        ..Default::default()
    })
}

/// Badge order: local bodies, wards, then the text filters
pub fn badge_specs(lookup: &LsgWardLookup) -> Vec<BadgeSpec> {
    let cascade = lookup.clone();
    let mut specs = vec![
        BadgeSpec::list_with_cascade("LSG", "local_bodies", "wards", move |lsg| {
            cascade.wards_of(lsg)
        }),
        BadgeSpec::list("Ward", "wards"),
    ];
    specs.extend(
        TEXT_FILTERS
            .iter()
            .map(|(label, key)| BadgeSpec::scalar(*label, *key)),
    );
    specs
}

pub fn display_value(lookup: &LsgWardLookup, key: &str, raw: &str) -> Option<String> {
    match key {
        "local_bodies" => lookup.local_body_name(raw),
        "wards" => lookup.ward_name(raw),
        _ => None,
    }
}

/// Filter parameters shared by the list and the CSV export
pub fn export_params(filters: &FilterSet) -> FilterSet {
    let mut params = FilterSet::new();
    for (_, key) in TEXT_FILTERS {
        if *key == "mobile_number" {
            continue;
        }
        if let Some(value) = filters.text(key) {
            params.insert(*key, value);
        }
    }
    if let Some(phone) = filters.text("mobile_number").and_then(|p| normalize_phone(&p)) {
        params.insert("mobile_number", phone);
    }
    for key in ["local_bodies", "wards"] {
        let ids = filters.list(key);
        if !ids.is_empty() {
            params.insert(key, ids);
        }
    }
    params
}

/// Backend parameters for the page described by `filters`
pub fn api_params(filters: &FilterSet) -> FilterSet {
    let pagination = Pagination::from_filters(filters, RESULT_LIMIT);
    export_params(filters)
        .with("limit", pagination.limit)
        .with("offset", pagination.offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::{reconcile_badges, MemoryStorage};

    fn lookup() -> LsgWardLookup {
        LsgWardLookup {
            lsg_list: vec![
                LocalBodyRef { id: 7, name: "Aluva".into() },
                LocalBodyRef { id: 9, name: "Kochi".into() },
            ],
            ward_list: vec![
                WardRef { id: 70, name: "Market".into(), number: 1, local_body_id: 7 },
                WardRef { id: 71, name: "Station".into(), number: 2, local_body_id: 7 },
                WardRef { id: 90, name: "Fort".into(), number: 1, local_body_id: 9 },
            ],
        }
    }

    #[test]
    fn test_removing_lsg_badge_drops_its_wards() {
        let lookup = lookup();
        let filters = FilterSet::new()
            .with("local_bodies", "7,9")
            .with("wards", "70,71,90")
            .with("name", "Anil");
        let badges = reconcile_badges(&filters, &badge_specs(&lookup), |k, v| {
            display_value(&lookup, k, v)
        });

        let labels: Vec<_> = badges.iter().map(|b| format!("{}: {}", b.label, b.text)).collect();
        assert_eq!(
            labels,
            vec![
                "LSG: Aluva",
                "LSG: Kochi",
                "Ward: 1: Market",
                "Ward: 2: Station",
                "Ward: 1: Fort",
                "Name: Anil",
            ]
        );

        let next = badges[0].apply_to(&filters);
        assert_eq!(next.list("local_bodies"), vec!["9"]);
        assert_eq!(next.list("wards"), vec!["90"]);
        assert_eq!(next.text("name").as_deref(), Some("Anil"));
    }

    #[test]
    fn test_api_params_normalise_phone_and_page() {
        let filters = FilterSet::new()
            .with("mobile_number", "98470 12345")
            .with("page", "3")
            .with("srf_id", "--");
        let params = api_params(&filters);

        assert_eq!(params.text("mobile_number").as_deref(), Some("+919847012345"));
        assert_eq!(params.integer("offset"), Some(28));
        assert_eq!(params.integer("limit"), Some(14));
        assert!(!params.is_active("srf_id"));
    }

    #[test]
    fn test_incomplete_phone_is_not_sent() {
        let params = export_params(&FilterSet::new().with("mobile_number", "+91"));
        assert!(!params.is_active("mobile_number"));
        assert!(!params.is_active("offset"));
    }

    #[test]
    fn test_lookup_round_trips_through_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(LsgWardLookup::load(&storage), LsgWardLookup::default());

        let filters = FilterSet::new().with("local_bodies", "9").with("wards", "90");
        let kept = lookup().retained(&filters);
        kept.save(&storage);

        let loaded = LsgWardLookup::load(&storage);
        assert_eq!(loaded.lsg_list.len(), 1);
        assert_eq!(loaded.ward_name("90").as_deref(), Some("1: Fort"));
        assert_eq!(loaded.local_body_name("7"), None);
    }
}
