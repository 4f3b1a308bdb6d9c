use chrono::NaiveDate;

use crate::shared::filters::{FilterSet, FilterValue};
use crate::shared::form::validation::iso_date;
use crate::shared::form::{FieldValue, FormField, FormRecord, FormValidation};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFilterForm {
    pub local_bodies: Vec<String>,
    pub wards: Vec<String>,
    pub created_date_before: String,
    pub created_date_after: String,
    pub result_date_before: String,
    pub result_date_after: String,
    pub sample_collection_date_before: String,
    pub sample_collection_date_after: String,
    pub srf_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultFilterField {
    LocalBodies,
    Wards,
    CreatedDateBefore,
    CreatedDateAfter,
    ResultDateBefore,
    ResultDateAfter,
    SampleCollectionDateBefore,
    SampleCollectionDateAfter,
    SrfId,
}

/// `(after, before)` pairs forming a date range
const DATE_RANGES: &[(ResultFilterField, ResultFilterField)] = &[
    (ResultFilterField::CreatedDateAfter, ResultFilterField::CreatedDateBefore),
    (ResultFilterField::ResultDateAfter, ResultFilterField::ResultDateBefore),
    (
        ResultFilterField::SampleCollectionDateAfter,
        ResultFilterField::SampleCollectionDateBefore,
    ),
];

impl FormField for ResultFilterField {
    fn name(self) -> &'static str {
        match self {
            ResultFilterField::LocalBodies => "local_bodies",
            ResultFilterField::Wards => "wards",
            ResultFilterField::CreatedDateBefore => "created_date_before",
            ResultFilterField::CreatedDateAfter => "created_date_after",
            ResultFilterField::ResultDateBefore => "result_date_before",
            ResultFilterField::ResultDateAfter => "result_date_after",
            ResultFilterField::SampleCollectionDateBefore => "sample_collection_date_before",
            ResultFilterField::SampleCollectionDateAfter => "sample_collection_date_after",
            ResultFilterField::SrfId => "srf_id",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ResultFilterField::LocalBodies,
            ResultFilterField::Wards,
            ResultFilterField::CreatedDateBefore,
            ResultFilterField::CreatedDateAfter,
            ResultFilterField::ResultDateBefore,
            ResultFilterField::ResultDateAfter,
            ResultFilterField::SampleCollectionDateBefore,
            ResultFilterField::SampleCollectionDateAfter,
            ResultFilterField::SrfId,
        ]
    }
}

impl ResultFilterForm {
    fn text(&self, field: ResultFilterField) -> Option<&str> {
        let text = match field {
            ResultFilterField::LocalBodies | ResultFilterField::Wards => return None,
            ResultFilterField::CreatedDateBefore => &self.created_date_before,
            ResultFilterField::CreatedDateAfter => &self.created_date_after,
            ResultFilterField::ResultDateBefore => &self.result_date_before,
            ResultFilterField::ResultDateAfter => &self.result_date_after,
            ResultFilterField::SampleCollectionDateBefore => &self.sample_collection_date_before,
            ResultFilterField::SampleCollectionDateAfter => &self.sample_collection_date_after,
            ResultFilterField::SrfId => &self.srf_id,
        };
        Some(text)
    }

    fn text_mut(&mut self, field: ResultFilterField) -> Option<&mut String> {
        match field {
            ResultFilterField::LocalBodies | ResultFilterField::Wards => None,
            ResultFilterField::CreatedDateBefore => Some(&mut self.created_date_before),
            ResultFilterField::CreatedDateAfter => Some(&mut self.created_date_after),
            ResultFilterField::ResultDateBefore => Some(&mut self.result_date_before),
            ResultFilterField::ResultDateAfter => Some(&mut self.result_date_after),
            ResultFilterField::SampleCollectionDateBefore => {
                Some(&mut self.sample_collection_date_before)
            }
            ResultFilterField::SampleCollectionDateAfter => {
                Some(&mut self.sample_collection_date_after)
            }
            ResultFilterField::SrfId => Some(&mut self.srf_id),
        }
    }

    pub fn from_filters(filters: &FilterSet) -> Self {
        let mut form = Self {
            local_bodies: filters.list("local_bodies"),
            wards: filters.list("wards"),
            ..Default::default()
        };
        for field in ResultFilterField::all() {
            if let Some(slot) = form.text_mut(*field) {
                *slot = filters.text(field.name()).unwrap_or_default();
            }
        }
        form
    }

    /// Overlay for `apply_filter`; emptied fields clear their key
    pub fn to_filters(&self) -> FilterSet {
        ResultFilterField::all()
            .iter()
            .map(|field| {
                let value = match self.value(*field) {
                    FieldValue::List(ids) => FilterValue::List(ids),
                    other => FilterValue::Text(other.into_text()),
                };
                (field.name(), value)
            })
            .collect()
    }

    /// Wards whose local body is no longer selected are dropped
    pub fn retain_wards(&mut self, ward_parent: impl Fn(&str) -> Option<String>) {
        let lsgs = &self.local_bodies;
        self.wards
            .retain(|ward| ward_parent(ward).map(|p| lsgs.contains(&p)).unwrap_or(false));
    }
}

impl FormRecord for ResultFilterForm {
    type Field = ResultFilterField;

    fn value(&self, field: ResultFilterField) -> FieldValue {
        match field {
            ResultFilterField::LocalBodies => FieldValue::List(self.local_bodies.clone()),
            ResultFilterField::Wards => FieldValue::List(self.wards.clone()),
            other => FieldValue::Text(self.text(other).unwrap_or_default().to_string()),
        }
    }

    fn set_value(&mut self, field: ResultFilterField, value: FieldValue) {
        match field {
            ResultFilterField::LocalBodies => self.local_bodies = value.into_list(),
            ResultFilterField::Wards => self.wards = value.into_list(),
            other => {
                if let Some(slot) = self.text_mut(other) {
                    *slot = value.into_text();
                }
            }
        }
    }
}

/// Every date filter must be blank or `YYYY-MM-DD`
pub fn filter_rules() -> FormValidation<ResultFilterForm> {
    let mut rules = FormValidation::new();
    for (after, before) in DATE_RANGES {
        rules = rules.rule(*after, iso_date()).rule(*before, iso_date());
    }
    rules
}

/// First date range whose ends are reversed
pub fn reversed_range(form: &ResultFilterForm) -> Option<ResultFilterField> {
    let date = |field: ResultFilterField| {
        NaiveDate::parse_from_str(form.text(field)?.trim(), "%Y-%m-%d").ok()
    };
    DATE_RANGES.iter().find_map(|(after, before)| match (date(*after), date(*before)) {
        (Some(from), Some(to)) if to < from => Some(*before),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_round_trips_filters() {
        let filters = FilterSet::new()
            .with("local_bodies", "7,9")
            .with("result_date_after", "2021-05-01")
            .with("name", "Anil");
        let draft = ResultFilterForm::from_filters(&filters);
        assert_eq!(draft.local_bodies, vec!["7", "9"]);
        assert_eq!(draft.result_date_after, "2021-05-01");

        let next = filters.merged(&draft.to_filters()).pruned();
        assert_eq!(next, filters.pruned().with("local_bodies", vec!["7".to_string(), "9".to_string()]));
    }

    #[test]
    fn test_wards_follow_local_bodies() {
        let mut draft = ResultFilterForm {
            local_bodies: vec!["7".into()],
            wards: vec!["70".into(), "90".into()],
            ..Default::default()
        };
        draft.retain_wards(|ward| Some(if ward.starts_with('7') { "7" } else { "9" }.to_string()));
        assert_eq!(draft.wards, vec!["70"]);
    }

    #[test]
    fn test_date_rules() {
        let mut draft = ResultFilterForm {
            created_date_after: "2021-05-10".into(),
            created_date_before: "2021-05-01".into(),
            ..Default::default()
        };
        assert!(filter_rules().check(&draft).is_valid());
        assert_eq!(reversed_range(&draft), Some(ResultFilterField::CreatedDateBefore));

        draft.created_date_before = "10/05/2021".into();
        let report = filter_rules().check(&draft);
        assert_eq!(report.first_invalid, Some(ResultFilterField::CreatedDateBefore));
        assert_eq!(reversed_range(&draft), None);
    }
}
