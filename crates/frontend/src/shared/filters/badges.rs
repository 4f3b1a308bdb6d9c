//! Removable chips describing the active filters of a list page

use std::fmt;
use std::sync::Arc;

use super::value::{FilterSet, FilterValue};

/// Ids in a dependent list that belong to a parent id
#[derive(Clone)]
pub struct Cascade {
    pub key: String,
    pub children: Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>,
}

impl fmt::Debug for Cascade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascade").field("key", &self.key).finish()
    }
}

/// How one filter key is shown as badges
#[derive(Clone, Debug)]
pub enum BadgeSpec {
    /// One chip for the key; removing it also clears `also_clears`
    Scalar {
        label: String,
        key: String,
        also_clears: Vec<String>,
    },
    /// One chip per id of a list key
    ListItems {
        label: String,
        key: String,
        cascade: Option<Cascade>,
    },
}

impl BadgeSpec {
    pub fn scalar(label: impl Into<String>, key: impl Into<String>) -> Self {
        BadgeSpec::Scalar {
            label: label.into(),
            key: key.into(),
            also_clears: Vec::new(),
        }
    }

    pub fn linked(label: impl Into<String>, key: impl Into<String>, also_clears: &[&str]) -> Self {
        BadgeSpec::Scalar {
            label: label.into(),
            key: key.into(),
            also_clears: also_clears.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn list(label: impl Into<String>, key: impl Into<String>) -> Self {
        BadgeSpec::ListItems {
            label: label.into(),
            key: key.into(),
            cascade: None,
        }
    }

    pub fn list_with_cascade(
        label: impl Into<String>,
        key: impl Into<String>,
        child_key: impl Into<String>,
        children: impl Fn(&str) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        BadgeSpec::ListItems {
            label: label.into(),
            key: key.into(),
            cascade: Some(Cascade {
                key: child_key.into(),
                children: Arc::new(children),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeRemoval {
    /// Clear these keys
    Keys(Vec<String>),
    /// Drop one id from a list key, and its children from linked lists
    ListItem {
        key: String,
        id: String,
        linked: Vec<(String, Vec<String>)>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub text: String,
    pub removal: BadgeRemoval,
}

impl Badge {
    /// Stable key for keyed rendering
    pub fn id(&self) -> String {
        match &self.removal {
            BadgeRemoval::Keys(keys) => keys.join("+"),
            BadgeRemoval::ListItem { key, id, .. } => format!("{}-{}", key, id),
        }
    }

    /// Filter set after removing this badge from `current`
    pub fn apply_to(&self, current: &FilterSet) -> FilterSet {
        match &self.removal {
            BadgeRemoval::Keys(keys) => current.cleared(keys),
            BadgeRemoval::ListItem { key, id, linked } => {
                let mut next = current.clone();
                let remaining: Vec<String> =
                    current.list(key).into_iter().filter(|x| x != id).collect();
                next.insert(key.as_str(), FilterValue::List(remaining));
                for (linked_key, drop) in linked {
                    let kept: Vec<String> = current
                        .list(linked_key)
                        .into_iter()
                        .filter(|x| !drop.contains(x))
                        .collect();
                    next.insert(linked_key.as_str(), FilterValue::List(kept));
                }
                next
            }
        }
    }
}

/// Chips for every active key covered by `specs`, in spec order
///
/// `display` maps a raw value (or list id) to a human-readable text;
/// unresolved values show as-is.
pub fn reconcile_badges(
    filters: &FilterSet,
    specs: &[BadgeSpec],
    display: impl Fn(&str, &str) -> Option<String>,
) -> Vec<Badge> {
    let mut badges = Vec::new();
    for spec in specs {
        match spec {
            BadgeSpec::Scalar {
                label,
                key,
                also_clears,
            } => {
                let Some(raw) = filters.text(key) else {
                    continue;
                };
                let mut keys = vec![key.clone()];
                keys.extend(also_clears.iter().cloned());
                badges.push(Badge {
                    label: label.clone(),
                    text: display(key, &raw).unwrap_or(raw),
                    removal: BadgeRemoval::Keys(keys),
                });
            }
            BadgeSpec::ListItems {
                label,
                key,
                cascade,
            } => {
                for id in filters.list(key) {
                    let linked = cascade
                        .as_ref()
                        .map(|c| vec![(c.key.clone(), (c.children)(&id))])
                        .unwrap_or_default();
                    badges.push(Badge {
                        label: label.clone(),
                        text: display(key, &id).unwrap_or_else(|| id.clone()),
                        removal: BadgeRemoval::ListItem {
                            key: key.clone(),
                            id,
                            linked,
                        },
                    });
                }
            }
        }
    }
    badges
}
