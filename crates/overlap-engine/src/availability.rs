//! Per-day participant availability.
//!
//! An [`AvailabilityMap`] maps ISO date strings (`YYYY-MM-DD`) to the set of
//! participants who are free that day. The scanner only ever reads it; the
//! mutating methods exist for the collaborator that owns the live data and
//! hands the engine a fresh snapshot after every change.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::date_index;
use crate::error::Result;

/// Mapping from ISO date to the participants free on that date.
///
/// Serializes as a plain JSON object: `{"2026-03-10": ["Alice", "Bob"]}`.
/// Duplicate names within one date collapse on deserialization; `null` and
/// empty entries are dropped, since they mean nobody is free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityMap {
    #[serde(deserialize_with = "deserialize_days")]
    days: BTreeMap<String, BTreeSet<String>>,
}

fn deserialize_days<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, BTreeSet<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<BTreeSet<String>>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(date, names)| {
            names
                .filter(|names| !names.is_empty())
                .map(|names| (date, names))
        })
        .collect())
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Participants free on `date`. Absent dates yield `None`.
    pub fn participants_on(&self, date: &str) -> Option<&BTreeSet<String>> {
        self.days.get(date)
    }

    /// Number of participants free on `date`; absent dates count as zero.
    pub fn count_on(&self, date: &str) -> usize {
        self.days.get(date).map_or(0, BTreeSet::len)
    }

    /// Whether `name` is marked free on `date`.
    pub fn is_free(&self, date: &str, name: &str) -> bool {
        self.days.get(date).is_some_and(|names| names.contains(name))
    }

    /// Iterate over `(date, participants)` in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.days.iter().map(|(date, names)| (date.as_str(), names))
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(BTreeSet::is_empty)
    }

    /// Mark `name` free on `date`. Returns `false` if already present.
    pub fn insert(&mut self, date: &str, name: &str) -> bool {
        self.days
            .entry(date.to_string())
            .or_default()
            .insert(name.to_string())
    }

    /// Flip `name`'s availability on `date`.
    ///
    /// Returns whether `name` is free on `date` afterwards. Dates left with no
    /// participants are dropped from the map.
    pub fn toggle(&mut self, date: &str, name: &str) -> bool {
        if let Some(names) = self.days.get_mut(date) {
            if names.remove(name) {
                if names.is_empty() {
                    self.days.remove(date);
                }
                return false;
            }
        }
        self.insert(date, name)
    }

    /// Like [`toggle`](Self::toggle), but rejects keys that are not calendar dates.
    pub fn toggle_checked(&mut self, date: &str, name: &str) -> Result<bool> {
        date_index::parse_iso_date(date)?;
        Ok(self.toggle(date, name))
    }

    /// Replace `old` with `new` on every date. Returns how many dates changed.
    pub fn rename_participant(&mut self, old: &str, new: &str) -> usize {
        if old == new {
            return 0;
        }
        let mut changed = 0;
        for names in self.days.values_mut() {
            if names.remove(old) {
                names.insert(new.to_string());
                changed += 1;
            }
        }
        changed
    }

    /// Remove `name` from every date. Returns how many dates changed.
    pub fn remove_participant(&mut self, name: &str) -> usize {
        let mut changed = 0;
        self.days.retain(|_, names| {
            if names.remove(name) {
                changed += 1;
            }
            !names.is_empty()
        });
        changed
    }
}

impl<D, N, I> FromIterator<(D, I)> for AvailabilityMap
where
    D: Into<String>,
    N: Into<String>,
    I: IntoIterator<Item = N>,
{
    fn from_iter<T: IntoIterator<Item = (D, I)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (date, names) in iter {
            let entry = map.days.entry(date.into()).or_default();
            entry.extend(names.into_iter().map(Into::into));
        }
        map
    }
}
