//! Destinations and the month-token vocabulary they are matched against.
//!
//! Stored destination documents are loosely shaped; [`DestinationRecord`]
//! accepts whatever the store returns and [`DestinationRecord::into_destination`]
//! defaults it into a strict [`Destination`] before it reaches the matcher.

use serde::{Deserialize, Serialize};

/// The fixed month tokens stored in `preferred_months`, indexed by month index.
pub const MONTH_TOKENS: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// Full month names used for display labels, indexed by month index.
pub const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Resolve a month token to its zero-based index. Unknown tokens yield `None`.
pub fn month_index_of(token: &str) -> Option<u32> {
    MONTH_TOKENS
        .iter()
        .position(|t| *t == token)
        .map(|i| i as u32)
}

/// The token for a month index.
///
/// # Panics
/// Panics if `month_index >= 12`.
pub fn month_token(month_index: u32) -> &'static str {
    MONTH_TOKENS[month_index as usize]
}

/// The display name for a month index.
///
/// # Panics
/// Panics if `month_index >= 12`.
pub fn month_name(month_index: u32) -> &'static str {
    MONTH_NAMES[month_index as usize]
}

/// A proposed trip destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Participants interested in this destination, without duplicates.
    pub interested_people: Vec<String>,
    /// Month tokens from [`MONTH_TOKENS`], in the order the creator picked them.
    pub preferred_months: Vec<String>,
    /// Year the preferred months are resolved against.
    pub year: i32,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Destination {
    pub fn is_interested(&self, name: &str) -> bool {
        self.interested_people.iter().any(|p| p == name)
    }

    /// Flip `name`'s interest. Returns whether `name` is interested afterwards.
    pub fn toggle_interest(&mut self, name: &str) -> bool {
        if self.is_interested(name) {
            self.interested_people.retain(|p| p != name);
            false
        } else {
            self.interested_people.push(name.to_string());
            true
        }
    }

    /// Replace `old` with `new` among the interested people.
    pub fn rename_participant(&mut self, old: &str, new: &str) -> bool {
        if old == new || !self.is_interested(old) {
            return false;
        }
        let already_present = self.is_interested(new);
        if already_present {
            self.interested_people.retain(|p| p != old);
        } else {
            for person in &mut self.interested_people {
                if *person == old {
                    *person = new.to_string();
                }
            }
        }
        true
    }

    pub fn remove_participant(&mut self, name: &str) -> bool {
        let before = self.interested_people.len();
        self.interested_people.retain(|p| p != name);
        self.interested_people.len() != before
    }

    /// Preferred months resolved to `(token, month_index)`, skipping unknown tokens.
    pub fn resolved_months(&self) -> impl Iterator<Item = (&str, u32)> {
        self.preferred_months.iter().filter_map(move |token| {
            let index = month_index_of(token);
            if index.is_none() {
                tracing::debug!(
                    destination = %self.id,
                    token = %token,
                    "skipping unrecognized month token"
                );
            }
            index.map(|i| (token.as_str(), i))
        })
    }
}

/// A destination document as it comes out of the store.
///
/// Every field is optional; see [`DestinationRecord::into_destination`] for the
/// defaults applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DestinationRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub interested_people: Option<Vec<String>>,
    pub preferred_months: Option<Vec<String>>,
    pub year: Option<i32>,
    pub created_at: Option<i64>,
}

impl DestinationRecord {
    /// Default missing fields and deduplicate interested people.
    ///
    /// A missing or zero `year` resolves to `fallback_year`.
    pub fn into_destination(self, fallback_year: i32) -> Destination {
        let mut interested_people: Vec<String> = Vec::new();
        for person in self.interested_people.unwrap_or_default() {
            if !interested_people.contains(&person) {
                interested_people.push(person);
            }
        }

        Destination {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            interested_people,
            preferred_months: self.preferred_months.unwrap_or_default(),
            year: self.year.filter(|&y| y != 0).unwrap_or(fallback_year),
            created_at: self.created_at.unwrap_or_default(),
        }
    }
}
