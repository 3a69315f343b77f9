//! An immutable bundle of availability and destinations, as handed over by
//! the data collaborator, with the cascading participant edits it performs.

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityMap;
use crate::destination::{Destination, DestinationRecord};
use crate::error::Result;

/// Document shape accepted by [`Snapshot::from_json_str`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotDocument {
    availability: AvailabilityMap,
    destinations: Vec<DestinationRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub availability: AvailabilityMap,
    pub destinations: Vec<Destination>,
}

impl Snapshot {
    pub fn new(availability: AvailabilityMap, destinations: Vec<Destination>) -> Self {
        Self {
            availability,
            destinations,
        }
    }

    /// Parse a stored snapshot.
    ///
    /// Destination documents are defaulted field by field; a destination
    /// without a year resolves against `fallback_year`.
    pub fn from_json_str(json: &str, fallback_year: i32) -> Result<Self> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        let destinations = document
            .destinations
            .into_iter()
            .map(|record| record.into_destination(fallback_year))
            .collect();

        Ok(Self {
            availability: document.availability,
            destinations,
        })
    }

    /// Destinations ordered by creation time, newest first.
    pub fn destinations_newest_first(&self) -> Vec<&Destination> {
        let mut sorted: Vec<&Destination> = self.destinations.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn destination_mut(&mut self, id: &str) -> Option<&mut Destination> {
        self.destinations.iter_mut().find(|d| d.id == id)
    }

    /// Rename a participant in availability and in every destination.
    pub fn rename_participant(&mut self, old: &str, new: &str) {
        if old == new {
            return;
        }
        let days = self.availability.rename_participant(old, new);
        let destinations = self
            .destinations
            .iter_mut()
            .map(|d| d.rename_participant(old, new))
            .filter(|&changed| changed)
            .count();
        tracing::debug!(days, destinations, "renamed participant");
    }

    /// Remove a participant from availability and from every destination.
    pub fn remove_participant(&mut self, name: &str) {
        let days = self.availability.remove_participant(name);
        let destinations = self
            .destinations
            .iter_mut()
            .map(|d| d.remove_participant(name))
            .filter(|&changed| changed)
            .count();
        tracing::debug!(days, destinations, "removed participant");
    }
}
