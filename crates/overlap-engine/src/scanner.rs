//! Sliding-window scan over a month of availability.
//!
//! Produces one [`Window`] per valid start day, in ascending order. The scan
//! never filters: quorum and scoring are the ranker's job. Windows never cross
//! a month boundary, so a month shorter than the window yields nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityMap;
use crate::date_index::{self, MONTHS_PER_YEAR};

/// Window length used by every recommendation path.
pub const WINDOW_SIZE: u32 = 7;

/// A run of consecutive days inside one month, with its participant coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub year: i32,
    /// Zero-based month index.
    pub month_index: u32,
    /// First day of the window (1-based, inclusive).
    pub start_day: u32,
    /// Last day of the window (inclusive).
    pub end_day: u32,
    /// Union of everyone free on at least one day of the window.
    pub participants: BTreeSet<String>,
    /// Sum of the per-day participant counts. Someone free on 3 of 7 days adds 3.
    pub total_day_count: usize,
    /// Largest per-day participant count within the window.
    pub max_single_day_overlap: usize,
}

impl Window {
    /// Number of calendar days covered.
    pub fn day_span(&self) -> u32 {
        self.end_day - self.start_day + 1
    }

    /// Whether `day` (1-based) lies inside the window.
    pub fn contains_day(&self, day: u32) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }

    pub fn contains_participant(&self, name: &str) -> bool {
        self.participants.contains(name)
    }
}

/// Enumerate every `window_size`-day window of the given month.
///
/// Dates missing from `availability` count as nobody free.
///
/// # Panics
/// Panics if `window_size == 0` or `month_index >= 12`.
pub fn scan(
    availability: &AvailabilityMap,
    year: i32,
    month_index: u32,
    window_size: u32,
) -> Vec<Window> {
    assert!(window_size > 0, "window size must be positive");

    let days = date_index::days_in_month(year, month_index);
    if days < window_size {
        return Vec::new();
    }

    // Per-day lookups are shared by up to `window_size` windows; resolve them once.
    let dates: Vec<String> = (1..=days)
        .map(|day| date_index::iso_date(year, month_index, day))
        .collect();

    let last_start = days - window_size + 1;
    let windows: Vec<Window> = (1..=last_start)
        .map(|start_day| {
            let mut participants = BTreeSet::new();
            let mut total_day_count = 0;
            let mut max_single_day_overlap = 0;

            for day in start_day..start_day + window_size {
                let date = &dates[(day - 1) as usize];
                if let Some(names) = availability.participants_on(date) {
                    total_day_count += names.len();
                    max_single_day_overlap = max_single_day_overlap.max(names.len());
                    participants.extend(names.iter().cloned());
                }
            }

            Window {
                year,
                month_index,
                start_day,
                end_day: start_day + window_size - 1,
                participants,
                total_day_count,
                max_single_day_overlap,
            }
        })
        .collect();

    tracing::trace!(year, month_index, windows = windows.len(), "scanned month");
    windows
}

/// Scan every month of every year in `years`, in order, concatenating the results.
pub fn scan_years(availability: &AvailabilityMap, years: &[i32], window_size: u32) -> Vec<Window> {
    let windows: Vec<Window> = years
        .iter()
        .flat_map(|&year| {
            (0..MONTHS_PER_YEAR).flat_map(move |month_index| {
                scan(availability, year, month_index, window_size)
            })
        })
        .collect();

    tracing::debug!(years = ?years, windows = windows.len(), "scanned years");
    windows
}
