//! The three recommendation paths, built from [`scanner`](crate::scanner) and
//! [`ranker`](crate::ranker), plus a per-month activity summary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityMap;
use crate::config::EngineConfig;
use crate::date_index;
use crate::destination::Destination;
use crate::ranker::{self, ScoredWindow};
use crate::scanner;

/// Best window of a single month for the calendar view.
///
/// `None` when no window meets the calendar quorum.
pub fn month_recommendation(
    availability: &AvailabilityMap,
    year: i32,
    month_index: u32,
    config: &EngineConfig,
) -> Option<ScoredWindow> {
    let windows = scanner::scan(availability, year, month_index, config.window_size);
    ranker::rank(&windows, &config.calendar)
        .into_vec()
        .into_iter()
        .next()
}

/// The best window found for one preferred month of a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationMatch {
    /// The preferred-month token this window was found for.
    pub month_token: String,
    #[serde(flatten)]
    pub window: ScoredWindow,
}

/// At most one window per recognized preferred month, in preference order.
///
/// Months are resolved against the destination's year. Unrecognized tokens are
/// skipped; months with no qualifying window contribute nothing.
pub fn destination_recommendations(
    availability: &AvailabilityMap,
    destination: &Destination,
    config: &EngineConfig,
) -> Vec<DestinationMatch> {
    let matches: Vec<DestinationMatch> = destination
        .resolved_months()
        .filter_map(|(token, month_index)| {
            let windows =
                scanner::scan(availability, destination.year, month_index, config.window_size);
            ranker::rank(&windows, &config.destination)
                .into_vec()
                .into_iter()
                .next()
                .map(|window| DestinationMatch {
                    month_token: token.to_string(),
                    window,
                })
        })
        .collect();

    tracing::debug!(
        destination = %destination.id,
        matches = matches.len(),
        "matched destination months"
    );
    matches
}

/// Highest-scoring windows across every month of `years`.
pub fn global_top_windows(
    availability: &AvailabilityMap,
    years: &[i32],
    config: &EngineConfig,
) -> Vec<ScoredWindow> {
    let windows = scanner::scan_years(availability, years, config.window_size);
    ranker::rank(&windows, &config.global).into_vec()
}

/// Activity of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month_index: u32,
    /// Dates with at least one participant free.
    pub free_days: usize,
    /// Largest number of participants free on a single date.
    pub max_participants: usize,
}

/// Summarize every month that has at least one free participant, sorted by
/// `(year, month_index)`. Keys that are not valid dates are skipped.
pub fn month_summary(availability: &AvailabilityMap) -> Vec<MonthSummary> {
    let mut months: BTreeMap<(i32, u32), MonthSummary> = BTreeMap::new();

    for (date, names) in availability.iter() {
        if names.is_empty() {
            continue;
        }
        let (year, month_index, _) = match date_index::parse_iso_date(date) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "skipping availability key");
                continue;
            }
        };
        let summary = months
            .entry((year, month_index))
            .or_insert_with(|| MonthSummary {
                year,
                month_index,
                free_days: 0,
                max_participants: 0,
            });
        summary.free_days += 1;
        summary.max_participants = summary.max_participants.max(names.len());
    }

    months.into_values().collect()
}
