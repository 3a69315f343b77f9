//! Display-ready shapes handed to the presentation layer.
//!
//! Nothing here affects scoring. The viewer's name is passed through only to
//! flag "this is you" entries.

use serde::Serialize;

use crate::availability::AvailabilityMap;
use crate::date_index;
use crate::destination::{self, Destination};
use crate::ranker::ScoredWindow;
use crate::recommend::DestinationMatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantTag {
    pub name: String,
    pub is_viewer: bool,
}

/// A selected window, labeled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub year: i32,
    pub month_index: u32,
    /// e.g. `"März 2026"`.
    pub month_label: String,
    /// e.g. `"Mär 10 - 16"`.
    pub range_label: String,
    pub start_day: u32,
    pub end_day: u32,
    pub score: usize,
    pub participants: Vec<ParticipantTag>,
    /// The viewer is free on at least one day of the window.
    pub matches_viewer: bool,
}

impl RecommendationView {
    pub fn new(scored: &ScoredWindow, viewer: Option<&str>) -> Self {
        let window = &scored.window;
        let participants: Vec<ParticipantTag> = window
            .participants
            .iter()
            .map(|name| ParticipantTag {
                name: name.clone(),
                is_viewer: viewer == Some(name.as_str()),
            })
            .collect();
        let matches_viewer = participants.iter().any(|p| p.is_viewer);

        Self {
            year: window.year,
            month_index: window.month_index,
            month_label: format!(
                "{} {}",
                destination::month_name(window.month_index),
                window.year
            ),
            range_label: format!(
                "{} {} - {}",
                destination::month_token(window.month_index),
                window.start_day,
                window.end_day
            ),
            start_day: window.start_day,
            end_day: window.end_day,
            score: scored.score,
            participants,
            matches_viewer,
        }
    }
}

/// One day of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub free_count: usize,
    pub viewer_free: bool,
    /// Drawn with the highlight ring.
    pub in_recommended_window: bool,
}

/// A month laid out Monday-first, with the recommended window highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month_index: u32,
    pub month_label: String,
    /// Empty cells before day 1.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
    pub recommendation: Option<RecommendationView>,
}

impl CalendarGrid {
    pub fn new(
        availability: &AvailabilityMap,
        year: i32,
        month_index: u32,
        recommendation: Option<&ScoredWindow>,
        viewer: Option<&str>,
    ) -> Self {
        let days = (1..=date_index::days_in_month(year, month_index))
            .map(|day| {
                let date = date_index::iso_date(year, month_index, day);
                DayCell {
                    day,
                    free_count: availability.count_on(&date),
                    viewer_free: viewer.is_some_and(|v| availability.is_free(&date, v)),
                    in_recommended_window: recommendation
                        .is_some_and(|r| r.window.contains_day(day)),
                    date,
                }
            })
            .collect();

        Self {
            year,
            month_index,
            month_label: format!("{} {}", destination::month_name(month_index), year),
            leading_blanks: date_index::first_weekday_offset(year, month_index),
            days,
            recommendation: recommendation.map(|r| RecommendationView::new(r, viewer)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationMatchView {
    pub month_token: String,
    /// The viewer is in the window and interested in the destination.
    pub personal_match: bool,
    #[serde(flatten)]
    pub recommendation: RecommendationView,
}

/// A destination card with its per-month matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationView {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub preferred_months: Vec<String>,
    pub interested_people: Vec<ParticipantTag>,
    pub viewer_interested: bool,
    pub matches: Vec<DestinationMatchView>,
}

impl DestinationView {
    pub fn new(
        destination: &Destination,
        matches: &[DestinationMatch],
        viewer: Option<&str>,
    ) -> Self {
        let viewer_interested = viewer.is_some_and(|v| destination.is_interested(v));

        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            year: destination.year,
            preferred_months: destination.preferred_months.clone(),
            interested_people: destination
                .interested_people
                .iter()
                .map(|name| ParticipantTag {
                    name: name.clone(),
                    is_viewer: viewer == Some(name.as_str()),
                })
                .collect(),
            viewer_interested,
            matches: matches
                .iter()
                .map(|m| {
                    let recommendation = RecommendationView::new(&m.window, viewer);
                    DestinationMatchView {
                        month_token: m.month_token.clone(),
                        personal_match: viewer_interested && recommendation.matches_viewer,
                        recommendation,
                    }
                })
                .collect(),
        }
    }
}
