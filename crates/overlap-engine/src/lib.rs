//! # overlap-engine
//!
//! Finds the calendar windows where a group of people is free together.
//!
//! Participants mark the days they are free; the engine slides a fixed
//! seven-day window across each month, measures how many people each window
//! covers, and recommends the windows that reach a minimum quorum on their
//! busiest day. The same scanner and ranker drive three views: the best window
//! of a single month, the best window per preferred month of a destination,
//! and a ranking across whole years.
//!
//! ## Modules
//!
//! - [`date_index`] — days-in-month, ISO date keys, weekday offsets
//! - [`availability`] — date → set of free participants
//! - [`destination`] — destinations and the month-token vocabulary
//! - [`scanner`] — enumerate windows with their coverage
//! - [`ranker`] — quorum filter, scoring, best / top-k selection
//! - [`recommend`] — the calendar, destination and global recommendation paths
//! - [`view`] — display-ready recommendation shapes
//! - [`snapshot`] — availability + destinations bundle, cascading participant edits
//! - [`config`] — window size and ranker presets
//! - [`error`] — Error types

pub mod availability;
pub mod config;
pub mod date_index;
pub mod destination;
pub mod error;
pub mod ranker;
pub mod recommend;
pub mod scanner;
pub mod snapshot;
pub mod view;

pub use availability::AvailabilityMap;
pub use config::EngineConfig;
pub use destination::{Destination, DestinationRecord};
pub use error::OverlapError;
pub use ranker::{rank, Ranking, RankerConfig, ScoredWindow, Selection};
pub use recommend::{
    destination_recommendations, global_top_windows, month_recommendation, month_summary,
    DestinationMatch, MonthSummary,
};
pub use scanner::{scan, scan_years, Window, WINDOW_SIZE};
pub use snapshot::Snapshot;
