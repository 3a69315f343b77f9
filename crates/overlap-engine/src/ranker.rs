//! Quorum filtering, scoring and selection of scanned windows.
//!
//! One ranker covers all three recommendation paths; they differ only in their
//! [`RankerConfig`]:
//!
//! | preset | quorum | score | selection |
//! |---|---|---|---|
//! | [`RankerConfig::calendar`] | `max > 2` | `total` | best |
//! | [`RankerConfig::destination`] | `max >= 3` | `total + 2 * union` | best |
//! | [`RankerConfig::global`] | `max >= 3` | `total + 5 * union` | top 6 |
//!
//! The strict and inclusive comparisons agree on every integer today. They are
//! kept literal so each threshold can be tuned on its own.

use serde::{Deserialize, Serialize};

use crate::scanner::Window;

/// Default number of windows returned by the global ranking.
pub const DEFAULT_TOP_K: usize = 6;

/// How eligible windows are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Selection {
    /// The first window with the strictly highest score.
    Best,
    /// The `k` highest-scoring windows, in descending score order.
    TopK { k: usize },
}

/// Parameters for [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Busiest-day participant count a window is compared against.
    pub quorum_threshold: usize,
    /// `true`: eligible when `max >= threshold`. `false`: when `max > threshold`.
    pub quorum_inclusive: bool,
    /// Weight of the distinct-participant count in the score.
    pub union_weight: usize,
    pub selection: Selection,
    /// Treat a best score of zero as no recommendation.
    #[serde(default)]
    pub require_positive_score: bool,
}

impl RankerConfig {
    /// Single-month calendar recommendation.
    pub const fn calendar() -> Self {
        Self {
            quorum_threshold: 2,
            quorum_inclusive: false,
            union_weight: 0,
            selection: Selection::Best,
            require_positive_score: true,
        }
    }

    /// Best window per preferred month of a destination.
    pub const fn destination() -> Self {
        Self {
            quorum_threshold: 3,
            quorum_inclusive: true,
            union_weight: 2,
            selection: Selection::Best,
            require_positive_score: false,
        }
    }

    /// Cross-year overview ranking.
    pub const fn global() -> Self {
        Self {
            quorum_threshold: 3,
            quorum_inclusive: true,
            union_weight: 5,
            selection: Selection::TopK { k: DEFAULT_TOP_K },
            require_positive_score: false,
        }
    }

    /// Whether `window` meets the quorum.
    pub fn is_eligible(&self, window: &Window) -> bool {
        if self.quorum_inclusive {
            window.max_single_day_overlap >= self.quorum_threshold
        } else {
            window.max_single_day_overlap > self.quorum_threshold
        }
    }

    pub fn score(&self, window: &Window) -> usize {
        window.total_day_count + self.union_weight * window.participants.len()
    }
}

/// A window together with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWindow {
    #[serde(flatten)]
    pub window: Window,
    pub score: usize,
}

/// Result of [`rank`], shaped by the configured [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranking {
    Best(Option<ScoredWindow>),
    Top(Vec<ScoredWindow>),
}

impl Ranking {
    /// Flatten into a list: zero or one entry for `Best`.
    pub fn into_vec(self) -> Vec<ScoredWindow> {
        match self {
            Ranking::Best(best) => best.into_iter().collect(),
            Ranking::Top(top) => top,
        }
    }
}

/// Filter, score and select `windows` according to `config`.
pub fn rank(windows: &[Window], config: &RankerConfig) -> Ranking {
    match config.selection {
        Selection::Best => Ranking::Best(best(windows, config)),
        Selection::TopK { k } => Ranking::Top(top_k(windows, config, k)),
    }
}

/// The first eligible window with the strictly highest score.
///
/// Later windows only replace the current best on a strictly greater score,
/// so ties go to the earliest window in `windows`.
pub fn best(windows: &[Window], config: &RankerConfig) -> Option<ScoredWindow> {
    let mut best: Option<(usize, &Window)> = None;

    for window in windows.iter().filter(|w| config.is_eligible(w)) {
        let score = config.score(window);
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, window));
        }
    }

    let (score, window) = best?;
    if config.require_positive_score && score == 0 {
        return None;
    }
    Some(ScoredWindow {
        window: window.clone(),
        score,
    })
}

/// The `k` highest-scoring eligible windows.
///
/// Sorting is stable, so equal scores keep their scan order. Overlapping
/// windows are not deduplicated.
pub fn top_k(windows: &[Window], config: &RankerConfig, k: usize) -> Vec<ScoredWindow> {
    let mut scored: Vec<ScoredWindow> = windows
        .iter()
        .filter(|w| config.is_eligible(w))
        .map(|w| ScoredWindow {
            score: config.score(w),
            window: w.clone(),
        })
        .collect();

    let eligible = scored.len();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(k);

    tracing::debug!(eligible, returned = scored.len(), k, "ranked windows");
    scored
}
