//! Property-based tests for the scanner and ranker using proptest.
//!
//! These check invariants that must hold for any availability snapshot, not
//! just the hand-built scenarios in `scanner_tests.rs` and `ranker_tests.rs`.

use overlap_engine::date_index::days_in_month;
use overlap_engine::ranker::{best, top_k, RankerConfig};
use overlap_engine::scanner::{scan, WINDOW_SIZE};
use overlap_engine::AvailabilityMap;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const PEOPLE: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

fn arb_year() -> impl Strategy<Value = i32> {
    2020i32..=2030
}

fn arb_month_index() -> impl Strategy<Value = u32> {
    0u32..12
}

/// Up to 40 (day, person) marks inside one month. Days past the month's end
/// produce keys the scan never looks at.
fn arb_marks() -> impl Strategy<Value = Vec<(u32, usize)>> {
    prop::collection::vec((1u32..=31, 0usize..PEOPLE.len()), 0..40)
}

fn build(year: i32, month_index: u32, marks: &[(u32, usize)]) -> AvailabilityMap {
    let mut availability = AvailabilityMap::new();
    for &(day, person) in marks {
        availability.insert(
            &format!("{:04}-{:02}-{:02}", year, month_index + 1, day),
            PEOPLE[person],
        );
    }
    availability
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn window_count_is_days_minus_six(
        year in arb_year(),
        month_index in arb_month_index(),
        marks in arb_marks(),
    ) {
        let availability = build(year, month_index, &marks);
        let windows = scan(&availability, year, month_index, WINDOW_SIZE);
        let days = days_in_month(year, month_index);

        prop_assert_eq!(windows.len() as u32, days - 6);
        for (i, w) in windows.iter().enumerate() {
            prop_assert_eq!(w.start_day, i as u32 + 1);
            prop_assert_eq!(w.end_day, w.start_day + 6);
        }
    }

    #[test]
    fn coverage_fields_are_consistent(
        year in arb_year(),
        month_index in arb_month_index(),
        marks in arb_marks(),
    ) {
        let availability = build(year, month_index, &marks);
        for w in scan(&availability, year, month_index, WINDOW_SIZE) {
            let per_day: Vec<usize> = (w.start_day..=w.end_day)
                .map(|d| availability.count_on(&format!("{:04}-{:02}-{:02}", year, month_index + 1, d)))
                .collect();

            prop_assert_eq!(w.total_day_count, per_day.iter().sum::<usize>());
            prop_assert_eq!(w.max_single_day_overlap, per_day.iter().copied().max().unwrap_or(0));
            prop_assert!(w.participants.len() <= w.total_day_count);
            prop_assert!(w.max_single_day_overlap <= w.participants.len());
        }
    }

    #[test]
    fn scan_is_idempotent(
        year in arb_year(),
        month_index in arb_month_index(),
        marks in arb_marks(),
    ) {
        let availability = build(year, month_index, &marks);
        prop_assert_eq!(
            scan(&availability, year, month_index, WINDOW_SIZE),
            scan(&availability, year, month_index, WINDOW_SIZE)
        );
    }

    #[test]
    fn nothing_below_quorum_is_ever_selected(
        year in arb_year(),
        month_index in arb_month_index(),
        marks in arb_marks(),
    ) {
        let availability = build(year, month_index, &marks);
        let windows = scan(&availability, year, month_index, WINDOW_SIZE);

        for config in [RankerConfig::calendar(), RankerConfig::destination()] {
            if let Some(chosen) = best(&windows, &config) {
                prop_assert!(chosen.window.max_single_day_overlap >= 3);
            }
        }
        for chosen in top_k(&windows, &RankerConfig::global(), 6) {
            prop_assert!(chosen.window.max_single_day_overlap >= 3);
        }
    }

    #[test]
    fn best_is_the_earliest_maximum(
        year in arb_year(),
        month_index in arb_month_index(),
        marks in arb_marks(),
    ) {
        let availability = build(year, month_index, &marks);
        let windows = scan(&availability, year, month_index, WINDOW_SIZE);
        let config = RankerConfig::destination();

        if let Some(chosen) = best(&windows, &config) {
            for w in windows.iter().filter(|w| config.is_eligible(w)) {
                let score = config.score(w);
                prop_assert!(score <= chosen.score);
                if score == chosen.score {
                    prop_assert!(w.start_day >= chosen.window.start_day);
                }
            }
        }
    }

    #[test]
    fn top_k_is_bounded_and_non_increasing(
        year in arb_year(),
        month_index in arb_month_index(),
        marks in arb_marks(),
        k in 1usize..10,
    ) {
        let availability = build(year, month_index, &marks);
        let windows = scan(&availability, year, month_index, WINDOW_SIZE);
        let top = top_k(&windows, &RankerConfig::global(), k);

        prop_assert!(top.len() <= k);
        for pair in top.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
