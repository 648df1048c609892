//! Property-based tests for clock spans and window overlap.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::clock::{ClockTime, TimeWindow};

/// Strategy to generate an arbitrary clock time.
fn clock_time() -> impl Strategy<Value = ClockTime> {
    (0u32..1440).prop_map(|m| ClockTime::from_minute(m).unwrap())
}

/// Strategy to generate a recorded window from two clock times.
fn window() -> impl Strategy<Value = TimeWindow> {
    (clock_time(), clock_time()).prop_map(|(s, e)| TimeWindow::from_clock(s, e))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* two windows, overlap is symmetric.
    #[test]
    fn prop_overlap_is_symmetric(a in window(), b in window()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    /// *For any* window, it overlaps itself (windows are never empty).
    #[test]
    fn prop_window_overlaps_itself(w in window()) {
        prop_assert!(w.overlaps(&w));
    }

    /// *For any* start/end pair, the span is between 0 and 24 hours.
    #[test]
    fn prop_span_is_bounded(s in clock_time(), e in clock_time()) {
        let span = ClockTime::span_hours(s, e);
        prop_assert!(span >= Decimal::ZERO);
        prop_assert!(span < Decimal::from(24));
    }

    /// *For any* pair, forward and wrapped spans sum to 24 hours.
    #[test]
    fn prop_span_and_reverse_sum_to_day(s in clock_time(), e in clock_time()) {
        prop_assume!(s != e);
        let forward = ClockTime::span_hours(s, e);
        let reverse = ClockTime::span_hours(e, s);
        prop_assert_eq!(forward + reverse, Decimal::from(24));
    }

    /// *For any* clock time, Display and FromStr round-trip.
    #[test]
    fn prop_clock_time_round_trips(t in clock_time()) {
        let parsed: ClockTime = t.to_string().parse().unwrap();
        prop_assert_eq!(parsed, t);
    }
}
