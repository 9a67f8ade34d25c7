//! Property tests for the scoring invariants: bounds, monotonicity and
//! determinism over generated measurements.

use crate::energy::calculate_wave_energy;
use crate::interaction::calculate_swell_dominance;
use crate::scoring::{
    calculate_spot_relative_wind_score, calculate_surf_score, calculate_tide_score,
    calculate_wave_score, calculate_wind_score,
};
use crate::CompassPoint;
use proptest::prelude::*;
use proptest::test_runner::Config;

const POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

fn direction() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(POINTS.to_vec()).prop_map(str::to_string),
        "[a-zA-Z ]{0,6}",
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn wave_energy_is_rounded_product(height in 0.0_f64..15.0, period in 0.0_f64..25.0) {
        prop_assert_eq!(calculate_wave_energy(height, period), (height * height * period).round());
    }

    #[test]
    fn wave_score_bounded_and_monotonic_in_height(
        height in 0.0_f64..10.0,
        extra in 0.0_f64..5.0,
        period in 0.0_f64..25.0
    ) {
        let lower = calculate_wave_score(height, period);
        let higher = calculate_wave_score(height + extra, period);
        prop_assert!((1.0..=10.0).contains(&lower));
        prop_assert!(lower <= higher);
    }

    #[test]
    fn wave_score_monotonic_in_period(
        height in 0.0_f64..10.0,
        period in 0.0_f64..20.0,
        extra in 0.0_f64..10.0
    ) {
        let shorter = calculate_wave_score(height, period);
        let longer = calculate_wave_score(height, period + extra);
        prop_assert!(shorter <= longer);
        prop_assert!((1.0..=10.0).contains(&longer));
    }

    #[test]
    fn wind_score_bounded(speed in 0.0_f64..200.0, direction in direction()) {
        let score = calculate_wind_score(speed, &direction, None);
        prop_assert!((1.0..=10.0).contains(&score));
    }

    #[test]
    fn spot_relative_wind_score_bounded(
        speed in 0.0_f64..200.0,
        wind in direction(),
        shore in direction()
    ) {
        let score = calculate_spot_relative_wind_score(speed, &wind, &shore);
        prop_assert!((1.0..=10.0).contains(&score));
    }

    #[test]
    fn tide_score_bounded(tide in -3.0_f64..8.0, label in "(low|mid|high|LOW|[a-z]{0,5})") {
        let score = calculate_tide_score(tide, Some(label.as_str()));
        prop_assert!((1.0..=10.0).contains(&score));
    }

    #[test]
    fn overall_score_bounded_without_clamp(
        height in 0.0_f64..20.0,
        period in 0.0_f64..30.0,
        speed in 0.0_f64..150.0,
        direction in direction(),
        tide in proptest::option::of(-2.0_f64..6.0)
    ) {
        let score = calculate_surf_score(height, period, speed, &direction, tide);
        prop_assert!((1.0..=10.0).contains(&score.overall_score), "overall {}", score.overall_score);
        prop_assert!((1.0..=10.0).contains(&score.wave_quality));
        prop_assert!((1.0..=10.0).contains(&score.wind_quality));
        prop_assert!((1.0..=10.0).contains(&score.tide_optimal));
    }

    #[test]
    fn surf_score_is_deterministic(
        height in 0.0_f64..10.0,
        period in 0.0_f64..25.0,
        speed in 0.0_f64..80.0,
        direction in direction()
    ) {
        prop_assert_eq!(
            calculate_surf_score(height, period, speed, &direction, None),
            calculate_surf_score(height, period, speed, &direction, None)
        );
    }

    #[test]
    fn dominance_sides_are_percentages(
        primary_height in 0.1_f64..8.0,
        primary_period in 1.0_f64..20.0,
        secondary_height in 0.0_f64..8.0,
        secondary_period in 0.0_f64..20.0
    ) {
        let split = calculate_swell_dominance(
            primary_height,
            primary_period,
            Some((secondary_height, secondary_period)),
        );
        prop_assert!((0.0..=100.0).contains(&split.primary));
        prop_assert!((0.0..=100.0).contains(&split.secondary));
        // Independent rounding can drift by at most one point
        prop_assert!((split.primary + split.secondary - 100.0).abs() <= 1.0);
    }

    #[test]
    fn compass_parse_round_trips_display(index in 0_usize..16) {
        let point = CompassPoint::parse(POINTS[index]).unwrap();
        prop_assert_eq!(point.to_string(), POINTS[index]);
        prop_assert_eq!(point.degrees(), index as f64 * 22.5);
    }
}
