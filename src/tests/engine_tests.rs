//! # Engine Test Suite
//!
//! End-to-end checks of the scoring engine through its public functions, using
//! the reference values a forecast page relies on. Each test covers one
//! behaviour callers depend on, independent of module internals.

use crate::energy::calculate_wave_energy;
use crate::interaction::{analyze_swell_interaction, calculate_swell_dominance};
use crate::scoring::{calculate_surf_score, calculate_wave_score, calculate_wind_score};
use crate::swell::classify_swell_quality;
use crate::units::convert_wave_height;
use crate::{SwellInteraction, SwellQuality, SwellTrain, SwellType};
use approx::assert_relative_eq;

/// Reference conversion for a 2 m wave.
#[test]
fn two_meter_wave_converts_to_display_heights() {
    let metrics = convert_wave_height(2.0);

    assert_relative_eq!(metrics.height_feet, 6.6, epsilon = 1e-9);
    assert_relative_eq!(metrics.swell_height, 2.3, epsilon = 1e-9);
    assert_relative_eq!(metrics.breaking_height, 1.8, epsilon = 1e-9);
    assert_eq!(metrics.confidence, 85, "Confidence is a fixed placeholder");
}

/// Period brackets are inclusive at their lower bound.
#[test]
fn swell_classification_reference_points() {
    let excellent = classify_swell_quality(13.0);
    assert_eq!(excellent.swell_type, SwellType::GroundSwell);
    assert_eq!(excellent.quality, SwellQuality::Excellent);

    let good = classify_swell_quality(12.9);
    assert_eq!(good.swell_type, SwellType::GroundSwell);
    assert_eq!(good.quality, SwellQuality::Good);

    let poor = classify_swell_quality(7.9);
    assert_eq!(poor.swell_type, SwellType::WindSwell);
    assert_eq!(poor.quality, SwellQuality::Poor);
}

/// Offshore wind beats onshore wind at the same speed.
#[test]
fn offshore_wind_beats_onshore() {
    let offshore = calculate_wind_score(5.0, "N", None);
    let onshore = calculate_wind_score(5.0, "S", None);
    assert!(
        offshore > onshore,
        "Offshore {} should beat onshore {}",
        offshore,
        onshore
    );
}

/// Garbage direction strings still produce an in-range wind score.
#[test]
fn wind_score_survives_garbage_directions() {
    for direction in ["", "north-ish", "🌊", "n", "NNNE"] {
        for speed in [0.0, 7.5, 18.0, 25.0, 100.0] {
            let score = calculate_wind_score(speed, direction, Some(direction));
            assert!(
                (1.0..=10.0).contains(&score),
                "Wind score {} out of range for {:?} @ {}",
                score,
                direction,
                speed
            );
        }
    }
}

/// The four interaction outcomes from a fixed primary swell.
#[test]
fn swell_interaction_outcomes() {
    let primary = SwellTrain::new(2.0, 12.0, "N");

    assert_eq!(
        analyze_swell_interaction(&primary, None),
        SwellInteraction::SingleSwell
    );

    // 1.0² × 8 = 8 against 48: below 30 %
    let weak = SwellTrain::new(1.0, 8.0, "N");
    assert_eq!(
        analyze_swell_interaction(&primary, Some(&weak)),
        SwellInteraction::Neutral
    );

    let aligned = SwellTrain::new(1.8, 11.0, "N");
    assert_eq!(
        analyze_swell_interaction(&primary, Some(&aligned)),
        SwellInteraction::Constructive
    );

    let opposed = SwellTrain::new(1.8, 11.0, "S");
    assert_eq!(
        analyze_swell_interaction(&primary, Some(&opposed)),
        SwellInteraction::Destructive
    );
}

/// Missing any secondary field counts as a single swell.
#[test]
fn partial_secondary_swell_is_single_swell() {
    let primary = SwellTrain::new(2.0, 12.0, "W");
    let partial = SwellTrain::from_parts(Some(1.5), Some(10.0), None);
    assert_eq!(
        analyze_swell_interaction(&primary, partial.as_ref()),
        SwellInteraction::SingleSwell
    );
}

/// Equal energy splits evenly.
#[test]
fn equal_swells_split_dominance_evenly() {
    let split = calculate_swell_dominance(2.0, 10.0, Some((2.0, 10.0)));
    assert_eq!(split.primary, 50.0);
    assert_eq!(split.secondary, 50.0);
}

/// Independent rounding: each side is checked on its own.
///
/// Energies 1 and 2 split 33.3 / 66.7, which round to 33 and 67.
#[test]
fn dominance_sides_are_rounded_independently() {
    let split = calculate_swell_dominance(1.0, 1.0, Some((1.0, 2.0)));
    assert_eq!(split.primary, 33.0);
    assert_eq!(split.secondary, 67.0);
}

/// Bigger, longer swell scores at least as well.
#[test]
fn wave_score_orders_typical_days() {
    let flat = calculate_wave_score(0.3, 6.0);
    let fun = calculate_wave_score(1.2, 10.0);
    let pumping = calculate_wave_score(3.0, 15.0);

    assert!(flat <= fun, "flat {} should not beat fun {}", flat, fun);
    assert!(fun <= pumping, "fun {} should not beat pumping {}", fun, pumping);
    assert_eq!(pumping, 7.0, "126 energy (+3) and excellent swell (+3)");
}

/// Energy stays the plain height² × period product.
#[test]
fn wave_energy_matches_formula() {
    for (height, period) in [(0.5, 6.0), (1.25, 9.0), (2.7, 13.5), (6.0, 18.0)] {
        assert_eq!(
            calculate_wave_energy(height, period),
            (height * height * period).round()
        );
    }
}

/// Identical inputs give identical output on repeated calls.
#[test]
fn surf_score_is_deterministic() {
    let first = calculate_surf_score(1.6, 11.0, 14.0, "NW", Some(1.1));
    for _ in 0..100 {
        assert_eq!(calculate_surf_score(1.6, 11.0, 14.0, "NW", Some(1.1)), first);
    }
}
