//! # Wave Energy
//!
//! A `height² × period` proxy for swell power. It is not a physical energy in
//! joules, but it ranks swells the way surfers feel them: a long-period swell
//! carries far more punch than a short wind chop of the same height.
//!
//! The proxy drives wave scoring, energy labels and the two-swell dominance
//! split, so it lives in its own module.

/// Wave energy proxy, rounded to the nearest integer.
///
/// Monotonically increasing in both inputs for non-negative values. No upper
/// bound is enforced.
///
/// # Example
/// ```
/// use surf_metrics_lib::energy::calculate_wave_energy;
///
/// assert_eq!(calculate_wave_energy(2.0, 10.0), 40.0);
/// assert_eq!(calculate_wave_energy(1.5, 12.0), 27.0);
/// ```
pub fn calculate_wave_energy(height: f64, period: f64) -> f64 {
    (height * height * period).round()
}

/// Human-readable label for an energy value.
///
/// Thresholds are strict (`> 500`, `> 300`, `> 150`, `> 50`): exactly 500 is
/// "Powerful", anything above is "Massive". The listed ladder uses `>` while
/// the swell brackets are inclusive at their lower bound; the ladder wins.
pub fn interpret_energy_level(energy: f64) -> &'static str {
    if energy > 500.0 {
        "Massive - Expert only"
    } else if energy > 300.0 {
        "Powerful"
    } else if energy > 150.0 {
        "Solid"
    } else if energy > 50.0 {
        "Moderate"
    } else {
        "Small"
    }
}
