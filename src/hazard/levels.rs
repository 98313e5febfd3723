/// Wave height → alert level threshold classification.
///
/// Thresholds come from the product's alerting policy, in meters of wave
/// height at the coast:
///
///   height ≤ 0.3          → Safe
///   0.3 < height ≤ 0.8    → Caution
///   0.8 < height < 1.5    → Warning
///   height ≥ 1.5          → Critical
///
/// The boundary directions matter: 0.3 and 0.8 belong to the lower tier,
/// 1.5 belongs to Critical. Tests below pin every edge.
///
/// NaN maps to Safe. Absence of data must never be silently promoted to a
/// higher alert; the client always gets a displayable level.

use crate::model::AlertLevel;

// ---------------------------------------------------------------------------
// Thresholds (meters)
// ---------------------------------------------------------------------------

/// Upper bound of the Safe tier (inclusive).
pub const SAFE_MAX_M: f64 = 0.3;

/// Upper bound of the Caution tier (inclusive).
pub const CAUTION_MAX_M: f64 = 0.8;

/// Lower bound of the Critical tier (inclusive).
pub const CRITICAL_MIN_M: f64 = 1.5;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies a wave height (meters) into an alert level.
///
/// Total function: never fails, never panics. NaN and any height at or
/// below `SAFE_MAX_M` (including negatives) classify as `Safe`.
pub fn classify_alert_level(height_m: f64) -> AlertLevel {
    if height_m.is_nan() {
        return AlertLevel::Safe;
    }
    if height_m <= SAFE_MAX_M {
        AlertLevel::Safe
    } else if height_m <= CAUTION_MAX_M {
        AlertLevel::Caution
    } else if height_m < CRITICAL_MIN_M {
        AlertLevel::Warning
    } else {
        AlertLevel::Critical
    }
}

/// Classifies an optional wave height; a missing reading is `Safe`.
///
/// Upstream sources (prediction API, push payloads) surface absent data as
/// `None`; this keeps the fail-safe mapping in one place.
pub fn classify_optional_height(height_m: Option<f64>) -> AlertLevel {
    match height_m {
        Some(h) => classify_alert_level(h),
        None => AlertLevel::Safe,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
