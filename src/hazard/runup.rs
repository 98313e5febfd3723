/// Run-up multiplier configuration cell and the inundation estimator.
///
/// Open-water wave height understates the flood depth that actually reaches
/// structures: run-up over shoaling bathymetry amplifies it. The service
/// uses a single heuristic scaling factor, bounded to the physically
/// plausible range [2, 4] with a default of 3.
///
/// The multiplier is the one piece of mutable process-wide state in the
/// hazard core. It is stored as an `AtomicU64` holding `f64` bits with
/// `SeqCst` ordering, so a setter's effect is visible to every subsequent
/// read without locking; there is no concurrent-writer scenario in the
/// product, but a debug console or config reload may call the setter from
/// another thread.

use std::sync::atomic::{AtomicU64, Ordering};

// ---------------------------------------------------------------------------
// Multiplier bounds
// ---------------------------------------------------------------------------

/// Lower bound of the run-up multiplier.
pub const RUNUP_MULTIPLIER_MIN: f64 = 2.0;

/// Upper bound of the run-up multiplier.
pub const RUNUP_MULTIPLIER_MAX: f64 = 4.0;

/// Default run-up multiplier, applied at process start.
pub const RUNUP_MULTIPLIER_DEFAULT: f64 = 3.0;

// f64 bits of RUNUP_MULTIPLIER_DEFAULT (3.0). Atomics cannot be
// initialized from `f64::to_bits` in a const context on stable, so the
// literal is spelled out; the test below keeps it honest.
static RUNUP_MULTIPLIER: AtomicU64 = AtomicU64::new(0x4008_0000_0000_0000);

/// Unit tests that mutate the process-wide multiplier take this lock so
/// they don't observe each other's writes under the parallel test runner.
/// Shared with the config tests, which also drive the setter.
#[cfg(test)]
pub(crate) static MULTIPLIER_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

/// Returns the current run-up multiplier. Always in [2, 4].
pub fn runup_multiplier() -> f64 {
    f64::from_bits(RUNUP_MULTIPLIER.load(Ordering::SeqCst))
}

/// Updates the process-wide run-up multiplier.
///
/// Finite input is clamped to [2, 4] and stored. Non-finite input (NaN,
/// ±∞) is ignored and the prior value retained: a misconfigured caller
/// must not be able to break inundation estimates mid-event. Rejected
/// input is logged as a warning rather than surfaced as an error.
pub fn set_runup_multiplier(value: f64) {
    if !value.is_finite() {
        crate::logging::warn(
            crate::logging::DataSource::Config,
            None,
            &format!("ignoring non-finite run-up multiplier: {}", value),
        );
        return;
    }
    let clamped = value.clamp(RUNUP_MULTIPLIER_MIN, RUNUP_MULTIPLIER_MAX);
    RUNUP_MULTIPLIER.store(clamped.to_bits(), Ordering::SeqCst);
}

// ---------------------------------------------------------------------------
// Inundation estimation
// ---------------------------------------------------------------------------

/// Estimates inundation depth (meters) from a wave height (meters) using
/// the current run-up multiplier.
///
/// Returns 0 for NaN or non-positive heights; otherwise
/// `height * multiplier` rounded to two decimals. The multiplier is read
/// at call time, so a setter call changes every subsequent estimate
/// immediately.
pub fn estimate_inundation(height_m: f64) -> f64 {
    estimate_inundation_with(height_m, runup_multiplier())
}

/// Pure variant of `estimate_inundation` with an explicit multiplier.
/// `estimate_inundation` delegates here; tests use this form to avoid
/// touching the process-wide cell.
pub fn estimate_inundation_with(height_m: f64, multiplier: f64) -> f64 {
    if height_m.is_nan() || height_m <= 0.0 {
        return 0.0;
    }
    round_to_2(height_m * multiplier)
}

/// Rounds to two decimals, half away from zero.
///
/// Display fixtures are pinned to exactly this scheme (multiply by 100,
/// round to nearest integer, divide by 100); `f64::round` rounds half
/// away from zero, matching them bit-for-bit.
fn round_to_2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
