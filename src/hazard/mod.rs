/// Hazard classification and recommendation for the tsunami service.
///
/// Pure computation: wave height → alert level, wave height → inundation
/// estimate, inundation → recommended safe floor. The only mutable state
/// is the process-wide run-up multiplier in `runup`.
///
/// Submodules:
/// - `levels` — wave height → alert level threshold classification.
/// - `runup` — run-up multiplier cell and the inundation estimator.
/// - `floors` — inundation → recommended safe evacuation floor.

pub mod floors;
pub mod levels;
pub mod runup;

pub use floors::{recommend_safe_floor, recommend_safe_floor_default};
pub use levels::classify_alert_level;
pub use runup::{estimate_inundation, estimate_inundation_with, runup_multiplier, set_runup_multiplier};
