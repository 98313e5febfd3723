/// Inundation depth → recommended safe evacuation floor.
///
/// Simple model: a story is `DEFAULT_FLOOR_HEIGHT_M` meters tall; every
/// story reached by the estimated inundation is "flooded"; the
/// recommendation is one floor above the highest flooded floor plus an
/// extra safety margin, never below the ground floor.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Vertical height of one building story, meters.
pub const DEFAULT_FLOOR_HEIGHT_M: f64 = 3.0;

/// Additional floors of safety margin above the first dry floor.
pub const DEFAULT_EXTRA_SAFETY_FLOORS: u32 = 1;

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Recommends the lowest safe evacuation floor for an inundation estimate.
///
/// Invalid (NaN) or non-positive inundation recommends floor 1: with no
/// flooding to escape, the ground floor is habitable. Otherwise:
///
///   flooded_floors = ceil(inundation / floor_height)
///   recommended    = max(1, flooded_floors + 1 + extra_safety_floors)
///
/// A non-finite or non-positive `floor_height_m` falls back to the default
/// story height rather than poisoning the arithmetic; the result is always
/// at least 1.
pub fn recommend_safe_floor(
    inundation_m: f64,
    floor_height_m: f64,
    extra_safety_floors: u32,
) -> u32 {
    if inundation_m.is_nan() || inundation_m <= 0.0 {
        return 1;
    }
    let floor_height = if floor_height_m.is_finite() && floor_height_m > 0.0 {
        floor_height_m
    } else {
        DEFAULT_FLOOR_HEIGHT_M
    };
    // Infinite or absurdly large inundation saturates: the float-to-int
    // cast clamps to u32::MAX, and the additions must not wrap past it —
    // wrapping would recommend the ground floor for unbounded flooding.
    let flooded_floors = (inundation_m / floor_height).ceil() as u32;
    flooded_floors
        .saturating_add(1)
        .saturating_add(extra_safety_floors)
        .max(1)
}

/// `recommend_safe_floor` with the default story height and safety margin.
pub fn recommend_safe_floor_default(inundation_m: f64) -> u32 {
    recommend_safe_floor(inundation_m, DEFAULT_FLOOR_HEIGHT_M, DEFAULT_EXTRA_SAFETY_FLOORS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
