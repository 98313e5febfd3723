/// Evacuation shelter registry for the Busan coastal service area.
///
/// Defines the canonical list of vertical-evacuation shelters the client
/// can direct users to, along with their metadata. This is the single
/// source of truth for shelter ids — other modules should reference
/// shelters from here rather than hardcoding building data.
///
/// The `nearest-safe` backend endpoint can override these with a live
/// query; the registry is the offline fallback and the seed data shown
/// before a location fix is available.

use crate::model::format_floor_label;

// ---------------------------------------------------------------------------
// Shelter metadata
// ---------------------------------------------------------------------------

/// Metadata for a single evacuation shelter building.
pub struct Shelter {
    /// Registry id, matching the backend building id.
    pub id: &'static str,
    /// Official building name.
    pub building_name: &'static str,
    /// Road-name address.
    pub road_address: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Above-ground stories. High-rises are strongly preferred for
    /// vertical evacuation.
    pub above_ground_floors: u32,
    /// Whether seismic design is on record for the building.
    pub seismic_design_applied: bool,
}

impl Shelter {
    /// The lowest floor considered safe at a given inundation estimate,
    /// formatted for display (e.g. "4층").
    pub fn safe_floor_label(&self, inundation_m: f64) -> String {
        format_floor_label(crate::hazard::recommend_safe_floor_default(inundation_m))
    }
}

/// All registered shelters, ordered by preference: the primary Marine City
/// high-rise first, then alternates fanning out along the shoreline.
///
/// Sources: Korean building registry (건축물대장) entries mirrored by the
/// backend's building database.
pub static SHELTER_REGISTRY: &[Shelter] = &[
    Shelter {
        id: "2769",
        building_name: "해운대두산위브더제니스아파트",
        road_address: "부산광역시 해운대구 마린시티2로 33",
        latitude: 35.1566275,
        longitude: 129.1450724,
        above_ground_floors: 80,
        seismic_design_applied: true,
    },
    Shelter {
        id: "2771",
        building_name: "해운대아이파크",
        road_address: "부산광역시 해운대구 마린시티3로 37",
        latitude: 35.1585570,
        longitude: 129.1429330,
        above_ground_floors: 72,
        seismic_design_applied: true,
    },
    Shelter {
        id: "2810",
        building_name: "엘시티 더샵",
        road_address: "부산광역시 해운대구 달맞이길 30",
        latitude: 35.1610920,
        longitude: 129.1685030,
        above_ground_floors: 85,
        seismic_design_applied: true,
    },
    Shelter {
        id: "2833",
        building_name: "센텀 리더스마크",
        road_address: "부산광역시 해운대구 센텀서로 30",
        latitude: 35.1686440,
        longitude: 129.1301870,
        above_ground_floors: 54,
        seismic_design_applied: true,
    },
];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Returns the ids of all registered shelters.
pub fn all_shelter_ids() -> Vec<&'static str> {
    SHELTER_REGISTRY.iter().map(|s| s.id).collect()
}

/// Looks up a shelter by registry id. Returns `None` if not found.
pub fn find_shelter(id: &str) -> Option<&'static Shelter> {
    SHELTER_REGISTRY.iter().find(|s| s.id == id)
}

/// Returns the registered shelter nearest to a WGS84 coordinate.
///
/// Distances use an equirectangular approximation — the service area is a
/// few kilometers of coastline, where the error against great-circle
/// distance is negligible. Returns `None` only if the registry is empty.
pub fn nearest_shelter(latitude: f64, longitude: f64) -> Option<&'static Shelter> {
    SHELTER_REGISTRY.iter().min_by(|a, b| {
        let da = approx_distance_sq(latitude, longitude, a.latitude, a.longitude);
        let db = approx_distance_sq(latitude, longitude, b.latitude, b.longitude);
        da.total_cmp(&db)
    })
}

/// Squared equirectangular distance in degrees², longitude scaled by
/// cos(latitude). Only used for ordering, so no square root or Earth
/// radius is applied.
fn approx_distance_sq(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let mean_lat = ((lat1 + lat2) / 2.0).to_radians();
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1) * mean_lat.cos();
    dlat * dlat + dlon * dlon
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
