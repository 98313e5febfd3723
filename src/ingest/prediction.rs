/// Prediction backend API client.
///
/// Retrieves the latest storm-surge/tsunami prediction record and
/// nearest-safe-building results from the service backend. Parsing is
/// split from transport so response handling can be tested offline
/// against captured fixtures.
///
/// Endpoints (relative to the configured base URL):
///   GET  /api/tsunami-predictions/latest
///   POST /api/nearest-safe   { "latitude": .., "longitude": .. }

use serde::{Deserialize, Serialize};

use crate::model::{AlertLevel, ApiError};

// ============================================================================
// Backend Response Structures
// ============================================================================

/// One row of the backend's prediction table.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRecord {
    pub id: i64,
    /// Korean risk label: "안전" | "주의" | "위험" | "긴급".
    pub risk_level: String,
    /// ISO 8601, absent when no arrival is forecast.
    pub predicted_arrival_time: Option<String>,
    pub predicted_flood_height_m: f64,
    pub predicted_wave_height_m: f64,
    pub created_at: String,
}

impl PredictionRecord {
    /// The backend's risk label parsed into an `AlertLevel`, if it is one
    /// of the four known labels.
    pub fn alert_level(&self) -> Option<AlertLevel> {
        AlertLevel::from_korean_label(&self.risk_level)
    }

    /// The wave height to feed the hazard core. Non-finite values from a
    /// misbehaving backend normalize to `None` so they classify as safe
    /// instead of poisoning downstream arithmetic.
    pub fn wave_height(&self) -> Option<f64> {
        if self.predicted_wave_height_m.is_finite() {
            Some(self.predicted_wave_height_m)
        } else {
            None
        }
    }
}

/// A candidate shelter building returned by the nearest-safe query.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingResult {
    pub id: i64,
    pub building_name: String,
    pub road_address: String,
    pub above_ground_floors: Option<u32>,
    pub height_m: Option<f64>,
    pub seismic_design_applied: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance_m: Option<f64>,
    pub safe_from_floor: Option<u32>,
}

/// Response envelope of the nearest-safe query.
#[derive(Debug, Clone, Deserialize)]
pub struct SafetyResponse {
    pub tsunami_height_m: f64,
    pub safety_margin_m: f64,
    pub required_height_m: f64,
    pub required_floors: u32,
    pub results: Vec<BuildingResult>,
}

#[derive(Debug, Serialize)]
struct NearestSafeRequest {
    latitude: f64,
    longitude: f64,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses the body of `/api/tsunami-predictions/latest`.
pub fn parse_prediction_response(body: &str) -> Result<PredictionRecord, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
}

/// Parses the body of `/api/nearest-safe`.
pub fn parse_safety_response(body: &str) -> Result<SafetyResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Fetches the latest prediction record from the backend.
///
/// Returns `NoDataAvailable` for an empty body (the backend responds with
/// nothing rather than 404 when no prediction has been generated yet).
pub fn fetch_latest_prediction(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<PredictionRecord, ApiError> {
    let url = format!("{}/api/tsunami-predictions/latest", base_url);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| ApiError::RequestFailed(format!("failed to read body: {}", e)))?;

    if body.trim().is_empty() || body.trim() == "null" {
        return Err(ApiError::NoDataAvailable("latest prediction".to_string()));
    }

    parse_prediction_response(&body)
}

/// Queries the backend for the nearest safe buildings to a coordinate.
pub fn fetch_nearest_safe_building(
    client: &reqwest::blocking::Client,
    base_url: &str,
    latitude: f64,
    longitude: f64,
) -> Result<SafetyResponse, ApiError> {
    let url = format!("{}/api/nearest-safe", base_url);
    let request = NearestSafeRequest {
        latitude,
        longitude,
    };

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| ApiError::RequestFailed(format!("failed to read body: {}", e)))?;

    let parsed = parse_safety_response(&body)?;
    if parsed.results.is_empty() {
        return Err(ApiError::NoDataAvailable("nearest safe building".to_string()));
    }
    Ok(parsed)
}

// ============================================================================
// Tests
// ============================================================================
