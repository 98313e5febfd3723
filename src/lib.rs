/// Tsunami hazard evaluation service core.
///
/// Turns a tsunami wave height (meters) into a displayable hazard
/// assessment: a discrete alert level, a heuristic inundation estimate,
/// and a recommended safe evacuation floor. Also provides the thin
/// ingestion layer that supplies wave heights in production (prediction
/// backend API, push-notification payloads) and a static registry of
/// evacuation shelters.
///
/// Rendering, map display, and notification delivery live in the mobile
/// web client; this crate only computes what that client shows.

pub mod config;
pub mod dev_mode;
pub mod hazard;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod shelters;
