/// Push-notification payload decoding.
///
/// The messaging service delivers alert pushes with a display
/// `notification` block and a `data` block of string key/value pairs.
/// Only the data block matters here: it carries the wave height that
/// drives the hazard core. Example payload:
///
/// ```json
/// {
///   "notification": { "title": "재난 알림", "body": "지진해일 주의" },
///   "data": { "wave_height_m": "1.2" }
/// }
/// ```
///
/// Messaging SDKs stringify data values, so `wave_height_m` usually
/// arrives as a string; a raw JSON number is accepted too. Anything
/// malformed decodes to `None` — a broken push must never crash the
/// client or raise the alert level.

use serde_json::Value;

use crate::logging::{self, DataSource};

/// Key of the wave height entry in the payload's data block.
pub const WAVE_HEIGHT_KEY: &str = "wave_height_m";

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Extracts the wave height from a raw push payload.
///
/// Returns `None` if the payload is not JSON, has no data block, lacks the
/// key, or carries a value that is not a finite number. Rejected payloads
/// are logged at warning level with the reason.
pub fn decode_wave_height(payload_json: &str) -> Option<f64> {
    let payload: Value = match serde_json::from_str(payload_json) {
        Ok(v) => v,
        Err(e) => {
            logging::warn(
                DataSource::Push,
                None,
                &format!("payload is not valid JSON: {}", e),
            );
            return None;
        }
    };

    let raw = match payload.get("data").and_then(|d| d.get(WAVE_HEIGHT_KEY)) {
        Some(v) => v,
        None => {
            logging::debug(
                DataSource::Push,
                None,
                "payload has no wave height — display-only notification",
            );
            return None;
        }
    };

    let height = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    match height {
        Some(h) if h.is_finite() => Some(h),
        _ => {
            logging::warn(
                DataSource::Push,
                None,
                &format!("unusable wave height in payload: {}", raw),
            );
            None
        }
    }
}

/// Extracts the notification title and body for local display, when
/// present. Purely informational; absence is normal for data-only pushes.
pub fn decode_notification_text(payload_json: &str) -> Option<(String, String)> {
    let payload: Value = serde_json::from_str(payload_json).ok()?;
    let notification = payload.get("notification")?;
    let title = notification.get("title")?.as_str()?.to_string();
    let body = notification.get("body")?.as_str()?.to_string();
    Some((title, body))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
