/// Core data types for the tsunami hazard evaluation service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O and no external dependencies — only types and the
/// small display helpers that belong with them.

// ---------------------------------------------------------------------------
// Alert levels
// ---------------------------------------------------------------------------

/// Tsunami alert severity levels, in ascending order of severity.
///
/// Derived deterministically from a wave height by
/// `hazard::levels::classify_alert_level`; never stored independently —
/// always recomputed from the latest height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertLevel {
    Safe,
    Caution,
    Warning,
    Critical,
}

impl AlertLevel {
    /// The Korean risk label used by the prediction backend
    /// (`risk_level` field of a prediction record) and by the client UI.
    pub fn label_ko(&self) -> &'static str {
        match self {
            AlertLevel::Safe => "안전",
            AlertLevel::Caution => "주의",
            AlertLevel::Warning => "위험",
            AlertLevel::Critical => "긴급",
        }
    }

    /// Parses a backend Korean risk label. Returns `None` for anything
    /// that is not one of the four known labels.
    pub fn from_korean_label(label: &str) -> Option<AlertLevel> {
        match label {
            "안전" => Some(AlertLevel::Safe),
            "주의" => Some(AlertLevel::Caution),
            "위험" => Some(AlertLevel::Warning),
            "긴급" => Some(AlertLevel::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Safe => write!(f, "safe"),
            AlertLevel::Caution => write!(f, "caution"),
            AlertLevel::Warning => write!(f, "warning"),
            AlertLevel::Critical => write!(f, "critical"),
        }
    }
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Formats a floor count as the UI's floor label, e.g. `3` → `"3층"`.
///
/// The client renders recommended floors with the Korean floor-unit suffix;
/// keeping the format next to the domain types means the registry and the
/// ingest layer agree on it.
pub fn format_floor_label(floors: u32) -> String {
    format!("{}층", floors)
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing prediction backend data.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// The request never completed (connection refused, timeout, DNS).
    RequestFailed(String),
    /// Non-2xx HTTP response from the backend.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The request succeeded but carried no usable record.
    NoDataAvailable(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ApiError::HttpError(code) => write!(f, "HTTP error: {}", code),
            ApiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ApiError::NoDataAvailable(what) => write!(f, "No data available: {}", what),
        }
    }
}

impl std::error::Error for ApiError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
