/// Service configuration loaded from a TOML file.
///
/// Every field is optional; a missing file or missing key falls back to
/// the compiled-in defaults, so the service always starts. Example
/// `tsumon.toml`:
///
/// ```toml
/// runup_multiplier = 3.5
/// floor_height_m = 3.0
/// extra_safety_floors = 1
/// api_base_url = "https://tsumon.example.org"
/// ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::hazard::floors::{DEFAULT_EXTRA_SAFETY_FLOORS, DEFAULT_FLOOR_HEIGHT_M};
use crate::hazard::runup::RUNUP_MULTIPLIER_DEFAULT;
use crate::logging::{self, DataSource};

/// Default prediction backend, reached through the client's reverse proxy.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

// ---------------------------------------------------------------------------
// Configuration model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct HazardConfig {
    /// Run-up multiplier applied at startup. Clamped to [2, 4] like any
    /// other setter input.
    #[serde(default = "default_runup_multiplier")]
    pub runup_multiplier: f64,

    /// Story height used for safe-floor recommendations, meters.
    #[serde(default = "default_floor_height_m")]
    pub floor_height_m: f64,

    /// Extra safety-margin floors above the first dry floor.
    #[serde(default = "default_extra_safety_floors")]
    pub extra_safety_floors: u32,

    /// Base URL of the prediction backend.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_runup_multiplier() -> f64 {
    RUNUP_MULTIPLIER_DEFAULT
}

fn default_floor_height_m() -> f64 {
    DEFAULT_FLOOR_HEIGHT_M
}

fn default_extra_safety_floors() -> u32 {
    DEFAULT_EXTRA_SAFETY_FLOORS
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for HazardConfig {
    fn default() -> Self {
        HazardConfig {
            runup_multiplier: default_runup_multiplier(),
            floor_height_m: default_floor_height_m(),
            extra_safety_floors: default_extra_safety_floors(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl HazardConfig {
    /// Pushes this configuration into the process-wide hazard state.
    ///
    /// Currently only the run-up multiplier is process-wide; out-of-range
    /// values clamp per the setter contract. Floor parameters are passed
    /// per call by whoever owns the config.
    pub fn apply(&self) {
        crate::hazard::set_runup_multiplier(self.runup_multiplier);
        logging::info(
            DataSource::Config,
            None,
            &format!(
                "applied config: multiplier={} floor_height={}m margin={} api={}",
                crate::hazard::runup_multiplier(),
                self.floor_height_m,
                self.extra_safety_floors,
                self.api_base_url
            ),
        );
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The file is not valid TOML for `HazardConfig`.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config read error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads configuration from a TOML file.
///
/// Returns an error if the file is unreadable or malformed; callers that
/// can run on defaults should fall back to `HazardConfig::default()` and
/// log the failure rather than abort.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HazardConfig, ConfigError> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
    toml::from_str(&text)
        .map_err(|e| ConfigError::Parse(format!("{}: {}", path.as_ref().display(), e)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: HazardConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.runup_multiplier, 3.0);
        assert_eq!(cfg.floor_height_m, 3.0);
        assert_eq!(cfg.extra_safety_floors, 1);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg: HazardConfig = toml::from_str("runup_multiplier = 2.5")
            .expect("partial config should parse");
        assert_eq!(cfg.runup_multiplier, 2.5);
        assert_eq!(cfg.floor_height_m, 3.0, "unspecified keys keep defaults");
    }

    #[test]
    fn test_full_toml_parses() {
        let text = r#"
            runup_multiplier = 3.5
            floor_height_m = 2.8
            extra_safety_floors = 2
            api_base_url = "https://tsumon.example.org"
        "#;
        let cfg: HazardConfig = toml::from_str(text).expect("full config should parse");
        assert_eq!(cfg.runup_multiplier, 3.5);
        assert_eq!(cfg.floor_height_m, 2.8);
        assert_eq!(cfg.extra_safety_floors, 2);
        assert_eq!(cfg.api_base_url, "https://tsumon.example.org");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        match load_config("/nonexistent/tsumon.toml") {
            Err(ConfigError::Io(_)) => {}
            other => panic!("expected Io error for a missing file, got {:?}", other),
        }
        let bad: Result<HazardConfig, _> = toml::from_str("runup_multiplier = \"three\"");
        assert!(bad.is_err(), "wrong value type should fail to parse");
    }

    #[test]
    fn test_apply_pushes_clamped_multiplier_into_process_state() {
        use crate::hazard::runup::MULTIPLIER_TEST_LOCK;
        let _guard = MULTIPLIER_TEST_LOCK.lock().unwrap();

        let cfg = HazardConfig {
            runup_multiplier: 9.0,
            ..HazardConfig::default()
        };
        cfg.apply();
        assert_eq!(
            crate::hazard::runup_multiplier(),
            4.0,
            "out-of-range config values clamp per the setter contract"
        );

        let cfg = HazardConfig {
            runup_multiplier: 2.5,
            ..HazardConfig::default()
        };
        cfg.apply();
        assert_eq!(crate::hazard::runup_multiplier(), 2.5);

        crate::hazard::set_runup_multiplier(RUNUP_MULTIPLIER_DEFAULT);
    }
}
