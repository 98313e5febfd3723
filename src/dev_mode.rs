/// Development mode utilities for working without the backend.
///
/// When the prediction API is unreachable, use this module to replay a
/// scripted sequence of wave heights for testing and development. The
/// client boots against the same simulated feed before its first live
/// update arrives.

use crate::hazard;
use crate::model::AlertLevel;

/// Wave height the simulated feed starts from, meters. Matches the
/// client's boot state: a Warning-level event worth exercising the whole
/// UI with.
pub const BOOT_WAVE_HEIGHT_M: f64 = 1.2;

/// A scripted, repeating feed of wave heights.
///
/// Deterministic and free of I/O; each call to `next_height` advances
/// through the script and wraps around at the end.
pub struct SimulatedFeed {
    script: Vec<f64>,
    position: usize,
}

impl SimulatedFeed {
    /// A feed that walks an event from calm through Critical and back,
    /// crossing every alert threshold on the way.
    pub fn event_cycle() -> Self {
        SimulatedFeed {
            script: vec![0.0, 0.3, 0.5, 0.8, BOOT_WAVE_HEIGHT_M, 1.5, 2.4, 1.0, 0.2],
            position: 0,
        }
    }

    /// A feed pinned to a single height.
    pub fn constant(height_m: f64) -> Self {
        SimulatedFeed {
            script: vec![height_m],
            position: 0,
        }
    }

    /// Returns the next scripted wave height, wrapping at the end.
    pub fn next_height(&mut self) -> f64 {
        let height = self.script[self.position];
        self.position = (self.position + 1) % self.script.len();
        height
    }

    /// Convenience: next height already classified, for exercising the
    /// four alert-card variants in order.
    pub fn next_classified(&mut self) -> (f64, AlertLevel) {
        let height = self.next_height();
        (height, hazard::classify_alert_level(height))
    }
}
