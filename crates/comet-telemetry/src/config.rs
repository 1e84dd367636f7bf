use serde::{Deserialize, Serialize};

/// Telemetry configuration.
///
/// Recording honors the user's telemetry opt-out: a disabled recorder still
/// validates its inputs but emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub enabled: bool,
}

impl TelemetryConfig {
    /// A configuration with telemetry opted out.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
