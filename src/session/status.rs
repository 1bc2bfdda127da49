use serde::Serialize;
use std::fmt;

/// Lifecycle state of a dictation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Open, not yet listening
    Idle,
    /// Actively capturing speech
    Listening,
    /// A listening run ended; may be restarted
    Stopped,
    /// Permanently unusable (no recognition capability on this host)
    Error,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Listening => "listening",
            SessionStatus::Stopped => "stopped",
            SessionStatus::Error => "error",
        };
        f.write_str(label)
    }
}
