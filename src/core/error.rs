use thiserror::Error;

/// Errors surfaced by configuration and startup.
///
/// Per-frame work never produces one of these: stale bodies are skipped and
/// input before startup is ignored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("physics engine failed to load: {0}")]
    LoadFailed(String),

    #[error("engine already booted")]
    AlreadyBooted,

    #[error("engine is not ready")]
    NotReady,
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidConfig(e.to_string())
    }
}
