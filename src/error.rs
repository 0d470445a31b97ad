use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by configuration, the worker boundary, and the CLI.
///
/// The physics engine itself has no failure modes; escape and absorption are
/// normal terminations, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings rejected at the consumer boundary.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Layered configuration could not be built or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration could not be written back as TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Protocol message could not be encoded.
    #[error("failed to encode message: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine thread is gone.
    #[error("simulation worker disconnected")]
    WorkerDisconnected,

    #[error("simulation worker panicked")]
    WorkerPanicked,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidSettings("energy must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid settings"));
        assert!(msg.contains("energy"));
    }

    #[test]
    fn worker_disconnect_message() {
        assert_eq!(
            Error::WorkerDisconnected.to_string(),
            "simulation worker disconnected"
        );
    }
}
