//! Engine configuration errors.

/// Errors raised while turning driver-supplied selectors into engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The algorithm selector is not recognized.
    #[error("unknown search algorithm: {value}")]
    UnknownAlgorithm {
        /// The selector that failed to parse.
        value: String,
    },

    /// The game mode selector is not recognized.
    #[error("unknown game mode: {value}")]
    UnknownGameMode {
        /// The selector that failed to parse.
        value: String,
    },

    /// The side selector is not recognized for an AI-versus-AI game.
    #[error("unknown side selector: {value}")]
    UnknownSide {
        /// The selector that failed to parse.
        value: String,
    },
}
