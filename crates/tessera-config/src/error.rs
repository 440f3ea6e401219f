//! Errors raised by the `config.ron` persistence layer.

/// Failure while loading or persisting `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read from disk.
    #[error("could not read config.ron: {0}")]
    Read(#[source] std::io::Error),

    /// `config.ron` or its parent directory could not be written.
    #[error("could not write config.ron: {0}")]
    Write(#[source] std::io::Error),

    /// `config.ron` is not valid RON for the tessellation config schema.
    #[error("config.ron is malformed: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory config could not be rendered as RON text.
    #[error("could not render config as RON: {0}")]
    Serialize(#[source] ron::Error),
}
