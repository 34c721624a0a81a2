use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while handling timer settings.
pub enum SettingsError {
    /// A duration was outside the accepted range of minutes.
    #[error("{name} must be between {min} and {max} minutes, found {found}.")]
    OutOfRange {
        /// The name of the offending setting.
        name:  &'static str,
        /// The rejected value.
        found: u32,
        /// Smallest accepted value.
        min:   u32,
        /// Largest accepted value.
        max:   u32,
    },
    /// The stored blob could not be decoded or encoded.
    #[error("Settings in '{location}' are malformed: {source}")]
    Malformed {
        /// Where the blob lives.
        location: String,
        /// The underlying decoding error.
        source:   serde_json::Error,
    },
    /// The backing file could not be read or written.
    #[error("Could not access settings file '{location}': {source}")]
    Io {
        /// Path of the settings file.
        location: String,
        /// The underlying I/O error.
        source:   std::io::Error,
    },
}
