//! Error types

use thiserror::Error;

/// Failure reported by an update callback.
///
/// The manager reports these (one `warn!` per failing callback per tick)
/// and keeps going; a faulty animation never aborts the tick for the rest.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct UpdateError(#[from] Box<dyn std::error::Error + Send + Sync + 'static>);

impl UpdateError {
    /// Ad-hoc error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_roundtrip() {
        let error = UpdateError::msg("window backend went away");
        assert_eq!(error.to_string(), "window backend went away");
    }

    #[test]
    fn test_wraps_source_errors() {
        let io = std::io::Error::other("denied");
        let error = UpdateError::from(Box::from(io));
        assert!(error.to_string().contains("denied"));
    }
}
