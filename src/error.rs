use alloc::string::String;
use alloc::string::ToString;

/// Message carried by [`Error::InvalidKey`] when none is supplied.
pub const INVALID_KEY: &str = "invalid key";

/// Errors reported by the containers in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested key is not present.
    #[error("key not found")]
    KeyNotFound,

    /// A strict removal was asked to remove a key that is not present.
    #[error("{0}")]
    InvalidKey(String),

    /// The key and value sequences handed to a constructor differ in length.
    #[error("the length of the received sequences is not equal (keys: {keys}, values: {values})")]
    LengthMismatch {
        /// Number of keys received.
        keys: usize,
        /// Number of values received.
        values: usize,
    },
}

impl Error {
    /// An [`Error::InvalidKey`] carrying the default message.
    pub fn invalid_key() -> Self {
        Error::InvalidKey(INVALID_KEY.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(format!("{}", Error::KeyNotFound), "key not found");
        assert_eq!(format!("{}", Error::invalid_key()), "invalid key");
        assert_eq!(
            format!("{}", Error::InvalidKey("no such word: foo".to_string())),
            "no such word: foo"
        );
        assert_eq!(
            format!("{}", Error::LengthMismatch { keys: 3, values: 2 }),
            "the length of the received sequences is not equal (keys: 3, values: 2)"
        );
    }

    #[test]
    fn invalid_key_is_distinct_from_key_not_found() {
        assert_ne!(Error::invalid_key(), Error::KeyNotFound);
    }
}
