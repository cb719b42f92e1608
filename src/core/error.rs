//! Errors raised by the check registry and the checks it dispatches to

use thiserror::Error;

use super::ports::SceneError;

/// Errors that can occur while resolving or running a check
#[derive(Debug, Error)]
pub enum CheckError {
    /// No check is registered under this name
    #[error("unknown check: {0}")]
    UnknownCheck(String),

    /// A check with this name is already registered
    #[error("check already registered: {0}")]
    DuplicateCheck(String),

    /// The option is not part of the check's schema
    #[error("check '{check}' has no option named '{option}'")]
    UnknownOption {
        /// Check name
        check: String,
        /// Offending option name
        option: String,
    },

    /// The option value has the wrong type or is out of range
    #[error("invalid value for option '{option}' of check '{check}': {reason}")]
    InvalidOption {
        /// Check name
        check: String,
        /// Offending option name
        option: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The scene could not answer a query for an object
    #[error(transparent)]
    Scene(#[from] SceneError),
}
