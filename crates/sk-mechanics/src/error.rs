//! Error types for the mechanics engine.

use sk_core::CoreError;

/// Errors that can occur during mechanics operations.
///
/// Every operation validates before it mutates, so an `Err` always means
/// the receiver is unchanged.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A numeric-like input could not be coerced to the required number type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An input was not of the structurally required kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind that was required.
        expected: &'static str,
        /// The kind that was supplied.
        found: &'static str,
    },

    /// The operation's preconditions on current state do not hold.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A health-changing operation was attempted on a dead unit.
    #[error("unit '{0}' is dead")]
    UnitIsDead(String),

    /// The mechanics configuration is malformed.
    #[error("invalid mechanics config: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for MechError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument { value, expected } => {
                Self::InvalidArgument(format!("cannot convert {value} to {expected}"))
            }
            CoreError::TypeMismatch { expected, found } => Self::TypeMismatch { expected, found },
        }
    }
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
