/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating or coercing loosely-typed input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// A numeric-like input could not be coerced to the required number type.
    #[error("invalid argument: cannot convert {value} to {expected}")]
    InvalidArgument {
        /// The offending input, rendered for diagnostics.
        value: String,
        /// The number type that was required.
        expected: &'static str,
    },

    /// An input was not of the structurally required kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind that was required.
        expected: &'static str,
        /// The kind that was supplied.
        found: &'static str,
    },
}

impl CoreError {
    pub(crate) fn invalid(value: impl ToString, expected: &'static str) -> Self {
        Self::InvalidArgument {
            value: value.to_string(),
            expected,
        }
    }
}
