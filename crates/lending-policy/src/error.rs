/// Failure raised by lending policy operations before any computation takes place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// Caller passed a value violating a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Caller referenced a category or tier that the configured tables do not know.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PolicyError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Reports a configuration miss as a bad argument, keeping the message.
    pub fn into_invalid_argument(self) -> Self {
        match self {
            PolicyError::Config(message) => PolicyError::InvalidArgument(message),
            invalid => invalid,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PolicyError::InvalidArgument(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, PolicyError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_become_invalid_arguments_with_same_message() {
        let converted = PolicyError::config("no quantity ceiling configured for premium")
            .into_invalid_argument();

        assert_eq!(
            converted,
            PolicyError::InvalidArgument("no quantity ceiling configured for premium".to_string())
        );
    }

    #[test]
    fn invalid_arguments_pass_through_unchanged() {
        let original = PolicyError::invalid("renewal days must be positive");

        assert_eq!(original.clone().into_invalid_argument(), original);
    }
}
