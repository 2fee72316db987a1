//! Application error type.
//!
//! Exit codes:
//! - `2`: invalid argument, configuration or user-supplied path
//! - `3`: insufficient data
//! - `4`: computation or internal failure

const EXIT_INVALID_ARGUMENT: u8 = 2;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Shorthand for an InvalidArgument failure (exit code 2).
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_ARGUMENT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.exit_code == EXIT_INVALID_ARGUMENT
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_exit_code_two() {
        let err = AppError::invalid_argument("input sizes must be positive");
        assert_eq!(err.exit_code(), 2);
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "input sizes must be positive");
    }

    #[test]
    fn other_codes_are_not_invalid_argument() {
        let err = AppError::new(4, "boom");
        assert!(!err.is_invalid_argument());
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn error_is_std_error_and_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<AppError>();
    }
}
