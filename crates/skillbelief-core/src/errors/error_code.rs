//! BeliefErrorCode trait for host-application boundaries.

/// Stable machine-readable codes for skillbelief errors.
/// Every error enum implements this so callers across a language or
/// process boundary can match on the code instead of the message.
pub trait BeliefErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
