/// Application-wide Result type
pub type Result<T> = std::result::Result<T, BillingError>;

/// Main billing error type
///
/// The calculator has no I/O, so every failure is a synchronous validation
/// error raised before any computation proceeds. The caller decides how to
/// surface it; there is nothing to retry.
#[derive(thiserror::Error, Debug)]
pub enum BillingError {
    /// A precondition on calculator input failed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl BillingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        BillingError::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        BillingError::Configuration(msg.into())
    }
}
