use thiserror::Error;

/// Errors raised by checked ship operations
#[derive(Debug, Error)]
pub enum ShipError {
    /// Distance was below zero
    #[error("Invalid distance: {0} km(s) is negative")]
    NegativeDistance(i32),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using ShipError
pub type ShipResult<T> = Result<T, ShipError>;
