use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot already reserved: {0}")]
    Conflict(String),

    #[error("Booking blocked by policy: {0}")]
    PolicyBlocked(String),

    #[error("PIN mismatch")]
    PinMismatch,

    #[error("Authorization error: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
