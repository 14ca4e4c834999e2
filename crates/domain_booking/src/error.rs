//! Booking domain errors

use thiserror::Error;

use core_kernel::RoomId;

use crate::quote::NotQuotable;
use crate::validation::ValidationReport;

/// Errors that can occur in the booking domain
#[derive(Debug, Error)]
pub enum BookingError {
    /// A pricing policy violated one of its construction invariants
    #[error("Invalid pricing policy: {0}")]
    InvalidPolicy(String),

    /// No pricing policy could be resolved for the selected room
    #[error("No pricing policy for room {0}")]
    PolicyMissing(RoomId),

    /// The stay cannot be priced
    #[error("Stay cannot be quoted: {0}")]
    NotQuotable(#[from] NotQuotable),

    /// The booking form failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),
}

impl BookingError {
    /// Creates an invalid policy error
    pub fn invalid_policy(message: impl Into<String>) -> Self {
        BookingError::InvalidPolicy(message.into())
    }

    /// Creates a policy missing error
    pub fn policy_missing(room_id: impl Into<RoomId>) -> Self {
        BookingError::PolicyMissing(room_id.into())
    }
}
