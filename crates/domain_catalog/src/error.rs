//! Catalog domain errors

use thiserror::Error;

use core_kernel::{PortError, RoomId};
use domain_booking::BookingError;

/// Errors that can occur in the catalog domain
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No listing with this id exists
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    /// A query parameter could not be understood
    #[error("Invalid catalog query: {0}")]
    InvalidQuery(String),

    /// A listing carried an invalid pricing policy
    #[error("Invalid listing: {0}")]
    InvalidListing(#[from] BookingError),

    /// The catalog source failed and no fallback applied
    #[error("Catalog source error: {0}")]
    Port(#[from] PortError),
}

impl CatalogError {
    pub fn room_not_found(id: impl Into<RoomId>) -> Self {
        CatalogError::RoomNotFound(id.into())
    }
}
