//! Request handlers

pub mod bookings;
pub mod health;
pub mod quotes;
pub mod rooms;

use core_kernel::RoomId;
use domain_booking::{BookingError, RoomSelection};
use domain_catalog::CatalogError;

use crate::{error::ApiError, AppState};

/// Resolves the room a quote or booking is for
///
/// A room the catalog does not know has no pricing policy, so the stay is
/// refused before the calculator runs.
pub(crate) async fn room_selection(state: &AppState, room_id: &str) -> Result<RoomSelection, ApiError> {
    match state.catalog.find(&RoomId::from(room_id)).await {
        Ok(listing) => Ok(listing.selection()),
        Err(CatalogError::RoomNotFound(id)) => Err(BookingError::policy_missing(id).into()),
        Err(e) => Err(e.into()),
    }
}
