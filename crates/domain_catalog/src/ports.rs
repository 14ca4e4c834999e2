//! Catalog Domain Ports
//!
//! [`RoomCatalogPort`] is the catalog's view of wherever room listings live.
//! The HTTP adapter in `infra_backend` serves it from the booking backend's
//! resort endpoints.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError, RoomId};

use crate::listing::RoomListing;

/// Port to the source of room listings
#[async_trait]
pub trait RoomCatalogPort: DomainPort {
    /// Lists every room the source knows about
    async fn list_rooms(&self) -> Result<Vec<RoomListing>, PortError>;

    /// Retrieves one room
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when the source has no such room
    async fn get_room(&self, id: &RoomId) -> Result<RoomListing, PortError>;
}
