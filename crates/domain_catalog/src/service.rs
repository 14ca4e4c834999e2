//! Catalog domain service
//!
//! [`CatalogService`] reads listings through a [`RoomCatalogPort`] and falls
//! back to the built-in catalog when the source fails or has nothing to
//! offer. Callers always learn which of the two they were served.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::RoomId;

use crate::error::CatalogError;
use crate::fallback::fallback_rooms;
use crate::filter::{CatalogPage, CatalogQuery};
use crate::listing::RoomListing;
use crate::ports::RoomCatalogPort;

/// Where a set of listings came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Served by the catalog port
    Live,
    /// Served from the built-in catalog
    Fallback,
}

/// Listings together with their source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub listings: Vec<RoomListing>,
    pub source: CatalogSource,
}

/// A page of search results together with their source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    #[serde(flatten)]
    pub page: CatalogPage,
    pub source: CatalogSource,
}

/// Service for browsing the room catalog
pub struct CatalogService {
    port: Arc<dyn RoomCatalogPort>,
    fallback: Vec<RoomListing>,
    page_size: usize,
}

impl CatalogService {
    /// Creates the service with the built-in fallback catalog
    pub fn new(port: Arc<dyn RoomCatalogPort>, page_size: usize) -> Result<Self, CatalogError> {
        Ok(Self::with_fallback(port, fallback_rooms()?, page_size))
    }

    /// Creates the service with a custom fallback catalog
    pub fn with_fallback(
        port: Arc<dyn RoomCatalogPort>,
        fallback: Vec<RoomListing>,
        page_size: usize,
    ) -> Self {
        Self {
            port,
            fallback,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns every listing, from the port when it has any
    pub async fn rooms(&self) -> Catalog {
        match self.port.list_rooms().await {
            Ok(listings) if !listings.is_empty() => {
                debug!(count = listings.len(), "Serving live catalog");
                Catalog {
                    listings,
                    source: CatalogSource::Live,
                }
            }
            Ok(_) => {
                warn!(source = "fallback", "Catalog source returned no rooms, serving built-in catalog");
                self.fallback_catalog()
            }
            Err(e) => {
                warn!(error = %e, source = "fallback", "Catalog source failed, serving built-in catalog");
                self.fallback_catalog()
            }
        }
    }

    /// Finds one listing
    ///
    /// A room the source reports as missing is missing; any other source
    /// failure is answered from the built-in catalog.
    pub async fn find(&self, id: &RoomId) -> Result<RoomListing, CatalogError> {
        match self.port.get_room(id).await {
            Ok(listing) => Ok(listing),
            Err(e) if e.is_not_found() => Err(CatalogError::room_not_found(id.clone())),
            Err(e) => {
                warn!(room_id = %id, error = %e, source = "fallback", "Room lookup failed, using built-in catalog");
                self.fallback
                    .iter()
                    .find(|l| &l.id == id)
                    .cloned()
                    .ok_or_else(|| CatalogError::room_not_found(id.clone()))
            }
        }
    }

    /// Filters, sorts and paginates the catalog
    pub async fn search(&self, query: &CatalogQuery) -> SearchResults {
        let catalog = self.rooms().await;
        let results = query.apply(&catalog.listings);
        debug!(
            matched = results.len(),
            page = query.page,
            source = ?catalog.source,
            "Catalog searched"
        );

        SearchResults {
            page: CatalogPage::paginate(results, query.page, self.page_size),
            source: catalog.source,
        }
    }

    fn fallback_catalog(&self) -> Catalog {
        Catalog {
            listings: self.fallback.clone(),
            source: CatalogSource::Fallback,
        }
    }
}
