//! Room Catalog Domain
//!
//! Listings of the bookable room types at Valparai-Solaiyur and Kothagiri,
//! with the search, filter, sort and pagination the catalog page offers.
//!
//! Listings come from a [`RoomCatalogPort`]; when it fails or is empty the
//! built-in catalog in [`fallback`] is served instead and the result is
//! marked [`CatalogSource::Fallback`].
//!
//! Each listing carries the room's pricing policy, and
//! [`RoomListing::selection`] hands it to the booking domain.

pub mod error;
pub mod fallback;
pub mod filter;
pub mod listing;
pub mod ports;
pub mod service;

pub use error::CatalogError;
pub use fallback::fallback_rooms;
pub use filter::{CatalogPage, CatalogQuery, PriceRange, SortOrder, DEFAULT_PAGE_SIZE};
pub use listing::RoomListing;
pub use ports::RoomCatalogPort;
pub use service::{Catalog, CatalogService, CatalogSource, SearchResults};
