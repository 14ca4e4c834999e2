//! Catalog filtering, sorting and pagination
//!
//! Filters are applied in a fixed order (search, location, price range,
//! amenities, tags), then the result is sorted and cut into pages.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::listing::RoomListing;

/// Default number of listings per page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Base-price bands offered by the price filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "2000-3500")]
    From2000To3500,
    #[serde(rename = "3501-5000")]
    From3501To5000,
    #[serde(rename = "5001+")]
    Above5000,
}

impl PriceRange {
    /// Inclusive lower and optional inclusive upper bound, in whole rupees
    pub fn bounds(&self) -> (Decimal, Option<Decimal>) {
        match self {
            PriceRange::All => (dec!(0), None),
            PriceRange::From2000To3500 => (dec!(2000), Some(dec!(3500))),
            PriceRange::From3501To5000 => (dec!(3501), Some(dec!(5000))),
            PriceRange::Above5000 => (dec!(5001), None),
        }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.map_or(true, |max| price <= max)
    }
}

impl FromStr for PriceRange {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" | "All" | "All Prices" => Ok(PriceRange::All),
            "2000-3500" => Ok(PriceRange::From2000To3500),
            "3501-5000" => Ok(PriceRange::From3501To5000),
            "5001+" => Ok(PriceRange::Above5000),
            other => Err(CatalogError::InvalidQuery(format!(
                "unknown price range '{}'",
                other
            ))),
        }
    }
}

/// Sort orders offered by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most reviewed first
    #[default]
    Popularity,
    PriceLow,
    PriceHigh,
    /// Highest rated first
    Rating,
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "popularity" => Ok(SortOrder::Popularity),
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            "rating" => Ok(SortOrder::Rating),
            other => Err(CatalogError::InvalidQuery(format!(
                "unknown sort order '{}'",
                other
            ))),
        }
    }
}

/// Query against the room catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    /// Location substring; `All` or empty matches every location
    pub location: Option<String>,
    pub price_range: PriceRange,
    pub amenities: Vec<String>,
    pub tags: Vec<String>,
    pub sort: SortOrder,
    /// 1-based page number
    pub page: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: None,
            location: None,
            price_range: PriceRange::All,
            amenities: Vec::new(),
            tags: Vec::new(),
            sort: SortOrder::Popularity,
            page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.push(amenity.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Returns true if `listing` passes every filter of this query
    pub fn matches(&self, listing: &RoomListing) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.trim().is_empty()) {
            if !listing.matches_search(term.trim()) {
                return false;
            }
        }

        if let Some(location) = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.eq_ignore_ascii_case("all"))
        {
            if !listing
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        self.price_range.contains(listing.base_price().amount())
            && listing.has_amenities(&self.amenities)
            && listing.has_tags(&self.tags)
    }

    /// Filters and sorts listings; the sort is stable so ties keep catalog order
    pub fn apply(&self, listings: &[RoomListing]) -> Vec<RoomListing> {
        let mut results: Vec<RoomListing> = listings
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect();

        results.sort_by(|a, b| compare(self.sort, a, b));
        results
    }
}

fn compare(sort: SortOrder, a: &RoomListing, b: &RoomListing) -> Ordering {
    match sort {
        SortOrder::Popularity => b.reviews.cmp(&a.reviews),
        SortOrder::PriceLow => a.base_price().amount().cmp(&b.base_price().amount()),
        SortOrder::PriceHigh => b.base_price().amount().cmp(&a.base_price().amount()),
        SortOrder::Rating => b.rating.total_cmp(&a.rating),
    }
}

/// One page of catalog results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub items: Vec<RoomListing>,
    pub page: u32,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl CatalogPage {
    /// Cuts `results` into pages of `page_size` and returns page `page` (1-based)
    ///
    /// Page 0 is treated as page 1; pages past the end are empty.
    pub fn paginate(results: Vec<RoomListing>, page: u32, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_items = results.len();
        let total_pages = total_items.div_ceil(page_size);
        let start = (page as usize - 1).saturating_mul(page_size);

        let items = results
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();

        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        (self.page as usize) < self.total_pages
    }
}
