//! Room DTOs

use serde::Deserialize;

use domain_catalog::{CatalogError, CatalogQuery};

/// Query string of `GET /api/v1/rooms`
///
/// `amenities` and `tags` are comma-separated lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomsQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub price_range: Option<String>,
    pub amenities: Option<String>,
    pub tags: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
}

fn split_terms(list: Option<String>) -> Vec<String> {
    list.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

impl TryFrom<RoomsQuery> for CatalogQuery {
    type Error = CatalogError;

    fn try_from(query: RoomsQuery) -> Result<Self, Self::Error> {
        Ok(CatalogQuery {
            search: query.search,
            location: query.location,
            price_range: query.price_range.as_deref().unwrap_or_default().parse()?,
            amenities: split_terms(query.amenities),
            tags: split_terms(query.tags),
            sort: query.sort.as_deref().unwrap_or_default().parse()?,
            page: query.page.unwrap_or(1),
        })
    }
}
