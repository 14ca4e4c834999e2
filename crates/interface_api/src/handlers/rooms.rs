//! Room catalog handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::RoomId;
use domain_catalog::{CatalogQuery, RoomListing, SearchResults};

use crate::dto::rooms::RoomsQuery;
use crate::{error::ApiError, AppState};

/// Searches the catalog
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomsQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let query = CatalogQuery::try_from(query)?;
    Ok(Json(state.catalog.search(&query).await))
}

/// Gets one room by id
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoomListing>, ApiError> {
    let listing = state.catalog.find(&RoomId::from(id)).await?;
    Ok(Json(listing))
}
