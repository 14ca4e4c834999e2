//! Quote handlers

use axum::{extract::State, Json};

use crate::dto::quotes::{QuoteRequest, QuoteResponse};
use crate::handlers::room_selection;
use crate::{error::ApiError, AppState};

/// Prices a stay in one room
///
/// A stay that cannot be priced is still a successful response, with
/// `quotable: false` and the reason.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let selection = room_selection(&state, &request.room_id).await?;

    let result = state.bookings.quote(&selection, &request.stay());
    Ok(Json(QuoteResponse::from_result(request.room_id, result)))
}
