//! Booking handlers

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};

use domain_booking::{Session, SubmissionOutcome};

use crate::dto::bookings::BookingRequest;
use crate::handlers::room_selection;
use crate::{error::ApiError, AppState};

/// Submits a booking
///
/// Answers 201 when the backend confirmed the booking and 202 when the
/// guest only holds a local acknowledgment.
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<SubmissionOutcome>), ApiError> {
    let selection = room_selection(&state, &request.stay.room_id).await?;

    let outcome = state
        .bookings
        .submit(&session, &selection, request.form())
        .await?;

    let status = if outcome.is_confirmed() {
        StatusCode::CREATED
    } else {
        StatusCode::ACCEPTED
    };
    Ok((status, Json(outcome)))
}
