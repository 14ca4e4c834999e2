//! Booking domain services
//!
//! [`BookingService`] runs the booking flow end to end: prefill the form from
//! the session, validate it, price it and hand it to the backend.

use std::sync::Arc;
use tracing::{debug, info, warn};

use core_kernel::SubmissionId;

use crate::booking::{
    AcknowledgmentReason, BookingForm, BookingReference, BookingSubmission, RoomSelection,
    SubmissionOutcome,
};
use crate::error::BookingError;
use crate::ports::BookingBackendPort;
use crate::quote::{compute_quote, NotQuotable, PriceBreakdown};
use crate::session::Session;
use crate::stay::StayRequest;
use crate::validation::BookingValidator;

/// Service for quoting and submitting bookings
pub struct BookingService {
    backend: Arc<dyn BookingBackendPort>,
    validator: BookingValidator,
}

impl BookingService {
    pub fn new(backend: Arc<dyn BookingBackendPort>, validator: BookingValidator) -> Self {
        Self { backend, validator }
    }

    pub fn validator(&self) -> &BookingValidator {
        &self.validator
    }

    /// Prices a stay in the selected room
    pub fn quote(
        &self,
        selection: &RoomSelection,
        request: &StayRequest,
    ) -> Result<PriceBreakdown, NotQuotable> {
        let result = compute_quote(request, &selection.policy);
        match &result {
            Ok(breakdown) => debug!(
                room_id = %selection.room_id,
                nights = breakdown.nights,
                rooms = breakdown.rooms,
                total = %breakdown.total_amount,
                adjusted = breakdown.was_adjusted(),
                "Quote computed"
            ),
            Err(reason) => debug!(
                room_id = %selection.room_id,
                reason = %reason,
                "Stay not quotable"
            ),
        }
        result
    }

    /// Submits a booking
    ///
    /// The flow is:
    /// 1. Prefill contact details from the session
    /// 2. Validate the form
    /// 3. Price the stay
    /// 4. Send it to the backend
    ///
    /// Backend failures do not fail the submission. The guest gets a locally
    /// generated reference and the outcome says why the backend did not
    /// confirm.
    ///
    /// # Errors
    ///
    /// `BookingError::Validation` when the form is invalid and
    /// `BookingError::NotQuotable` when the stay cannot be priced
    pub async fn submit(
        &self,
        session: &Session,
        selection: &RoomSelection,
        form: BookingForm,
    ) -> Result<SubmissionOutcome, BookingError> {
        let form = BookingForm {
            customer: session.prefill(form.customer),
            ..form
        };

        let report = self.validator.validate(&form, &selection.policy);
        if !report.is_valid {
            debug!(room_id = %selection.room_id, errors = %report, "Booking form rejected");
            return Err(BookingError::Validation(report));
        }

        let breakdown = self.quote(selection, &form.stay)?;
        let submission = BookingSubmission {
            id: SubmissionId::new_v7(),
            room: selection.clone(),
            stay: breakdown.stay,
            rooms: breakdown.rooms,
            adults: breakdown.adults,
            children: breakdown.children,
            customer: form.customer,
            user_id: session.user_id().map(String::from),
            breakdown,
        };

        info!(
            submission_id = %submission.id,
            room_id = %selection.room_id,
            nights = submission.breakdown.nights,
            total = %submission.breakdown.total_amount,
            signed_in = session.is_logged_in(),
            "Submitting booking"
        );

        let reason = match self.backend.create_booking(&submission).await {
            Ok(Some(reference)) => {
                info!(
                    submission_id = %submission.id,
                    reference = %reference,
                    "Booking confirmed by backend"
                );
                return Ok(SubmissionOutcome::Confirmed { reference });
            }
            Ok(None) => AcknowledgmentReason::MissingReference,
            Err(e) if e.is_transient() => AcknowledgmentReason::BackendUnreachable(e.to_string()),
            Err(e) => AcknowledgmentReason::BackendRejected(e.to_string()),
        };

        let local_reference = BookingReference::generate_local();
        warn!(
            submission_id = %submission.id,
            local_reference = %local_reference,
            reason = %reason,
            acknowledgment = "local",
            "Booking acknowledged locally"
        );

        Ok(SubmissionOutcome::PendingLocalAcknowledgment {
            local_reference,
            reason,
        })
    }
}
