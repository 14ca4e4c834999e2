//! Booking DTOs

use serde::Deserialize;

use domain_booking::{BookingForm, CustomerContact};

use crate::dto::quotes::QuoteRequest;

/// Body of `POST /api/v1/bookings`: the quote fields plus contact details
///
/// A signed-in guest may leave out the contact fields their account
/// already provides.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    #[serde(flatten)]
    pub stay: QuoteRequest,
    #[serde(default)]
    pub customer: CustomerContact,
}

impl BookingRequest {
    pub fn form(&self) -> BookingForm {
        BookingForm::new(self.stay.stay(), self.customer.clone())
    }
}
