//! Booking Domain Ports
//!
//! The booking domain needs one thing from the outside world: somewhere to
//! send a finished booking. [`BookingBackendPort`] is implemented by the HTTP
//! adapter in `infra_backend` and by scripted doubles in tests.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::booking::{BookingReference, BookingSubmission};

/// Port to the external booking backend
#[async_trait]
pub trait BookingBackendPort: DomainPort {
    /// Sends a booking to the backend
    ///
    /// # Returns
    ///
    /// The backend's reference, or `None` when it accepted the booking
    /// without returning one
    ///
    /// # Errors
    ///
    /// `PortError::Connection` or `PortError::Timeout` when the backend could
    /// not be reached, any other variant when it answered with a failure
    async fn create_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<Option<BookingReference>, PortError>;
}
