//! In-memory port doubles
//!
//! [`ScriptedBackend`] answers every booking with a fixed response and keeps
//! what it was sent; [`StaticCatalog`] serves a fixed list of rooms or fails.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;

use core_kernel::{DomainPort, PortError, RoomId};
use domain_booking::{BookingBackendPort, BookingReference, BookingSubmission};
use domain_catalog::{RoomCatalogPort, RoomListing};

/// How a [`ScriptedBackend`] answers
#[derive(Debug, Clone)]
pub enum BackendResponse {
    /// Confirms with the given reference
    Confirm(String),
    /// Accepts but returns no reference
    NoReference,
    /// Refuses the connection
    Unreachable,
    /// Never answers in time
    Timeout,
    /// Answers with an error message
    Rejected(String),
    /// Answers with a server error
    Unavailable,
}

/// Booking backend double with a fixed response
#[derive(Debug)]
pub struct ScriptedBackend {
    response: BackendResponse,
    delay: Option<Duration>,
    received: Mutex<Vec<BookingSubmission>>,
}

impl ScriptedBackend {
    pub fn new(response: BackendResponse) -> Self {
        Self {
            response,
            delay: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn confirming(reference: impl Into<String>) -> Self {
        Self::new(BackendResponse::Confirm(reference.into()))
    }

    /// Waits before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Submissions received so far
    pub async fn received(&self) -> Vec<BookingSubmission> {
        self.received.lock().await.clone()
    }
}

impl DomainPort for ScriptedBackend {}

#[async_trait]
impl BookingBackendPort for ScriptedBackend {
    async fn create_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<Option<BookingReference>, PortError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.received.lock().await.push(submission.clone());

        match &self.response {
            BackendResponse::Confirm(reference) => Ok(Some(BookingReference::new(reference.clone()))),
            BackendResponse::NoReference => Ok(None),
            BackendResponse::Unreachable => Err(PortError::connection("connection refused")),
            BackendResponse::Timeout => Err(PortError::Timeout {
                operation: "POST /bookings".into(),
                duration_ms: 10_000,
            }),
            BackendResponse::Rejected(message) => Err(PortError::rejected(message.clone())),
            BackendResponse::Unavailable => Err(PortError::ServiceUnavailable {
                service: "bookings".into(),
            }),
        }
    }
}

/// Catalog double serving a fixed list of rooms
#[derive(Debug, Default)]
pub struct StaticCatalog {
    listings: Vec<RoomListing>,
    failing: bool,
}

impl StaticCatalog {
    pub fn with_listings(listings: Vec<RoomListing>) -> Self {
        Self {
            listings,
            failing: false,
        }
    }

    /// A source that has no rooms
    pub fn empty() -> Self {
        Self::default()
    }

    /// A source that cannot be reached
    pub fn failing() -> Self {
        Self {
            listings: Vec::new(),
            failing: true,
        }
    }
}

impl DomainPort for StaticCatalog {}

#[async_trait]
impl RoomCatalogPort for StaticCatalog {
    async fn list_rooms(&self) -> Result<Vec<RoomListing>, PortError> {
        if self.failing {
            return Err(PortError::connection("catalog source offline"));
        }
        Ok(self.listings.clone())
    }

    async fn get_room(&self, id: &RoomId) -> Result<RoomListing, PortError> {
        if self.failing {
            return Err(PortError::connection("catalog source offline"));
        }
        self.listings
            .iter()
            .find(|l| &l.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Room", id))
    }
}
