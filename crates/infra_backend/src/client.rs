//! HTTP client for the booking backend
//!
//! # Error Handling
//!
//! Transport and HTTP failures are mapped to `PortError` variants:
//! - Timeouts -> `PortError::Timeout`
//! - Connection failures -> `PortError::Connection`
//! - 5xx -> `PortError::ServiceUnavailable`
//! - 404 -> `PortError::NotFound`
//! - Other non-success statuses, or `success: false` -> `PortError::Rejected`
//! - Bodies that cannot be decoded -> `PortError::Transformation`

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use core_kernel::{DomainPort, PortError, RoomId};
use domain_booking::{BookingBackendPort, BookingReference, BookingSubmission};
use domain_catalog::{RoomCatalogPort, RoomListing};

use crate::config::BackendConfig;
use crate::dto::{ApiEnvelope, BookingCreated, BookingPayload, ResortData, ResortsData};

/// Longest slice of an error body carried into a `PortError`
const MAX_ERROR_BODY: usize = 200;

/// reqwest-backed implementation of the booking and catalog ports
#[derive(Debug, Clone)]
pub struct HttpBookingBackend {
    http: Client,
    config: BackendConfig,
}

impl HttpBookingBackend {
    /// Creates a client for the configured backend
    pub fn new(config: BackendConfig) -> Result<Self, PortError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PortError::Internal {
                message: "failed to build HTTP client".into(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// URL of one resource, with `id` percent-encoded as a single path segment
    ///
    /// Ids that would name no segment of their own (empty, `.` or `..`) have
    /// no resource and come back as `NotFound`.
    fn resource_url(&self, collection: &str, id: &RoomId) -> Result<Url, PortError> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(PortError::not_found("Room", id));
        }

        let mut url = Url::parse(&self.config.api_base).map_err(|e| PortError::Internal {
            message: format!("invalid API base {}", self.config.api_base),
            source: Some(Box::new(e)),
        })?;
        url.path_segments_mut()
            .map_err(|_| PortError::internal(format!("API base {} cannot take a path", self.config.api_base)))?
            .pop_if_empty()
            .push(collection)
            .push(id.as_str());
        Ok(url)
    }

    /// Sends a request and unwraps the response envelope
    ///
    /// Returns the envelope's `data`, which a successful response may omit.
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<Option<T>, PortError> {
        let started = Instant::now();
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(operation, e))?;

        let status = response.status();
        debug!(
            operation,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Backend responded"
        );

        if status == StatusCode::NOT_FOUND {
            return Err(PortError::not_found("resource", operation));
        }
        if status.is_server_error() {
            return Err(PortError::ServiceUnavailable {
                service: format!("{} returned {}", operation, status),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PortError::rejected(rejection_message(status, &body)));
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
            PortError::transformation(format!("{}: undecodable response: {}", operation, e))
        })?;

        if !envelope.success {
            let message = envelope
                .failure_message()
                .unwrap_or("request was not accepted")
                .to_string();
            return Err(PortError::rejected(message));
        }

        Ok(envelope.data)
    }

    fn transport_error(&self, operation: &str, error: reqwest::Error) -> PortError {
        if error.is_timeout() {
            PortError::Timeout {
                operation: operation.to_string(),
                duration_ms: self.config.timeout.as_millis() as u64,
            }
        } else if error.is_decode() {
            PortError::transformation(format!("{}: {}", operation, error))
        } else if error.is_connect() || error.is_request() {
            PortError::Connection {
                message: format!("{}: {}", operation, error),
                source: Some(Box::new(error)),
            }
        } else {
            PortError::Internal {
                message: format!("{}: {}", operation, error),
                source: Some(Box::new(error)),
            }
        }
    }
}

/// Picks the backend's own message out of an error body, if it sent one
fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.failure_message().map(String::from))
        .unwrap_or_else(|| {
            let excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
            if excerpt.trim().is_empty() {
                format!("request failed with status {}", status)
            } else {
                format!("request failed with status {}: {}", status, excerpt)
            }
        })
}

impl DomainPort for HttpBookingBackend {}

#[async_trait]
impl BookingBackendPort for HttpBookingBackend {
    #[instrument(skip(self, submission), fields(submission_id = %submission.id))]
    async fn create_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<Option<BookingReference>, PortError> {
        let payload = BookingPayload::from(submission);
        let request = self.http.post(self.config.url("/bookings")).json(&payload);

        let created: Option<BookingCreated> = self.send("POST /bookings", request).await?;
        let reference = created
            .as_ref()
            .and_then(BookingCreated::reference)
            .map(BookingReference::new);

        match &reference {
            Some(reference) => info!(reference = %reference, "Backend accepted booking"),
            None => warn!("Backend accepted booking without a reference"),
        }
        Ok(reference)
    }
}

#[async_trait]
impl RoomCatalogPort for HttpBookingBackend {
    #[instrument(skip(self))]
    async fn list_rooms(&self) -> Result<Vec<RoomListing>, PortError> {
        let request = self.http.get(self.config.url("/resorts"));
        let data: Option<ResortsData> = self.send("GET /resorts", request).await?;

        let mut listings = Vec::new();
        for record in data.unwrap_or_default().resorts {
            match record.into_listing() {
                Ok(listing) => listings.push(listing),
                Err(e) => warn!(error = %e, "Skipping resort record"),
            }
        }

        debug!(count = listings.len(), "Fetched resort listings");
        Ok(listings)
    }

    #[instrument(skip(self), fields(room_id = %id))]
    async fn get_room(&self, id: &RoomId) -> Result<RoomListing, PortError> {
        let request = self.http.get(self.resource_url("resorts", id)?);

        let data: Option<ResortData> = match self.send("GET /resorts/{id}", request).await {
            Err(PortError::NotFound { .. }) => return Err(PortError::not_found("Room", id)),
            other => other?,
        };

        data.map(ResortData::into_record)
            .ok_or_else(|| PortError::not_found("Room", id))?
            .into_listing()
    }
}
