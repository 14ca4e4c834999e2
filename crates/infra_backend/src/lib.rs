//! Booking Backend Adapter
//!
//! This crate connects the booking and catalog domains to the resort's
//! booking backend over HTTP. [`HttpBookingBackend`] implements both
//! `BookingBackendPort` and `RoomCatalogPort`, so a single client serves
//! booking submission and the room catalog.
//!
//! # Endpoints
//!
//! | port operation | request |
//! |---|---|
//! | `create_booking` | `POST {api_base}/bookings` |
//! | `list_rooms` | `GET {api_base}/resorts` |
//! | `get_room` | `GET {api_base}/resorts/{id}` |
//!
//! Every response is wrapped in `{ success, data?, error?, message? }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_backend::{BackendConfig, HttpBookingBackend};
//! use std::time::Duration;
//!
//! let backend = HttpBookingBackend::new(
//!     BackendConfig::new("http://localhost:5000/api").timeout(Duration::from_secs(10)),
//! )?;
//! let rooms = backend.list_rooms().await?;
//! ```

pub mod client;
pub mod config;
pub mod dto;

pub use client::HttpBookingBackend;
pub use config::BackendConfig;
