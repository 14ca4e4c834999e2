//! HTTP API Layer
//!
//! This crate provides the REST API of the resort booking site using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: rooms, quotes, bookings and health
//! - **Middleware**: session tokens, tracing, audit logging
//! - **DTOs**: request and response bodies
//! - **Error Handling**: consistent `{ error, message, details? }` bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, config::ApiConfig};
//!
//! let state = AppState::from_config(ApiConfig::from_env()?)?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_booking::{BookingBackendPort, BookingService, BookingValidator};
use domain_catalog::{CatalogService, RoomCatalogPort};
use infra_backend::HttpBookingBackend;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handlers::{bookings, health, quotes, rooms};
use crate::middleware::{audit_middleware, session_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub catalog: Arc<CatalogService>,
    pub bookings: Arc<BookingService>,
}

impl AppState {
    /// Builds the services over the given ports
    pub fn new(
        config: ApiConfig,
        catalog_port: Arc<dyn RoomCatalogPort>,
        backend: Arc<dyn BookingBackendPort>,
    ) -> Result<Self, ApiError> {
        let timezone = config
            .resort_timezone()
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        let validator = BookingValidator::new(config.guest_limits(), timezone);

        let catalog = CatalogService::new(catalog_port, config.page_size)?;
        let bookings = BookingService::new(backend, validator);

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            bookings: Arc::new(bookings),
        })
    }

    /// Builds the services over the HTTP booking backend
    pub fn from_config(config: ApiConfig) -> Result<Self, ApiError> {
        let backend = Arc::new(
            HttpBookingBackend::new(config.backend())
                .map_err(|e| ApiError::Internal(e.to_string()))?,
        );
        Self::new(config, backend.clone(), backend)
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    let room_routes = Router::new()
        .route("/", get(rooms::list_rooms))
        .route("/:id", get(rooms::get_room));

    // Session-aware API routes
    let api_routes = Router::new()
        .nest("/rooms", room_routes)
        .route("/quotes", post(quotes::create_quote))
        .route("/bookings", post(bookings::create_booking))
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
