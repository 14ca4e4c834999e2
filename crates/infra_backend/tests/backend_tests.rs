//! Booking Backend Adapter Tests
//!
//! Each test starts a small axum server on an ephemeral port that plays the
//! booking backend, then drives [`HttpBookingBackend`] against it.
//!
//! # Test Organization
//!
//! - `bookings` - POST /bookings payload and reference handling
//! - `failures` - How transport and HTTP failures map onto `PortError`
//! - `resorts` - GET /resorts and GET /resorts/{id}, room ids kept to one path segment
//! - `with_services` - The adapter behind the booking and catalog services

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use core_kernel::{Money, PortError, RoomId};
use domain_booking::{BookingBackendPort, BookingService, BookingValidator};
use domain_catalog::{CatalogService, CatalogSource, RoomCatalogPort, DEFAULT_PAGE_SIZE};
use infra_backend::{BackendConfig, HttpBookingBackend};
use test_utils::{
    assert_confirmed, assert_pending_local, BookingFormBuilder, SelectionFixtures,
    SessionFixtures, SubmissionFixtures,
};

type Captured = Arc<Mutex<Vec<Value>>>;

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn backend_at(addr: SocketAddr) -> HttpBookingBackend {
    HttpBookingBackend::new(
        BackendConfig::new(format!("http://{}/api", addr)).timeout(Duration::from_millis(500)),
    )
    .unwrap()
}

/// A backend whose POST /bookings always answers with `status` and `body`
async fn bookings_answering(status: StatusCode, body: Value) -> (HttpBookingBackend, Captured) {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route(
            "/api/bookings",
            post(
                move |State(captured): State<Captured>, Json(payload): Json<Value>| {
                    let body = body.clone();
                    async move {
                        captured.lock().await.push(payload);
                        (status, Json(body))
                    }
                },
            ),
        )
        .with_state(captured.clone());

    (backend_at(serve(app).await), captured)
}

/// Sample resort records as the backend lists them
fn resort_records() -> Value {
    json!([
        {
            "id": "r-1",
            "name": "Tea Garden Suite",
            "location": "Valparai-Solaiyur",
            "description": "Suite overlooking the tea estates",
            "amenities": ["Geyser", "Valley View"],
            "images": ["/suite.jpg"],
            "rating": 4.6,
            "reviews": 40,
            "price": 3400,
            "roomType": "Suite",
            "tags": ["Nature"],
            "maxAdults": 3,
            "taxPercentage": 12
        },
        {
            "id": 2,
            "name": "Hillside Room",
            "location": "Kothagiri",
            "price": 2100
        },
        {
            "id": "broken",
            "name": "Unpriced",
            "price": -5
        }
    ])
}

async fn resorts_backend() -> HttpBookingBackend {
    let app = Router::new()
        .route(
            "/api/resorts",
            get(|| async { Json(json!({ "success": true, "data": { "resorts": resort_records() } })) }),
        )
        .route(
            "/api/resorts/:id",
            get(|Path(id): Path<String>| async move {
                let found = resort_records()
                    .as_array()
                    .and_then(|records| {
                        records
                            .iter()
                            .find(|r| r["id"].to_string().trim_matches('"') == id)
                            .cloned()
                    });
                match found {
                    Some(resort) => (
                        StatusCode::OK,
                        Json(json!({ "success": true, "data": { "resort": resort } })),
                    )
                        .into_response(),
                    None => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "success": false, "error": "Resort not found" })),
                    )
                        .into_response(),
                }
            }),
        );

    backend_at(serve(app).await)
}

// ============================================================================
// BOOKINGS
// ============================================================================

mod bookings {
    use super::*;

    #[tokio::test]
    async fn test_reference_is_returned() {
        let (backend, _) = bookings_answering(
            StatusCode::CREATED,
            json!({ "success": true, "data": { "bookingReference": "BK-2025-0042" } }),
        )
        .await;

        let reference = backend
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap();

        assert_eq!(reference.map(|r| r.as_str().to_string()), Some("BK-2025-0042".into()));
    }

    #[tokio::test]
    async fn test_payload_is_camel_case() {
        let (backend, captured) = bookings_answering(
            StatusCode::OK,
            json!({ "success": true, "data": { "bookingReference": "BK-1" } }),
        )
        .await;
        let submission = SubmissionFixtures::standard();

        backend.create_booking(&submission).await.unwrap();

        let payloads = captured.lock().await;
        let payload = &payloads[0];
        assert_eq!(payload["resortId"], "1");
        assert_eq!(payload["resortName"], "Deluxe Family Room");
        assert_eq!(payload["checkIn"], "2025-01-10");
        assert_eq!(payload["checkOut"], "2025-01-12");
        assert_eq!(payload["guests"], json!({ "adults": 3, "children": 0, "rooms": 1 }));
        assert_eq!(payload["customer"]["email"], "asha.menon@example.com");
        assert_eq!(payload["userId"], "user-7f3a");
        assert_eq!(payload["priceBreakdown"]["nights"], 2);
        assert_eq!(payload["priceBreakdown"]["gst"].as_f64(), Some(1225.0));
        assert_eq!(payload["totalAmount"].as_f64(), Some(8031.0));
    }

    #[tokio::test]
    async fn test_missing_reference() {
        let (backend, _) =
            bookings_answering(StatusCode::OK, json!({ "success": true, "data": {} })).await;

        let reference = backend
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap();
        assert!(reference.is_none());
    }
}

// ============================================================================
// FAILURES
// ============================================================================

mod failures {
    use super::*;

    #[tokio::test]
    async fn test_success_false_is_rejected() {
        let (backend, _) = bookings_answering(
            StatusCode::OK,
            json!({ "success": false, "error": "Room sold out for these dates" }),
        )
        .await;

        let err = backend
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap_err();
        match err {
            PortError::Rejected { message } => assert_eq!(message, "Room sold out for these dates"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_error_is_rejected() {
        let (backend, _) = bookings_answering(
            StatusCode::BAD_REQUEST,
            json!({ "success": false, "message": "Invalid phone number" }),
        )
        .await;

        let err = backend
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::Rejected { ref message } if message == "Invalid phone number"));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let (backend, _) = bookings_answering(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "success": false }),
        )
        .await;

        let err = backend
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::ServiceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = backend_at(addr)
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap_err();
        assert!(err.is_unreachable(), "unexpected error {:?}", err);
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let app = Router::new().route(
            "/api/bookings",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({ "success": true, "data": { "bookingReference": "late" } }))
            }),
        );
        let backend = backend_at(serve(app).await);

        let err = backend
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::Timeout { duration_ms: 500, .. }));
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let app = Router::new().route("/api/bookings", post(|| async { "<html>maintenance</html>" }));
        let backend = backend_at(serve(app).await);

        let err = backend
            .create_booking(&SubmissionFixtures::standard())
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::Transformation { .. }));
    }
}

// ============================================================================
// RESORTS
// ============================================================================

mod resorts {
    use super::*;

    #[tokio::test]
    async fn test_list_skips_unusable_records() {
        let listings = resorts_backend().await.list_rooms().await.unwrap();

        let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["r-1", "2"]);
    }

    #[tokio::test]
    async fn test_record_fields_and_policy() {
        let listings = resorts_backend().await.list_rooms().await.unwrap();
        let suite = &listings[0];

        assert_eq!(suite.room_type, "Suite");
        assert_eq!(suite.reviews, 40);
        assert_eq!(suite.base_price(), Money::inr(3400));
        assert_eq!(suite.policy.max_adults_per_room(), 3);
        assert_eq!(suite.policy.max_rooms_per_booking(), 3);
        assert_eq!(suite.policy.tax_rate().as_percentage(), rust_decimal_macros::dec!(12));
    }

    #[tokio::test]
    async fn test_get_room() {
        let listing = resorts_backend()
            .await
            .get_room(&RoomId::from("2"))
            .await
            .unwrap();

        assert_eq!(listing.name, "Hillside Room");
        assert_eq!(listing.policy.extra_adult_charge_per_night(), Money::inr(800));
    }

    #[tokio::test]
    async fn test_unknown_room_is_not_found() {
        let err = resorts_backend()
            .await
            .get_room(&RoomId::from("missing"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing"));
    }

    /// A backend that records every path it serves and answers any
    /// `/api/bookings` GET with something shaped like a resort
    async fn path_recording_backend() -> (HttpBookingBackend, Arc<Mutex<Vec<String>>>) {
        let paths: Arc<Mutex<Vec<String>>> = Arc::default();
        let app = Router::new()
            .route(
                "/api/bookings",
                get(|State(paths): State<Arc<Mutex<Vec<String>>>>| async move {
                    paths.lock().await.push("/api/bookings".into());
                    Json(json!({ "success": true, "data": { "id": "x", "name": "Not a room", "price": 1 } }))
                }),
            )
            .route(
                "/api/resorts/:id",
                get(
                    |State(paths): State<Arc<Mutex<Vec<String>>>>, Path(id): Path<String>| async move {
                        paths.lock().await.push(format!("/api/resorts/{}", id));
                        (StatusCode::NOT_FOUND, Json(json!({ "success": false })))
                    },
                ),
            )
            .with_state(paths.clone());

        (backend_at(serve(app).await), paths)
    }

    #[tokio::test]
    async fn test_room_id_stays_one_path_segment() {
        let (backend, paths) = path_recording_backend().await;

        let err = backend
            .get_room(&RoomId::from("../bookings"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(*paths.lock().await, vec!["/api/resorts/../bookings".to_string()]);
    }

    #[tokio::test]
    async fn test_dot_segments_are_not_requested() {
        let (backend, paths) = path_recording_backend().await;

        for id in ["..", ".", ""] {
            let err = backend.get_room(&RoomId::from(id)).await.unwrap_err();
            assert!(err.is_not_found());
        }
        assert!(paths.lock().await.is_empty());
    }
}

// ============================================================================
// WITH SERVICES
// ============================================================================

mod with_services {
    use super::*;

    #[tokio::test]
    async fn test_confirmed_through_booking_service() {
        let (backend, captured) = bookings_answering(
            StatusCode::CREATED,
            json!({ "success": true, "data": { "booking": { "bookingReference": "BK-77" } } }),
        )
        .await;
        let service = BookingService::new(Arc::new(backend), BookingValidator::default());

        let outcome = service
            .submit(
                &SessionFixtures::signed_in(),
                &SelectionFixtures::standard_room(),
                BookingFormBuilder::new().build(),
            )
            .await
            .unwrap();

        assert_eq!(assert_confirmed(&outcome).as_str(), "BK-77");
        assert_eq!(captured.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_offline_backend_gives_local_acknowledgment() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let service = BookingService::new(Arc::new(backend_at(addr)), BookingValidator::default());

        let outcome = service
            .submit(
                &SessionFixtures::signed_in(),
                &SelectionFixtures::standard_room(),
                BookingFormBuilder::new().build(),
            )
            .await
            .unwrap();

        let (reference, _) = assert_pending_local(&outcome);
        assert!(reference.as_str().starts_with("HILL"));
    }

    #[tokio::test]
    async fn test_catalog_served_live() {
        let service = CatalogService::new(Arc::new(resorts_backend().await), DEFAULT_PAGE_SIZE).unwrap();

        let catalog = service.rooms().await;
        assert_eq!(catalog.source, CatalogSource::Live);
        assert_eq!(catalog.listings.len(), 2);
    }

    #[tokio::test]
    async fn test_catalog_falls_back_when_backend_is_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let service = CatalogService::new(Arc::new(backend_at(addr)), DEFAULT_PAGE_SIZE).unwrap();

        let catalog = service.rooms().await;
        assert_eq!(catalog.source, CatalogSource::Fallback);
        assert_eq!(catalog.listings.len(), 6);
    }
}
