//! Booking Domain
//!
//! This crate implements the booking side of the resort system: how a room is
//! priced, how a guest's request is validated, and what happens when the
//! finished booking is sent to the backend.
//!
//! # Architecture
//!
//! - **Value Objects**: RoomPricingPolicy, StayRequest, PriceBreakdown
//! - **Domain Services**: the stay price calculator (`compute_quote`) and
//!   BookingService
//! - **Ports**: BookingBackendPort, implemented in `infra_backend`
//!
//! # Booking Flow
//!
//! ```text
//! BookingForm -> prefill (Session) -> validate -> compute_quote -> backend
//!                                                                 |-> Confirmed
//!                                                                 \-> PendingLocalAcknowledgment
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_booking::{compute_quote, RoomPricingPolicy, StayRequest};
//!
//! let policy = RoomPricingPolicy::builder(Money::inr(2603))
//!     .extra_adult_charge(Money::inr(800))
//!     .tax_rate(Rate::from_percentage(dec!(18)))
//!     .build()?;
//!
//! let quote = compute_quote(&StayRequest::new(check_in, check_out), &policy)?;
//! println!("{}", quote.total_amount);
//! ```

pub mod booking;
pub mod error;
pub mod policy;
pub mod ports;
pub mod quote;
pub mod services;
pub mod session;
pub mod stay;
pub mod validation;

pub use booking::{
    AcknowledgmentReason, BookingForm, BookingReference, BookingSubmission, CustomerContact,
    RoomSelection, SubmissionOutcome,
};
pub use error::BookingError;
pub use policy::{RoomPricingPolicy, RoomPricingPolicyBuilder};
pub use ports::BookingBackendPort;
pub use quote::{compute_quote, NotQuotable, PriceBreakdown, QuoteAdjustment};
pub use services::BookingService;
pub use session::{Session, SessionUser};
pub use stay::StayRequest;
pub use validation::{BookingValidator, FieldError, GuestLimits, ValidationReport};
