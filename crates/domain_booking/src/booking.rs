//! Booking forms, submissions and their outcomes
//!
//! A [`BookingForm`] is what the guest filled in. Once it has been prefilled
//! from the session, validated and priced it becomes a [`BookingSubmission`],
//! which is sent to the booking backend. The backend either confirms it with a
//! reference or the booking is acknowledged locally with a reference of our
//! own; [`SubmissionOutcome`] keeps the two apart.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::{RoomId, StayPeriod, SubmissionId};

use crate::policy::RoomPricingPolicy;
use crate::quote::PriceBreakdown;
use crate::stay::StayRequest;

/// Prefix of every locally generated booking reference
pub const LOCAL_REFERENCE_PREFIX: &str = "HILL";

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Guest contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CustomerContact {
    #[validate(length(max = 120, message = "Name is too long"))]
    pub name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(max = 20, message = "Phone is too long"))]
    pub phone: String,
    pub address: Option<String>,
    #[validate(length(max = 1000, message = "Special requests are too long"))]
    pub special_requests: Option<String>,
}

impl CustomerContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: None,
            special_requests: None,
        }
    }
}

/// The room a booking is for, as resolved from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSelection {
    pub room_id: RoomId,
    pub resort_name: String,
    pub room_type: String,
    pub location: String,
    pub policy: RoomPricingPolicy,
}

/// A filled-in booking form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub stay: StayRequest,
    pub customer: CustomerContact,
}

impl BookingForm {
    pub fn new(stay: StayRequest, customer: CustomerContact) -> Self {
        Self { stay, customer }
    }
}

/// A validated and priced booking, ready for the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSubmission {
    pub id: SubmissionId,
    pub room: RoomSelection,
    pub stay: StayPeriod,
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
    pub customer: CustomerContact,
    /// Id of the signed-in user, if any
    pub user_id: Option<String>,
    pub breakdown: PriceBreakdown,
}

/// Reference a guest quotes when asking about a booking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Generates a local reference: `HILL`, the last eight digits of the
    /// current epoch milliseconds, then four random base-36 characters
    pub fn generate_local() -> Self {
        let millis = Utc::now().timestamp_millis().rem_euclid(100_000_000);
        let mut rng = rand::thread_rng();
        let suffix: String = (0..4)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}{:08}{}", LOCAL_REFERENCE_PREFIX, millis, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for references generated by [`BookingReference::generate_local`]
    pub fn is_local(&self) -> bool {
        self.0.starts_with(LOCAL_REFERENCE_PREFIX)
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a booking was acknowledged locally instead of confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AcknowledgmentReason {
    /// The backend could not be reached or did not answer in time
    BackendUnreachable(String),
    /// The backend answered with an error
    BackendRejected(String),
    /// The backend accepted the booking but returned no reference
    MissingReference,
}

impl fmt::Display for AcknowledgmentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcknowledgmentReason::BackendUnreachable(detail) => {
                write!(f, "booking backend unreachable: {}", detail)
            }
            AcknowledgmentReason::BackendRejected(detail) => {
                write!(f, "booking backend rejected the request: {}", detail)
            }
            AcknowledgmentReason::MissingReference => {
                f.write_str("booking backend returned no reference")
            }
        }
    }
}

/// Result of submitting a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The backend recorded the booking
    Confirmed { reference: BookingReference },
    /// The backend did not confirm; the guest holds a local reference
    PendingLocalAcknowledgment {
        local_reference: BookingReference,
        reason: AcknowledgmentReason,
    },
}

impl SubmissionOutcome {
    pub fn reference(&self) -> &BookingReference {
        match self {
            SubmissionOutcome::Confirmed { reference } => reference,
            SubmissionOutcome::PendingLocalAcknowledgment { local_reference, .. } => {
                local_reference
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmissionOutcome::Confirmed { .. })
    }
}
