//! Wire format of the booking backend
//!
//! The backend speaks camelCase JSON wrapped in an [`ApiEnvelope`]. Amounts
//! are plain JSON numbers in rupees.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money, PortError, Rate};
use domain_booking::{BookingSubmission, PriceBreakdown, RoomPricingPolicy};
use domain_catalog::RoomListing;

/// Policy values for records that do not carry their own
const DEFAULT_MAX_ADULTS_PER_ROOM: u32 = 2;
const DEFAULT_MAX_ROOMS_PER_BOOKING: u32 = 3;
const DEFAULT_EXTRA_ADULT_CHARGE: i64 = 800;
const DEFAULT_TAX_PERCENTAGE: i64 = 18;

const DEFAULT_RATING: f32 = 4.5;
const DEFAULT_IMAGE: &str = "/default-room.jpg";
const DEFAULT_ROOM_TYPE: &str = "Deluxe Room";
const DEFAULT_BED_TYPE: &str = "Double Bed";

/// Envelope around every backend response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// The backend's explanation for a failure, if it gave one
    pub fn failure_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

fn amount(money: &Money) -> f64 {
    money.amount().to_f64().unwrap_or_default()
}

// ============================================================================
// Bookings
// ============================================================================

/// Body of `POST /bookings`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub submission_id: String,
    pub resort_id: String,
    pub resort_name: String,
    pub room_type: String,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: GuestsDto,
    pub customer: CustomerDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub base_price: f64,
    pub total_amount: f64,
    pub price_breakdown: PriceBreakdownDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestsDto {
    pub adults: u32,
    pub children: u32,
    pub rooms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownDto {
    pub base_price: f64,
    pub extra_adults_charge: f64,
    pub extra_children_charge: f64,
    pub nights: u32,
    pub rooms: u32,
    pub subtotal: f64,
    pub gst: f64,
    pub total_amount: f64,
}

impl From<&PriceBreakdown> for PriceBreakdownDto {
    fn from(breakdown: &PriceBreakdown) -> Self {
        Self {
            base_price: amount(&breakdown.base_subtotal),
            extra_adults_charge: amount(&breakdown.extra_adults_surcharge),
            extra_children_charge: amount(&breakdown.extra_children_surcharge),
            nights: breakdown.nights,
            rooms: breakdown.rooms,
            subtotal: amount(&breakdown.subtotal),
            gst: amount(&breakdown.tax),
            total_amount: amount(&breakdown.total_amount),
        }
    }
}

impl From<&BookingSubmission> for BookingPayload {
    fn from(submission: &BookingSubmission) -> Self {
        let customer = &submission.customer;
        Self {
            submission_id: submission.id.to_string(),
            resort_id: submission.room.room_id.to_string(),
            resort_name: submission.room.resort_name.clone(),
            room_type: submission.room.room_type.clone(),
            location: submission.room.location.clone(),
            check_in: submission.stay.check_in(),
            check_out: submission.stay.check_out(),
            guests: GuestsDto {
                adults: submission.adults,
                children: submission.children,
                rooms: submission.rooms,
            },
            customer: CustomerDto {
                name: customer.name.clone(),
                email: customer.email.clone(),
                phone: customer.phone.clone(),
                address: customer.address.clone(),
                notes: customer.special_requests.clone(),
            },
            user_id: submission.user_id.clone(),
            base_price: amount(&submission.breakdown.base_subtotal),
            total_amount: amount(&submission.breakdown.total_amount),
            price_breakdown: PriceBreakdownDto::from(&submission.breakdown),
        }
    }
}

/// `data` of a successful `POST /bookings`
///
/// The reference is read from `bookingReference`, `reference`, or a nested
/// `booking` record, whichever is present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    #[serde(alias = "reference")]
    pub booking_reference: Option<String>,
    pub booking: Option<Box<BookingCreated>>,
}

impl BookingCreated {
    pub fn reference(&self) -> Option<&str> {
        self.booking_reference
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .or_else(|| self.booking.as_ref().and_then(|b| b.reference()))
    }
}

// ============================================================================
// Resorts
// ============================================================================

/// `data` of `GET /resorts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResortsData {
    #[serde(default)]
    pub resorts: Vec<ResortRecord>,
}

/// `data` of `GET /resorts/{id}`, either wrapped or bare
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResortData {
    Wrapped { resort: ResortRecord },
    Bare(ResortRecord),
}

impl ResortData {
    pub fn into_record(self) -> ResortRecord {
        match self {
            ResortData::Wrapped { resort } => resort,
            ResortData::Bare(resort) => resort,
        }
    }
}

/// Record ids arrive as strings or numbers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(id) => f.write_str(id),
            RecordId::Number(id) => write!(f, "{}", id),
        }
    }
}

/// One resort room as the backend lists it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResortRecord {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub room_type: Option<String>,
    pub bed_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub season: Option<String>,
    pub special: Option<String>,
    pub max_adults: Option<u32>,
    pub max_rooms: Option<u32>,
    pub extra_adult_charge: Option<Decimal>,
    pub extra_child_charge: Option<Decimal>,
    pub max_children: Option<u32>,
    pub tax_percentage: Option<Decimal>,
}

impl ResortRecord {
    fn policy(&self) -> Result<RoomPricingPolicy, PortError> {
        let inr = |value: Decimal| Money::new(value, Currency::INR);

        let extra_adult = self
            .extra_adult_charge
            .unwrap_or(Decimal::from(DEFAULT_EXTRA_ADULT_CHARGE));
        let tax = self
            .tax_percentage
            .unwrap_or(Decimal::from(DEFAULT_TAX_PERCENTAGE));

        let mut builder = RoomPricingPolicy::builder(inr(self.price))
            .max_adults_per_room(self.max_adults.unwrap_or(DEFAULT_MAX_ADULTS_PER_ROOM))
            .max_rooms_per_booking(self.max_rooms.unwrap_or(DEFAULT_MAX_ROOMS_PER_BOOKING))
            .extra_adult_charge(inr(extra_adult))
            .tax_rate(Rate::from_percentage(tax));
        if let Some(charge) = self.extra_child_charge {
            builder = builder.extra_child_charge(inr(charge));
        }
        if let Some(children) = self.max_children {
            builder = builder.max_children_per_room(children);
        }

        builder
            .build()
            .map_err(|e| PortError::transformation(format!("resort {}: {}", self.id, e)))
    }

    /// Converts the record into a catalog listing
    ///
    /// Fields the backend leaves out take the catalog defaults.
    pub fn into_listing(self) -> Result<RoomListing, PortError> {
        let policy = self.policy()?;
        let mut listing = RoomListing::new(self.id.to_string(), self.name, self.location, policy);

        listing.description = self.description;
        listing.amenities = self.amenities;
        listing.images = if self.images.is_empty() {
            vec![DEFAULT_IMAGE.to_string()]
        } else {
            self.images
        };
        listing.rating = self.rating.unwrap_or(DEFAULT_RATING);
        listing.reviews = self.reviews.unwrap_or_default();
        listing.room_type = self.room_type.unwrap_or_else(|| DEFAULT_ROOM_TYPE.into());
        listing.bed_type = self.bed_type.unwrap_or_else(|| DEFAULT_BED_TYPE.into());
        listing.tags = self.tags;
        listing.season = self.season;
        listing.special = self.special;
        listing.original_price = self
            .original_price
            .map(|price| Money::new(price, Currency::INR));

        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_defaults() {
        let record: ResortRecord = serde_json::from_value(json!({
            "id": 42,
            "name": "Tea Estate Cottage",
            "location": "Valparai-Solaiyur",
            "price": 3100
        }))
        .unwrap();

        let listing = record.into_listing().unwrap();
        assert_eq!(listing.id.as_str(), "42");
        assert_eq!(listing.policy.max_adults_per_room(), 2);
        assert_eq!(listing.policy.max_rooms_per_booking(), 3);
        assert_eq!(listing.policy.extra_adult_charge_per_night(), Money::inr(800));
        assert_eq!(listing.policy.tax_rate(), Rate::from_percentage(Decimal::from(18)));
        assert_eq!(listing.images, vec![DEFAULT_IMAGE.to_string()]);
        assert_eq!(listing.rating, DEFAULT_RATING);
    }

    #[test]
    fn test_negative_price_is_a_transformation_error() {
        let record: ResortRecord = serde_json::from_value(json!({
            "id": "x",
            "name": "Broken",
            "price": -1
        }))
        .unwrap();

        assert!(matches!(
            record.into_listing(),
            Err(PortError::Transformation { .. })
        ));
    }

    #[test]
    fn test_reference_locations() {
        let flat: BookingCreated =
            serde_json::from_value(json!({ "bookingReference": "BK-1" })).unwrap();
        assert_eq!(flat.reference(), Some("BK-1"));

        let nested: BookingCreated =
            serde_json::from_value(json!({ "booking": { "reference": "BK-2" } })).unwrap();
        assert_eq!(nested.reference(), Some("BK-2"));

        let blank: BookingCreated =
            serde_json::from_value(json!({ "bookingReference": "  " })).unwrap();
        assert_eq!(blank.reference(), None);
    }

    #[test]
    fn test_wrapped_and_bare_resort() {
        let wrapped: ResortData =
            serde_json::from_value(json!({ "resort": { "id": "3", "name": "A", "price": 2499 } }))
                .unwrap();
        let bare: ResortData =
            serde_json::from_value(json!({ "id": "3", "name": "A", "price": 2499 })).unwrap();

        assert_eq!(wrapped.into_record().id, RecordId::Text("3".into()));
        assert_eq!(bare.into_record().id, RecordId::Text("3".into()));
    }
}
