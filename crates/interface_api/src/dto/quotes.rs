//! Quote DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_booking::{NotQuotable, PriceBreakdown, StayRequest};

fn default_rooms() -> u32 {
    1
}

fn default_adults() -> u32 {
    2
}

/// Body of `POST /api/v1/quotes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub room_id: String,
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_rooms")]
    pub rooms: u32,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

impl QuoteRequest {
    pub fn stay(&self) -> StayRequest {
        StayRequest {
            check_in: self.check_in,
            check_out: self.check_out,
            rooms: self.rooms,
            adults: self.adults,
            children: self.children,
        }
    }
}

/// A priced stay, or the reason it could not be priced
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub room_id: String,
    pub quotable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<PriceBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<NotQuotable>,
}

impl QuoteResponse {
    pub fn from_result(room_id: String, result: Result<PriceBreakdown, NotQuotable>) -> Self {
        match result {
            Ok(breakdown) => Self {
                room_id,
                quotable: true,
                breakdown: Some(breakdown),
                reason: None,
            },
            Err(reason) => Self {
                room_id,
                quotable: false,
                breakdown: None,
                reason: Some(reason),
            },
        }
    }
}
