//! Room listings
//!
//! A listing is one bookable room type at one of the properties, together
//! with everything the catalog page shows about it and the pricing policy the
//! quote calculator uses.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{Money, RoomId};
use domain_booking::{RoomPricingPolicy, RoomSelection};

/// A room type offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomListing {
    pub id: RoomId,
    pub name: String,
    pub location: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    pub room_type: String,
    pub bed_type: String,
    pub tags: Vec<String>,
    pub season: Option<String>,
    pub special: Option<String>,
    /// Rack rate the base price is discounted from
    pub original_price: Option<Money>,
    pub policy: RoomPricingPolicy,
}

impl RoomListing {
    /// Creates a listing with empty presentation fields
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        location: impl Into<String>,
        policy: RoomPricingPolicy,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            description: String::new(),
            amenities: Vec::new(),
            images: Vec::new(),
            rating: 0.0,
            reviews: 0,
            room_type: String::new(),
            bed_type: String::new(),
            tags: Vec::new(),
            season: None,
            special: None,
            original_price: None,
            policy,
        }
    }

    pub fn base_price(&self) -> Money {
        self.policy.base_price()
    }

    /// Percentage saved against the original price, rounded to a whole percent
    ///
    /// `None` when there is no original price or it is not above the base price.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount();
        let base = self.base_price().amount();
        if original <= base || original.is_zero() {
            return None;
        }
        let percent = ((original - base) / original * dec!(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        percent.to_u32()
    }

    /// The booking-side view of this listing
    pub fn selection(&self) -> RoomSelection {
        RoomSelection {
            room_id: self.id.clone(),
            resort_name: self.name.clone(),
            room_type: self.room_type.clone(),
            location: self.location.clone(),
            policy: self.policy.clone(),
        }
    }

    /// Case-insensitive match of `term` against name, description, location and tags
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }

    /// Returns true if every term is a substring of some amenity
    pub fn has_amenities(&self, terms: &[String]) -> bool {
        all_terms_present(&self.amenities, terms)
    }

    /// Returns true if every term is a substring of some tag
    pub fn has_tags(&self, terms: &[String]) -> bool {
        all_terms_present(&self.tags, terms)
    }
}

fn all_terms_present(entries: &[String], terms: &[String]) -> bool {
    terms.iter().all(|term| {
        let term = term.to_lowercase();
        entries.iter().any(|e| e.to_lowercase().contains(&term))
    })
}
