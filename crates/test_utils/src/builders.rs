//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{Duration, NaiveDate};

use core_kernel::{Money, RoomId};
use domain_booking::{BookingForm, CustomerContact, RoomPricingPolicy, StayRequest};
use domain_catalog::RoomListing;

use crate::fixtures::{ContactFixtures, DateFixtures, PolicyFixtures};

/// Builder for stay requests
///
/// Defaults to one night from the fixed fixture check-in, one room, two adults.
pub struct StayRequestBuilder {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    rooms: u32,
    adults: u32,
    children: u32,
}

impl Default for StayRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StayRequestBuilder {
    pub fn new() -> Self {
        Self {
            check_in: Some(DateFixtures::check_in()),
            check_out: Some(DateFixtures::check_out_after(1)),
            rooms: 1,
            adults: 2,
            children: 0,
        }
    }

    /// Starts at an upcoming check-in so the request passes form validation
    pub fn upcoming() -> Self {
        Self::new().starting(DateFixtures::upcoming_check_in()).nights(1)
    }

    /// Moves check-in, keeping the number of nights
    pub fn starting(mut self, check_in: NaiveDate) -> Self {
        let nights = match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => b - a,
            _ => Duration::days(1),
        };
        self.check_in = Some(check_in);
        self.check_out = Some(check_in + nights);
        self
    }

    /// Sets check-out `nights` nights after check-in (may be zero or negative)
    pub fn nights(mut self, nights: i64) -> Self {
        let check_in = self.check_in.unwrap_or_else(DateFixtures::check_in);
        self.check_in = Some(check_in);
        self.check_out = Some(check_in + Duration::days(nights));
        self
    }

    pub fn without_check_in(mut self) -> Self {
        self.check_in = None;
        self
    }

    pub fn without_check_out(mut self) -> Self {
        self.check_out = None;
        self
    }

    pub fn rooms(mut self, rooms: u32) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn adults(mut self, adults: u32) -> Self {
        self.adults = adults;
        self
    }

    pub fn children(mut self, children: u32) -> Self {
        self.children = children;
        self
    }

    pub fn build(self) -> StayRequest {
        StayRequest {
            check_in: self.check_in,
            check_out: self.check_out,
            rooms: self.rooms,
            adults: self.adults,
            children: self.children,
        }
    }
}

/// Builder for booking forms
pub struct BookingFormBuilder {
    stay: StayRequestBuilder,
    customer: CustomerContact,
}

impl Default for BookingFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFormBuilder {
    /// A valid form for an upcoming one-night stay
    pub fn new() -> Self {
        Self {
            stay: StayRequestBuilder::upcoming(),
            customer: ContactFixtures::asha(),
        }
    }

    pub fn stay(mut self, update: impl FnOnce(StayRequestBuilder) -> StayRequestBuilder) -> Self {
        self.stay = update(self.stay);
        self
    }

    pub fn customer(mut self, customer: CustomerContact) -> Self {
        self.customer = customer;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.customer.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.customer.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.customer.phone = phone.into();
        self
    }

    pub fn build(self) -> BookingForm {
        BookingForm::new(self.stay.build(), self.customer)
    }
}

/// Builder for catalog listings
pub struct ListingBuilder {
    listing: RoomListing,
}

impl ListingBuilder {
    pub fn new(id: impl Into<RoomId>) -> Self {
        Self {
            listing: RoomListing::new(id, "Test Room", "Valparai-Solaiyur", PolicyFixtures::standard()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.listing.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.listing.location = location.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.listing.description = description.into();
        self
    }

    /// Replaces the policy with the standard one at a different base price
    pub fn price(mut self, rupees: i64) -> Self {
        self.listing.policy = RoomPricingPolicy::builder(Money::inr(rupees))
            .max_adults_per_room(2)
            .max_rooms_per_booking(3)
            .build()
            .unwrap();
        self
    }

    pub fn policy(mut self, policy: RoomPricingPolicy) -> Self {
        self.listing.policy = policy;
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.listing.rating = rating;
        self
    }

    pub fn reviews(mut self, reviews: u32) -> Self {
        self.listing.reviews = reviews;
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.listing.amenities = amenities.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.listing.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> RoomListing {
        self.listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stay_builder_defaults() {
        let request = StayRequestBuilder::new().build();
        assert_eq!(request.nights(), Some(1));
        assert_eq!((request.rooms, request.adults, request.children), (1, 2, 0));
    }

    #[test]
    fn test_starting_keeps_length_of_stay() {
        let request = StayRequestBuilder::new()
            .nights(3)
            .starting(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
            .build();
        assert_eq!(request.nights(), Some(3));
    }
}
