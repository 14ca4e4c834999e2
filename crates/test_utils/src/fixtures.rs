//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the booking and catalog domains.
//! Everything except `ContactFixtures::random` is deterministic.

use chrono::{Duration, NaiveDate};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::{Money, Rate, SubmissionId, Timezone};
use domain_booking::{
    compute_quote, BookingSubmission, CustomerContact, RoomPricingPolicy, RoomSelection, Session,
    SessionUser, StayRequest,
};

/// Fixture for pricing policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// The reference policy: ₹2603 per night, 2 adults per room, up to 3
    /// rooms, ₹800 per extra adult, children free, 18% GST
    pub fn standard() -> RoomPricingPolicy {
        RoomPricingPolicy::builder(Money::inr(2603))
            .max_adults_per_room(2)
            .max_rooms_per_booking(3)
            .extra_adult_charge(Money::inr(800))
            .tax_rate(Rate::from_percentage(dec!(18)))
            .build()
            .unwrap()
    }

    /// The reference policy with ₹500 per child beyond two per room
    pub fn with_child_charge() -> RoomPricingPolicy {
        RoomPricingPolicy::builder(Money::inr(2603))
            .max_adults_per_room(2)
            .max_rooms_per_booking(3)
            .extra_adult_charge(Money::inr(800))
            .extra_child_charge(Money::inr(500))
            .max_children_per_room(2)
            .tax_rate(Rate::from_percentage(dec!(18)))
            .build()
            .unwrap()
    }

    /// A 5% GST room with no surcharges
    pub fn kothagiri_deluxe() -> RoomPricingPolicy {
        RoomPricingPolicy::builder(Money::inr(2499))
            .max_adults_per_room(3)
            .max_rooms_per_booking(4)
            .tax_rate(Rate::from_percentage(dec!(5)))
            .build()
            .unwrap()
    }

    /// A room with no price
    pub fn unpriced() -> RoomPricingPolicy {
        RoomPricingPolicy::builder(Money::inr(0)).build().unwrap()
    }
}

/// Fixture for stay dates
pub struct DateFixtures;

impl DateFixtures {
    /// Fixed check-in date for pure calculator tests
    pub fn check_in() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    /// Check-out `nights` nights after [`DateFixtures::check_in`]
    pub fn check_out_after(nights: i64) -> NaiveDate {
        Self::check_in() + Duration::days(nights)
    }

    /// Resort-local today
    pub fn today() -> NaiveDate {
        Timezone::default().today()
    }

    /// A check-in two weeks from today, for flows validated against the clock
    pub fn upcoming_check_in() -> NaiveDate {
        Self::today() + Duration::days(14)
    }

    pub fn yesterday() -> NaiveDate {
        Self::today() - Duration::days(1)
    }
}

/// Fixture for guest contact details
pub struct ContactFixtures;

impl ContactFixtures {
    /// A complete, valid contact
    pub fn asha() -> CustomerContact {
        CustomerContact::new("Asha Menon", "asha.menon@example.com", "9876543210")
    }

    /// A contact left blank apart from the phone
    pub fn phone_only() -> CustomerContact {
        CustomerContact::new("", "", "9876543210")
    }

    /// A generated valid contact
    pub fn random() -> CustomerContact {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let phone = format!("9{}", (100_000_000u64..999_999_999u64).fake::<u64>());
        CustomerContact::new(name, email, phone)
    }
}

/// Fixture for sessions
pub struct SessionFixtures;

impl SessionFixtures {
    pub fn user() -> SessionUser {
        SessionUser {
            id: "user-7f3a".into(),
            name: "Karthik Raman".into(),
            email: "karthik.raman@example.com".into(),
            picture: Some("https://example.com/karthik.png".into()),
            phone: Some("9444012345".into()),
        }
    }

    pub fn signed_in() -> Session {
        Session::signed_in(Self::user())
    }
}

/// Fixture for room selections
pub struct SelectionFixtures;

impl SelectionFixtures {
    /// The standard room at Valparai-Solaiyur
    pub fn standard_room() -> RoomSelection {
        RoomSelection {
            room_id: "1".into(),
            resort_name: "Deluxe Family Room".into(),
            room_type: "Family Room".into(),
            location: "Valparai-Solaiyur".into(),
            policy: PolicyFixtures::standard(),
        }
    }
}

/// Fixture for priced submissions, as the booking service hands them to a backend
pub struct SubmissionFixtures;

impl SubmissionFixtures {
    /// Two nights in the standard room for three adults, from a signed-in user
    pub fn standard() -> BookingSubmission {
        let room = SelectionFixtures::standard_room();
        let request = StayRequest {
            check_in: Some(DateFixtures::check_in()),
            check_out: Some(DateFixtures::check_out_after(2)),
            rooms: 1,
            adults: 3,
            children: 0,
        };
        let breakdown = compute_quote(&request, &room.policy).unwrap();

        BookingSubmission {
            id: SubmissionId::new_v7(),
            stay: breakdown.stay,
            rooms: breakdown.rooms,
            adults: breakdown.adults,
            children: breakdown.children,
            customer: ContactFixtures::asha(),
            user_id: Some(SessionFixtures::user().id),
            room,
            breakdown,
        }
    }
}
