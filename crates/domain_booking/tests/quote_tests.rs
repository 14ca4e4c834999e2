//! Stay Price Calculator Tests
//!
//! # Test Coverage
//!
//! ## Reference Scenarios
//! All priced under the reference policy: ₹2603 per room per night, two
//! adults per room, up to three rooms, ₹800 per extra adult, children free,
//! 18% GST.
//!
//! ## Clamping
//! - Room counts above the booking limit and zero rooms
//! - Zero adults
//!
//! ## Not Quotable
//! - Missing dates, same-day and reversed stays, unpriced rooms
//! - Amounts too large for a `Decimal`
//!
//! ## Properties
//! - Every line is non-negative
//! - Totals never fall as nights grow
//! - Subtotal is linear in rooms when no surcharge applies
//! - Standard occupancy never draws an extra-adult surcharge
//! - Identical inputs give identical breakdowns
//! - A check-out on or before check-in is never quotable

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Rate};
use domain_booking::{compute_quote, NotQuotable, QuoteAdjustment, RoomPricingPolicy};
use test_utils::{
    assert_breakdown_adds_up, assert_breakdown_non_negative, assert_whole_rupees,
    nights_strategy, policy_strategy, stay_request_strategy, PolicyFixtures, StayRequestBuilder,
};

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

mod reference_scenarios {
    use super::*;

    /// One night, one room, two adults
    #[test]
    fn test_single_night_standard_occupancy() {
        let request = StayRequestBuilder::new().nights(1).rooms(1).adults(2).build();
        let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

        assert_eq!(quote.base_subtotal, Money::inr(2603));
        assert_eq!(quote.extra_adults_surcharge, Money::inr(0));
        assert_eq!(quote.subtotal, Money::inr(2603));
        assert_eq!(quote.tax, Money::inr(469));
        assert_eq!(quote.total_amount, Money::inr(3072));
        assert!(quote.adjustments.is_empty());
    }

    /// Two nights, one room, three adults
    #[test]
    fn test_one_extra_adult_over_two_nights() {
        let request = StayRequestBuilder::new().nights(2).rooms(1).adults(3).build();
        let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

        assert_eq!(quote.adults_per_room, 3);
        assert_eq!(quote.extra_adults_per_room, 1);
        assert_eq!(quote.extra_adults_surcharge, Money::inr(1600));
        assert_eq!(quote.base_subtotal, Money::inr(5206));
        assert_eq!(quote.subtotal, Money::inr(6806));
        assert_eq!(quote.tax, Money::inr(1225));
        assert_eq!(quote.total_amount, Money::inr(8031));
    }

    /// Three nights, two rooms, five adults: three to a room, one extra each
    #[test]
    fn test_extra_adults_spread_over_rooms() {
        let request = StayRequestBuilder::new().nights(3).rooms(2).adults(5).build();
        let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

        assert_eq!(quote.adults_per_room, 3);
        assert_eq!(quote.extra_adults_surcharge, Money::inr(4800));
        assert_eq!(quote.base_subtotal, Money::inr(15618));
        assert_eq!(quote.subtotal, Money::inr(20418));
        assert_eq!(quote.tax, Money::inr(3675));
        assert_eq!(quote.total_amount, Money::inr(24093));
    }

    #[test]
    fn test_five_percent_slab() {
        let request = StayRequestBuilder::new().nights(2).rooms(1).adults(3).build();
        let quote = compute_quote(&request, &PolicyFixtures::kothagiri_deluxe()).unwrap();

        // 2499 x 2 = 4998, 5% = 249.9
        assert_eq!(quote.subtotal, Money::inr(4998));
        assert_eq!(quote.tax, Money::inr(250));
        assert_eq!(quote.total_amount, Money::inr(5248));
        assert_eq!(quote.tax_rate, Rate::from_percentage(dec!(5)));
    }

    #[test]
    fn test_children_beyond_free_threshold() {
        let request = StayRequestBuilder::new().nights(1).rooms(1).adults(2).children(3).build();
        let quote = compute_quote(&request, &PolicyFixtures::with_child_charge()).unwrap();

        assert_eq!(quote.children_per_room, 3);
        assert_eq!(quote.extra_children_per_room, 1);
        assert_eq!(quote.extra_children_surcharge, Money::inr(500));
        assert_eq!(quote.subtotal, Money::inr(3103));
    }

    #[test]
    fn test_half_rupee_tax_rounds_up() {
        let policy = RoomPricingPolicy::builder(Money::inr(2125))
            .tax_rate(Rate::from_percentage(dec!(18)))
            .build()
            .unwrap();
        let request = StayRequestBuilder::new().nights(1).build();
        let quote = compute_quote(&request, &policy).unwrap();

        // 2125 x 18% = 382.50
        assert_eq!(quote.tax, Money::inr(383));
        assert_eq!(quote.total_amount, Money::inr(2508));
    }
}

// ============================================================================
// CLAMPING
// ============================================================================

mod clamping {
    use super::*;

    #[test]
    fn test_rooms_clamped_to_booking_limit() {
        let request = StayRequestBuilder::new().nights(1).rooms(5).adults(2).build();
        let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

        assert_eq!(quote.rooms, 3);
        assert_eq!(quote.base_subtotal, Money::inr(7809));
        assert_eq!(
            quote.adjustments,
            vec![QuoteAdjustment::RoomsAdjusted { requested: 5, applied: 3 }]
        );
    }

    #[test]
    fn test_zero_rooms_raised_to_one() {
        let request = StayRequestBuilder::new().rooms(0).build();
        let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

        assert_eq!(quote.rooms, 1);
        assert!(quote
            .adjustments
            .contains(&QuoteAdjustment::RoomsAdjusted { requested: 0, applied: 1 }));
    }

    #[test]
    fn test_both_adjustments_reported() {
        let request = StayRequestBuilder::new().rooms(4).adults(0).build();
        let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

        assert_eq!(quote.adjustments.len(), 2);
        assert!(quote.was_adjusted());
    }

    #[test]
    fn test_many_adults_are_not_capped() {
        let request = StayRequestBuilder::new().rooms(1).adults(9).build();
        let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

        assert_eq!(quote.adults, 9);
        assert_eq!(quote.extra_adults_per_room, 7);
        assert_eq!(quote.extra_adults_surcharge, Money::inr(5600));
    }
}

// ============================================================================
// NOT QUOTABLE
// ============================================================================

mod not_quotable {
    use super::*;

    #[test]
    fn test_same_day_check_out() {
        let request = StayRequestBuilder::new().nights(0).build();
        let result = compute_quote(&request, &PolicyFixtures::standard());

        assert!(matches!(result, Err(NotQuotable::InvalidDateRange { .. })));
    }

    #[test]
    fn test_check_out_before_check_in() {
        let request = StayRequestBuilder::new().nights(-2).build();

        assert!(compute_quote(&request, &PolicyFixtures::standard()).is_err());
    }

    #[test]
    fn test_missing_check_in() {
        let request = StayRequestBuilder::new().without_check_in().build();
        let result = compute_quote(&request, &PolicyFixtures::standard());

        assert_eq!(
            result,
            Err(NotQuotable::InvalidDateRange {
                check_in: None,
                check_out: request.check_out,
            })
        );
    }

    #[test]
    fn test_unpriced_room() {
        let request = StayRequestBuilder::new().build();
        let result = compute_quote(&request, &PolicyFixtures::unpriced());

        assert_eq!(result, Err(NotQuotable::ZeroBasePrice));
    }

    #[test]
    fn test_amount_beyond_decimal_range() {
        let policy = RoomPricingPolicy::builder(Money::new(
            dec!(1000000000000000000000000),
            Currency::INR,
        ))
        .max_rooms_per_booking(u32::MAX)
        .tax_rate(Rate::from_percentage(dec!(18)))
        .build()
        .unwrap();
        let request = StayRequestBuilder::new().nights(100_000).rooms(3).build();

        assert_eq!(
            compute_quote(&request, &policy),
            Err(NotQuotable::AmountOutOfRange)
        );
    }

    #[test]
    fn test_reason_serializes_with_kind() {
        let json = serde_json::to_value(NotQuotable::ZeroBasePrice).unwrap();
        assert_eq!(json["kind"], "zero_base_price");
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn every_line_is_non_negative(
            request in stay_request_strategy(),
            policy in policy_strategy(),
        ) {
            let quote = compute_quote(&request, &policy).unwrap();
            assert_breakdown_non_negative(&quote);
            assert_whole_rupees(&quote.total_amount);
            assert_breakdown_adds_up(&quote);
        }

        #[test]
        fn total_never_falls_as_nights_grow(
            request in stay_request_strategy(),
            policy in policy_strategy(),
            extra in 1i64..10i64,
        ) {
            let shorter = compute_quote(&request, &policy).unwrap();

            let mut longer_request = request;
            longer_request.check_out = request.check_out.map(|d| d + chrono::Duration::days(extra));
            let longer = compute_quote(&longer_request, &policy).unwrap();

            prop_assert!(longer.total_amount.amount() >= shorter.total_amount.amount());
            prop_assert!(longer.subtotal.amount() > shorter.subtotal.amount());
        }

        #[test]
        fn subtotal_is_linear_in_rooms_without_surcharges(
            nights in nights_strategy(),
            rooms in 1u32..=3u32,
        ) {
            let policy = PolicyFixtures::standard();
            let single = compute_quote(
                &StayRequestBuilder::new().nights(nights).rooms(1).adults(2).build(),
                &policy,
            ).unwrap();
            let many = compute_quote(
                &StayRequestBuilder::new().nights(nights).rooms(rooms).adults(2 * rooms).build(),
                &policy,
            ).unwrap();

            prop_assert!(many.surcharges().unwrap().is_zero());
            prop_assert_eq!(
                many.subtotal.amount(),
                single.subtotal.amount() * rust_decimal::Decimal::from(rooms)
            );
        }

        #[test]
        fn standard_occupancy_has_no_extra_adult_surcharge(
            nights in nights_strategy(),
            rooms in 1u32..=3u32,
            per_room in 1u32..=2u32,
            spare in 0u32..=1u32,
        ) {
            let adults = (rooms * per_room).saturating_sub(spare).max(1);
            let request = StayRequestBuilder::new()
                .nights(nights)
                .rooms(rooms)
                .adults(adults)
                .build();
            let quote = compute_quote(&request, &PolicyFixtures::standard()).unwrap();

            prop_assert!(adults <= rooms * 2);
            prop_assert!(quote.extra_adults_surcharge.is_zero());
        }

        #[test]
        fn identical_inputs_give_identical_quotes(
            request in stay_request_strategy(),
            policy in policy_strategy(),
        ) {
            prop_assert_eq!(compute_quote(&request, &policy), compute_quote(&request, &policy));
        }

        #[test]
        fn check_out_not_after_check_in_is_not_quotable(
            nights in -30i64..=0i64,
            policy in policy_strategy(),
        ) {
            let request = StayRequestBuilder::new().nights(nights).build();
            let is_not_quotable = compute_quote(&request, &policy).is_err();
            prop_assert!(is_not_quotable);
        }
    }
}
