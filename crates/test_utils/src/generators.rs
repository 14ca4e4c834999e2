//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Money, Rate};
use domain_booking::{RoomPricingPolicy, StayRequest};

use crate::fixtures::DateFixtures;

/// Strategy for a positive number of nights up to the form's 30-night limit
pub fn nights_strategy() -> impl Strategy<Value = i64> {
    1i64..=30i64
}

/// Strategy for room counts, including zero and counts above any policy limit
pub fn rooms_strategy() -> impl Strategy<Value = u32> {
    0u32..=6u32
}

/// Strategy for adult counts, including zero
pub fn adults_strategy() -> impl Strategy<Value = u32> {
    0u32..=20u32
}

pub fn children_strategy() -> impl Strategy<Value = u32> {
    0u32..=12u32
}

/// Strategy for stay requests starting at the fixture check-in
pub fn stay_request_strategy() -> impl Strategy<Value = StayRequest> {
    (nights_strategy(), rooms_strategy(), adults_strategy(), children_strategy()).prop_map(
        |(nights, rooms, adults, children)| StayRequest {
            check_in: Some(DateFixtures::check_in()),
            check_out: Some(DateFixtures::check_out_after(nights)),
            rooms,
            adults,
            children,
        },
    )
}

/// Strategy for whole-rupee amounts up to ₹20,000
pub fn rupees_strategy() -> impl Strategy<Value = i64> {
    0i64..=20_000i64
}

/// Strategy for GST slabs, including fractional percentages
pub fn tax_rate_strategy() -> impl Strategy<Value = Rate> {
    prop_oneof![
        Just(Rate::zero()),
        Just(Rate::from_percentage(Decimal::from(5))),
        Just(Rate::from_percentage(Decimal::from(12))),
        Just(Rate::from_percentage(Decimal::from(18))),
        (0i64..=2800i64).prop_map(|bp| Rate::from_percentage(Decimal::new(bp, 2))),
    ]
}

/// Strategy for valid, priced room policies
pub fn policy_strategy() -> impl Strategy<Value = RoomPricingPolicy> {
    (
        1i64..=20_000i64,
        1u32..=7u32,
        1u32..=4u32,
        rupees_strategy(),
        proptest::option::of((rupees_strategy(), 0u32..=3u32)),
        tax_rate_strategy(),
    )
        .prop_map(|(base, max_adults, max_rooms, extra_adult, child, tax)| {
            let mut builder = RoomPricingPolicy::builder(Money::inr(base))
                .max_adults_per_room(max_adults)
                .max_rooms_per_booking(max_rooms)
                .extra_adult_charge(Money::inr(extra_adult))
                .tax_rate(tax);
            if let Some((charge, free_children)) = child {
                builder = builder
                    .extra_child_charge(Money::inr(charge))
                    .max_children_per_room(free_children);
            }
            builder.build().unwrap()
        })
}
