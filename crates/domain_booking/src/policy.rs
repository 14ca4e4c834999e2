//! Room pricing policies
//!
//! A pricing policy carries everything the quote calculator needs to know
//! about a room type: its nightly tariff, standard occupancy, surcharges for
//! extra guests and the GST slab it falls under. Policies are immutable once
//! built and every invariant is checked by [`RoomPricingPolicyBuilder::build`].

use serde::Serialize;

use core_kernel::{Currency, Money, Rate};

use crate::error::BookingError;

/// Pricing policy for one room type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomPricingPolicy {
    base_price: Money,
    max_adults_per_room: u32,
    max_rooms_per_booking: u32,
    extra_adult_charge_per_night: Money,
    extra_child_charge_per_night: Option<Money>,
    max_children_per_room: Option<u32>,
    tax_rate: Rate,
}

impl RoomPricingPolicy {
    /// Starts a builder for a room priced at `base_price` per room per night
    pub fn builder(base_price: Money) -> RoomPricingPolicyBuilder {
        RoomPricingPolicyBuilder::new(base_price)
    }

    /// Price per room per night at standard occupancy
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Adults a room holds before the extra-adult surcharge applies
    pub fn max_adults_per_room(&self) -> u32 {
        self.max_adults_per_room
    }

    pub fn max_rooms_per_booking(&self) -> u32 {
        self.max_rooms_per_booking
    }

    /// Surcharge per extra adult, per room, per night
    pub fn extra_adult_charge_per_night(&self) -> Money {
        self.extra_adult_charge_per_night
    }

    /// Surcharge per child beyond the free-child threshold, if the room charges for children
    pub fn extra_child_charge_per_night(&self) -> Option<Money> {
        self.extra_child_charge_per_night
    }

    /// Children a room holds for free; `None` means every child is free
    pub fn max_children_per_room(&self) -> Option<u32> {
        self.max_children_per_room
    }

    pub fn tax_rate(&self) -> Rate {
        self.tax_rate
    }

    /// Currency every amount of this policy is expressed in
    pub fn currency(&self) -> Currency {
        self.base_price.currency()
    }

    /// Standard occupancy for `rooms` rooms
    pub fn standard_occupancy(&self, rooms: u32) -> u32 {
        self.max_adults_per_room.saturating_mul(rooms)
    }
}

/// Builder for [`RoomPricingPolicy`]
///
/// Unset fields default to two adults per room, three rooms per booking, no
/// surcharges and no tax.
#[derive(Debug, Clone)]
pub struct RoomPricingPolicyBuilder {
    base_price: Money,
    max_adults_per_room: u32,
    max_rooms_per_booking: u32,
    extra_adult_charge_per_night: Option<Money>,
    extra_child_charge_per_night: Option<Money>,
    max_children_per_room: Option<u32>,
    tax_rate: Rate,
}

impl RoomPricingPolicyBuilder {
    pub fn new(base_price: Money) -> Self {
        Self {
            base_price,
            max_adults_per_room: 2,
            max_rooms_per_booking: 3,
            extra_adult_charge_per_night: None,
            extra_child_charge_per_night: None,
            max_children_per_room: None,
            tax_rate: Rate::zero(),
        }
    }

    pub fn max_adults_per_room(mut self, adults: u32) -> Self {
        self.max_adults_per_room = adults;
        self
    }

    pub fn max_rooms_per_booking(mut self, rooms: u32) -> Self {
        self.max_rooms_per_booking = rooms;
        self
    }

    pub fn extra_adult_charge(mut self, charge: Money) -> Self {
        self.extra_adult_charge_per_night = Some(charge);
        self
    }

    pub fn extra_child_charge(mut self, charge: Money) -> Self {
        self.extra_child_charge_per_night = Some(charge);
        self
    }

    pub fn max_children_per_room(mut self, children: u32) -> Self {
        self.max_children_per_room = Some(children);
        self
    }

    pub fn tax_rate(mut self, rate: Rate) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Validates the invariants and builds the policy
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidPolicy` when an amount is negative or in
    /// another currency than the base price, when an occupancy bound is zero,
    /// or when the tax rate lies outside 0% to 100%.
    pub fn build(self) -> Result<RoomPricingPolicy, BookingError> {
        let currency = self.base_price.currency();
        let extra_adult_charge_per_night = self
            .extra_adult_charge_per_night
            .unwrap_or_else(|| Money::zero(currency));

        Self::check_amount("base price", self.base_price, currency)?;
        Self::check_amount("extra adult charge", extra_adult_charge_per_night, currency)?;
        if let Some(charge) = self.extra_child_charge_per_night {
            Self::check_amount("extra child charge", charge, currency)?;
        }

        if self.max_adults_per_room == 0 {
            return Err(BookingError::invalid_policy(
                "max adults per room must be at least 1",
            ));
        }
        if self.max_rooms_per_booking == 0 {
            return Err(BookingError::invalid_policy(
                "max rooms per booking must be at least 1",
            ));
        }

        let tax_rate = self
            .tax_rate
            .ensure_percentage_range()
            .map_err(|e| BookingError::invalid_policy(e.to_string()))?;

        Ok(RoomPricingPolicy {
            base_price: self.base_price,
            max_adults_per_room: self.max_adults_per_room,
            max_rooms_per_booking: self.max_rooms_per_booking,
            extra_adult_charge_per_night,
            extra_child_charge_per_night: self.extra_child_charge_per_night,
            max_children_per_room: self.max_children_per_room,
            tax_rate,
        })
    }

    fn check_amount(name: &str, amount: Money, currency: Currency) -> Result<(), BookingError> {
        if amount.currency() != currency {
            return Err(BookingError::invalid_policy(format!(
                "{} is in {}, expected {}",
                name,
                amount.currency(),
                currency
            )));
        }
        amount
            .ensure_non_negative()
            .map_err(|_| BookingError::invalid_policy(format!("{} must not be negative", name)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults() {
        let policy = RoomPricingPolicy::builder(Money::inr(2603)).build().unwrap();

        assert_eq!(policy.max_adults_per_room(), 2);
        assert_eq!(policy.max_rooms_per_booking(), 3);
        assert!(policy.extra_adult_charge_per_night().is_zero());
        assert!(policy.extra_child_charge_per_night().is_none());
        assert!(policy.tax_rate().is_zero());
    }

    #[test]
    fn test_negative_surcharge_rejected() {
        let result = RoomPricingPolicy::builder(Money::inr(2603))
            .extra_adult_charge(Money::inr(-800))
            .build();

        assert!(matches!(result, Err(BookingError::InvalidPolicy(_))));
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let result = RoomPricingPolicy::builder(Money::inr(2603))
            .extra_child_charge(Money::whole(10, Currency::USD))
            .build();

        assert!(matches!(result, Err(BookingError::InvalidPolicy(_))));
    }

    #[test]
    fn test_zero_occupancy_rejected() {
        assert!(RoomPricingPolicy::builder(Money::inr(2603))
            .max_adults_per_room(0)
            .build()
            .is_err());
        assert!(RoomPricingPolicy::builder(Money::inr(2603))
            .max_rooms_per_booking(0)
            .build()
            .is_err());
    }

    #[test]
    fn test_tax_rate_above_hundred_percent_rejected() {
        let result = RoomPricingPolicy::builder(Money::inr(2603))
            .tax_rate(Rate::from_percentage(dec!(118)))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_zero_base_price_is_a_valid_policy() {
        // Rejected later by the calculator, not here
        assert!(RoomPricingPolicy::builder(Money::inr(0)).build().is_ok());
    }
}
