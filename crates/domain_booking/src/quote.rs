//! Stay price calculator
//!
//! Turns a [`StayRequest`] and a room's [`RoomPricingPolicy`] into a
//! [`PriceBreakdown`]. The calculation is pure: identical inputs always give
//! identical breakdowns, and nothing is logged or fetched.
//!
//! # Calculation
//!
//! ```text
//! adults_per_room         = ceil(adults / rooms)
//! extra_adults_per_room   = max(0, adults_per_room - max_adults_per_room)
//! extra_adults_surcharge  = extra_adults_per_room x extra_adult_charge x nights x rooms
//!
//! children_per_room       = ceil(children / rooms)
//! extra_children_per_room = max(0, children_per_room - free_children_per_room)
//! extra_children_surcharge= extra_children_per_room x extra_child_charge x nights x rooms
//!
//! base_subtotal = base_price x rooms x nights
//! subtotal      = base_subtotal + extra_adults_surcharge + extra_children_surcharge
//! tax           = subtotal x tax_rate
//! total_amount  = round(subtotal) + round(tax)
//! ```
//!
//! Every line is rounded half-up to the currency's quote precision on its
//! own. Tax is taken from the subtotal before that rounding. Amounts too large
//! for a `Decimal` make the stay [`NotQuotable::AmountOutOfRange`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{nights_between, Money, MoneyError, Rate, StayPeriod};

use crate::policy::RoomPricingPolicy;
use crate::stay::StayRequest;

/// Reasons a stay cannot be priced
///
/// These are ordinary outcomes of filling in a form, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotQuotable {
    /// A date is missing or check-out is not after check-in
    #[error("check-in and check-out are required and check-out must be after check-in")]
    InvalidDateRange {
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    },

    /// The stay does not span a positive number of nights
    #[error("stay spans {nights} nights")]
    ZeroOrNegativeNights { nights: i64 },

    /// The room has no price
    #[error("room has no base price")]
    ZeroBasePrice,

    /// A line of the breakdown does not fit in a `Decimal`
    #[error("stay amount is out of range")]
    AmountOutOfRange,
}

/// A correction the calculator made to the request before pricing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteAdjustment {
    /// Room count was clamped to the policy's booking limit (or raised to one)
    RoomsAdjusted { requested: u32, applied: u32 },
    /// Adult count was raised to one
    AdultsAdjusted { requested: u32, applied: u32 },
}

/// Itemised price of a stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub stay: StayPeriod,
    pub nights: u32,
    /// Rooms actually priced, after clamping
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
    pub adults_per_room: u32,
    pub extra_adults_per_room: u32,
    pub children_per_room: u32,
    pub extra_children_per_room: u32,
    pub base_subtotal: Money,
    pub extra_adults_surcharge: Money,
    pub extra_children_surcharge: Money,
    pub subtotal: Money,
    pub tax_rate: Rate,
    pub tax: Money,
    pub total_amount: Money,
    pub adjustments: Vec<QuoteAdjustment>,
}

impl PriceBreakdown {
    /// Returns true if the request had to be corrected before pricing
    pub fn was_adjusted(&self) -> bool {
        !self.adjustments.is_empty()
    }

    /// Sum of both guest surcharges
    pub fn surcharges(&self) -> Result<Money, MoneyError> {
        self.extra_adults_surcharge
            .checked_add(&self.extra_children_surcharge)
    }
}

/// Prices a stay under a room's pricing policy
///
/// Room and adult counts outside the policy are clamped rather than rejected,
/// and every correction is listed in [`PriceBreakdown::adjustments`].
///
/// # Errors
///
/// Returns [`NotQuotable`] when a date is missing, check-out is not after
/// check-in, or the room has a zero base price.
pub fn compute_quote(
    request: &StayRequest,
    policy: &RoomPricingPolicy,
) -> Result<PriceBreakdown, NotQuotable> {
    let invalid_range = NotQuotable::InvalidDateRange {
        check_in: request.check_in,
        check_out: request.check_out,
    };
    let (check_in, check_out) = match (request.check_in, request.check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err(invalid_range),
    };
    let stay = StayPeriod::new(check_in, check_out).map_err(|_| invalid_range)?;

    let days = nights_between(check_in, check_out);
    let nights = u32::try_from(days)
        .ok()
        .filter(|n| *n > 0)
        .ok_or(NotQuotable::ZeroOrNegativeNights { nights: days })?;

    if policy.base_price().is_zero() {
        return Err(NotQuotable::ZeroBasePrice);
    }

    let mut adjustments = Vec::new();

    let rooms = request.rooms.min(policy.max_rooms_per_booking()).max(1);
    if rooms != request.rooms {
        adjustments.push(QuoteAdjustment::RoomsAdjusted {
            requested: request.rooms,
            applied: rooms,
        });
    }

    let adults = request.adults.max(1);
    if adults != request.adults {
        adjustments.push(QuoteAdjustment::AdultsAdjusted {
            requested: request.adults,
            applied: adults,
        });
    }

    let children = request.children;

    let adults_per_room = adults.div_ceil(rooms);
    let extra_adults_per_room = adults_per_room.saturating_sub(policy.max_adults_per_room());

    let children_per_room = children.div_ceil(rooms);
    let free_children_per_room = policy.max_children_per_room().unwrap_or(children);
    let extra_children_per_room = children_per_room.saturating_sub(free_children_per_room);

    let lines = price_lines(
        policy,
        rooms,
        nights,
        extra_adults_per_room,
        extra_children_per_room,
    )
    .map_err(|_| NotQuotable::AmountOutOfRange)?;

    Ok(PriceBreakdown {
        stay,
        nights,
        rooms,
        adults,
        children,
        adults_per_room,
        extra_adults_per_room,
        children_per_room,
        extra_children_per_room,
        base_subtotal: lines.base_subtotal,
        extra_adults_surcharge: lines.extra_adults_surcharge,
        extra_children_surcharge: lines.extra_children_surcharge,
        subtotal: lines.subtotal,
        tax_rate: policy.tax_rate(),
        tax: lines.tax,
        total_amount: lines.total_amount,
        adjustments,
    })
}

/// Rounded money lines of a breakdown
struct QuoteLines {
    base_subtotal: Money,
    extra_adults_surcharge: Money,
    extra_children_surcharge: Money,
    subtotal: Money,
    tax: Money,
    total_amount: Money,
}

fn price_lines(
    policy: &RoomPricingPolicy,
    rooms: u32,
    nights: u32,
    extra_adults_per_room: u32,
    extra_children_per_room: u32,
) -> Result<QuoteLines, MoneyError> {
    let base_subtotal = policy.base_price().times(rooms)?.times(nights)?;
    let extra_adults_surcharge = policy
        .extra_adult_charge_per_night()
        .times(extra_adults_per_room)?
        .times(nights)?
        .times(rooms)?;
    let extra_children_surcharge = match policy.extra_child_charge_per_night() {
        Some(charge) => charge
            .times(extra_children_per_room)?
            .times(nights)?
            .times(rooms)?,
        None => Money::zero(policy.currency()),
    };

    let subtotal = base_subtotal
        .checked_add(&extra_adults_surcharge)?
        .checked_add(&extra_children_surcharge)?;
    let tax = policy.tax_rate().apply(&subtotal)?;

    let subtotal = subtotal.round_for_quote();
    let tax = tax.round_for_quote();

    Ok(QuoteLines {
        base_subtotal: base_subtotal.round_for_quote(),
        extra_adults_surcharge: extra_adults_surcharge.round_for_quote(),
        extra_children_surcharge: extra_children_surcharge.round_for_quote(),
        total_amount: subtotal.checked_add(&tax)?,
        subtotal,
        tax,
    })
}
