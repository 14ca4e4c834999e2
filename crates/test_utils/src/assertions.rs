//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for quotes and booking outcomes
//! that give more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_booking::{AcknowledgmentReason, BookingReference, PriceBreakdown, SubmissionOutcome};

/// Asserts that a Money value is a whole number of rupees
pub fn assert_whole_rupees(money: &Money) {
    assert!(
        money.amount().fract().is_zero(),
        "Expected whole rupees, got {}",
        money.amount()
    );
}

/// Asserts that no line of a breakdown is negative
pub fn assert_breakdown_non_negative(breakdown: &PriceBreakdown) {
    let lines = [
        ("base_subtotal", breakdown.base_subtotal),
        ("extra_adults_surcharge", breakdown.extra_adults_surcharge),
        ("extra_children_surcharge", breakdown.extra_children_surcharge),
        ("subtotal", breakdown.subtotal),
        ("tax", breakdown.tax),
        ("total_amount", breakdown.total_amount),
    ];
    for (name, amount) in lines {
        assert!(!amount.is_negative(), "{} is negative: {}", name, amount);
    }
    assert!(breakdown.nights >= 1, "nights is {}", breakdown.nights);
    assert!(breakdown.rooms >= 1, "rooms is {}", breakdown.rooms);
    assert!(breakdown.adults >= 1, "adults is {}", breakdown.adults);
}

/// Asserts that the printed lines of a breakdown add up
///
/// base + surcharges = subtotal, and subtotal + tax = total.
pub fn assert_breakdown_adds_up(breakdown: &PriceBreakdown) {
    let lines = breakdown.base_subtotal.amount()
        + breakdown.extra_adults_surcharge.amount()
        + breakdown.extra_children_surcharge.amount();
    assert_eq!(
        lines,
        breakdown.subtotal.amount(),
        "base and surcharges {} do not add up to subtotal {}",
        lines,
        breakdown.subtotal
    );
    assert_eq!(
        breakdown.subtotal.amount() + breakdown.tax.amount(),
        breakdown.total_amount.amount(),
        "subtotal {} + tax {} != total {}",
        breakdown.subtotal,
        breakdown.tax,
        breakdown.total_amount
    );
}

/// Asserts a confirmed outcome and returns its reference
pub fn assert_confirmed(outcome: &SubmissionOutcome) -> &BookingReference {
    match outcome {
        SubmissionOutcome::Confirmed { reference } => reference,
        other => panic!("Expected a confirmed booking, got {:?}", other),
    }
}

/// Asserts a local acknowledgment and returns its reference and reason
pub fn assert_pending_local(
    outcome: &SubmissionOutcome,
) -> (&BookingReference, &AcknowledgmentReason) {
    match outcome {
        SubmissionOutcome::PendingLocalAcknowledgment {
            local_reference,
            reason,
        } => {
            assert!(
                local_reference.is_local(),
                "Local acknowledgment carries a non-local reference {}",
                local_reference
            );
            (local_reference, reason)
        }
        other => panic!("Expected a local acknowledgment, got {:?}", other),
    }
}
