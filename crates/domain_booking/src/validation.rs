//! Booking form validation
//!
//! # Rules
//!
//! ## Dates
//! - Check-in and check-out are required
//! - Check-in may not be before today in the resort's time zone
//! - Check-out must be after check-in
//! - A stay is at most `max_nights` nights
//!
//! ## Guest
//! - Name, email and phone are required; email must be well-formed
//!
//! ## Party
//! - At least one adult, at most `max_adults_per_room` adults per room
//! - At most `max_children_per_room` children per room
//! - At least one room, at most the room's booking limit
//!
//! The calculator clamps out-of-range counts when quoting; the validator is
//! what stops such a form from being submitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::{nights_between, Timezone};

use crate::booking::BookingForm;
use crate::policy::RoomPricingPolicy;

/// Party-size and stay-length limits enforced by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestLimits {
    pub max_nights: u32,
    pub max_adults_per_room: u32,
    pub max_children_per_room: u32,
}

impl Default for GuestLimits {
    fn default() -> Self {
        Self {
            max_nights: 30,
            max_adults_per_room: 4,
            max_children_per_room: 3,
        }
    }
}

/// A validation failure on one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Result of booking form validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
        self.is_valid = false;
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Messages reported for `field`, in the order they were found
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Validator for booking forms
#[derive(Debug, Clone, Default)]
pub struct BookingValidator {
    limits: GuestLimits,
    timezone: Timezone,
}

impl BookingValidator {
    pub fn new(limits: GuestLimits, timezone: Timezone) -> Self {
        Self { limits, timezone }
    }

    pub fn limits(&self) -> GuestLimits {
        self.limits
    }

    /// Validates a form against today's date at the resort
    pub fn validate(&self, form: &BookingForm, policy: &RoomPricingPolicy) -> ValidationReport {
        self.validate_on(form, policy, self.timezone.today())
    }

    /// Validates a form as if `today` were the current resort-local date
    pub fn validate_on(
        &self,
        form: &BookingForm,
        policy: &RoomPricingPolicy,
        today: NaiveDate,
    ) -> ValidationReport {
        let mut report = ValidationReport::ok();

        self.validate_dates(form, today, &mut report);
        Self::validate_customer(form, &mut report);
        self.validate_party(form, policy, &mut report);

        report
    }

    fn validate_dates(&self, form: &BookingForm, today: NaiveDate, report: &mut ValidationReport) {
        let stay = &form.stay;

        if stay.check_in.is_none() {
            report.add_error("check_in", "Check-in date is required");
        }
        if stay.check_out.is_none() {
            report.add_error("check_out", "Check-out date is required");
        }

        if let (Some(check_in), Some(check_out)) = (stay.check_in, stay.check_out) {
            if check_in < today {
                report.add_error("check_in", "Check-in cannot be in the past");
            }
            if check_out <= check_in {
                report.add_error("check_out", "Check-out must be after check-in");
            } else if nights_between(check_in, check_out) > i64::from(self.limits.max_nights) {
                report.add_error(
                    "check_out",
                    format!("Maximum stay is {} nights", self.limits.max_nights),
                );
            }
        }
    }

    fn validate_customer(form: &BookingForm, report: &mut ValidationReport) {
        let customer = &form.customer;

        if customer.name.trim().is_empty() {
            report.add_error("name", "Name is required");
        }
        if customer.email.trim().is_empty() {
            report.add_error("email", "Email is required");
        }
        if customer.phone.trim().is_empty() {
            report.add_error("phone", "Phone is required");
        }

        if let Err(errors) = customer.validate() {
            for (field, field_errors) in errors.field_errors() {
                let field = field.to_string();
                // A blank field is already reported as required
                if report.has_error(&field) {
                    continue;
                }
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    report.add_error(field.clone(), message);
                }
            }
        }
    }

    fn validate_party(
        &self,
        form: &BookingForm,
        policy: &RoomPricingPolicy,
        report: &mut ValidationReport,
    ) {
        let stay = &form.stay;
        let max_adults = stay.rooms.saturating_mul(self.limits.max_adults_per_room);
        let max_children = stay.rooms.saturating_mul(self.limits.max_children_per_room);

        if stay.adults < 1 {
            report.add_error("adults", "At least 1 adult is required");
        } else if stay.adults > max_adults {
            report.add_error(
                "adults",
                format!("Maximum {} adults for {} room(s)", max_adults, stay.rooms),
            );
        }

        if stay.children > max_children {
            report.add_error(
                "children",
                format!("Maximum {} children for {} room(s)", max_children, stay.rooms),
            );
        }

        if stay.rooms < 1 {
            report.add_error("rooms", "At least 1 room is required");
        } else if stay.rooms > policy.max_rooms_per_booking() {
            report.add_error(
                "rooms",
                format!("Maximum {} rooms per booking", policy.max_rooms_per_booking()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::CustomerContact;
    use crate::stay::StayRequest;
    use core_kernel::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy() -> RoomPricingPolicy {
        RoomPricingPolicy::builder(Money::inr(2603)).build().unwrap()
    }

    fn form() -> BookingForm {
        BookingForm::new(
            StayRequest::new(date(2025, 3, 10), date(2025, 3, 12)),
            CustomerContact::new("Asha Menon", "asha@example.com", "9876543210"),
        )
    }

    #[test]
    fn test_valid_form() {
        let report = BookingValidator::default().validate_on(&form(), &policy(), date(2025, 3, 1));
        assert!(report.is_valid, "{}", report);
    }

    #[test]
    fn test_report_display() {
        let mut report = ValidationReport::ok();
        report.add_error("name", "Name is required");
        report.add_error("phone", "Phone is required");

        assert_eq!(report.to_string(), "name: Name is required; phone: Phone is required");
    }

    #[test]
    fn test_blank_email_reported_once() {
        let mut form = form();
        form.customer.email = "  ".into();
        let report = BookingValidator::default().validate_on(&form, &policy(), date(2025, 3, 1));

        assert_eq!(report.messages_for("email"), vec!["Email is required"]);
    }
}
