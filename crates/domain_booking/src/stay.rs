//! Stay requests as entered on the booking form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::nights_between;

/// Dates and party size a guest asks to be quoted for
///
/// Dates stay optional because the form is quoted while it is being filled
/// in; the calculator reports a missing date as not quotable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
}

impl StayRequest {
    /// A request for the given dates with the form's default party
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
            ..Self::default()
        }
    }

    pub fn with_guests(mut self, rooms: u32, adults: u32, children: u32) -> Self {
        self.rooms = rooms;
        self.adults = adults;
        self.children = children;
        self
    }

    /// Whole nights between the dates, if both are set
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(nights_between(check_in, check_out)),
            _ => None,
        }
    }
}

impl Default for StayRequest {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            rooms: 1,
            adults: 2,
            children: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_the_form() {
        let request = StayRequest::default();
        assert_eq!((request.rooms, request.adults, request.children), (1, 2, 0));
        assert_eq!(request.nights(), None);
    }

    #[test]
    fn test_nights() {
        let request = StayRequest::new(
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        );
        assert_eq!(request.nights(), Some(3));
    }
}
