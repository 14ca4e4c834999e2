//! Request and response bodies

pub mod bookings;
pub mod quotes;
pub mod rooms;
