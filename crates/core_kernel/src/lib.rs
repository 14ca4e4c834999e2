//! Core Kernel - Foundational types shared by the booking crates
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money and rate types with precise decimal arithmetic
//! - Stay periods and resort-local dates
//! - Identifiers and the port error type used by adapters

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, Rate, MoneyError};
pub use temporal::{StayPeriod, Timezone, TemporalError, nights_between};
pub use identifiers::{SubmissionId, RoomId};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
