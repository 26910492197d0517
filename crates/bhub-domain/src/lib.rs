//! bhub-domain
//!
//! Pure domain models (Venue, AddOnService, PaymentMethod, ContactDetails, Booking, etc.).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod booking;
pub mod common;
pub mod contact;
pub mod event;
pub mod payment;
pub mod schedule;
pub mod service;
pub mod user;
pub mod venue;

pub use booking::*;
pub use common::*;
pub use contact::*;
pub use event::*;
pub use payment::*;
pub use schedule::*;
pub use service::*;
pub use user::*;
pub use venue::*;
