//! bhub-core
//!
//! Booking logic and services for BanquetHub.
//! Depends on bhub-domain. No CLI, no terminal I/O, no direct file access.

pub mod auth_service;
pub mod catalog;
pub mod contact_service;
pub mod dashboard_service;
pub mod error;
pub mod format;
pub mod pricing;
pub mod schedule_form;
pub mod session;
pub mod submission;
pub mod surface;
pub mod validation;
pub mod venue_filter;
pub mod wizard;

pub use auth_service::*;
pub use catalog::*;
pub use contact_service::*;
pub use dashboard_service::*;
pub use error::{AuthError, CoreError};
pub use pricing::*;
pub use schedule_form::*;
pub use session::*;
pub use submission::*;
pub use surface::*;
pub use validation::*;
pub use venue_filter::*;
pub use wizard::*;

#[cfg(test)]
mod tests;
