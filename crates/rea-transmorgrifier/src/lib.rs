//! Converts realestate.com.au (REA) XML listing feeds into strongly typed listings.
//!
//! The parser lives in [`rea`]; [`config`], [`telemetry`] and [`error`] carry the settings,
//! logging and error plumbing hosts share.

pub mod config;
pub mod domain;
pub mod error;
pub mod rea;
pub mod telemetry;

pub use config::{MoneyCulture, TransmorgrifierOptions};
pub use domain::{Listing, ListingCategory, StatusType};
pub use rea::{ListingResult, ParsedError, ParsedResult, ReaXmlTransmorgrifier};
