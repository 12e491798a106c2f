//! Strongly typed listing model produced by the transmorgrifier.

mod address;
mod agent;
mod details;
mod listing;
mod measure;
mod media;
mod pricing;

pub use address::{compose_lot_street_number, compose_street_number, Address};
pub use agent::{Agent, Communication, CommunicationType};
pub use details::{
    AuthorityType, BuildingDetails, CarParking, Estate, Features, LandCategoryType, LandDetails,
    PropertyType, RuralCategoryType, RuralFeatures,
};
pub use listing::{
    LandListing, Listing, ListingCategory, ListingCore, RentalListing, ResidentialListing,
    RuralListing, StatusType,
};
pub use measure::{Side, UnitOfMeasure, DEFAULT_MEASURE_TYPE};
pub use media::{Inspection, Media};
pub use pricing::{PaymentFrequencyType, RentalPricing, SalePricing};
