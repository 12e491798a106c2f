use super::measure::{Side, UnitOfMeasure};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Room counts, car parking and amenity tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub toilets: u8,
    pub ensuites: u8,
    pub living_areas: u8,
    pub car_parking: CarParking,
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarParking {
    pub garages: u8,
    pub carports: u8,
    pub open_spaces: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandDetails {
    pub area: Option<UnitOfMeasure>,
    pub frontage: Option<UnitOfMeasure>,
    pub depths: Vec<Side>,
    pub cross_over: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingDetails {
    pub area: Option<UnitOfMeasure>,
    pub energy_rating: Option<Decimal>,
}

/// Free-text rural property attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuralFeatures {
    pub annual_rainfall: Option<String>,
    pub carrying_capacity: Option<String>,
    pub fencing: Option<String>,
    pub improvements: Option<String>,
    pub irrigation: Option<String>,
    pub services: Option<String>,
    pub soil_types: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estate {
    pub name: Option<String>,
    pub stage: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    Unknown,
    House,
    Unit,
    Townhouse,
    Villa,
    Apartment,
    Flat,
    Studio,
    Warehouse,
    DuplexSemiDetached,
    Alpine,
    AcreageSemiRural,
    Retirement,
    BlockOfUnits,
    Terrace,
    ServicedApartment,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuralCategoryType {
    #[default]
    Unknown,
    Cropping,
    Dairy,
    Farmlet,
    Horticulture,
    Livestock,
    Viticulture,
    MixedFarming,
    Lifestyle,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandCategoryType {
    #[default]
    Unknown,
    Residential,
    Commercial,
}

/// Method of sale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityType {
    #[default]
    Unknown,
    Auction,
    Exclusive,
    MultiList,
    Conjunctional,
    Open,
    Sale,
    SetSale,
    Offers,
}
