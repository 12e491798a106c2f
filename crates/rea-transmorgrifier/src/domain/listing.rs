use super::address::Address;
use super::agent::Agent;
use super::details::{
    AuthorityType, BuildingDetails, Estate, Features, LandCategoryType, LandDetails, PropertyType,
    RuralCategoryType, RuralFeatures,
};
use super::media::{Inspection, Media};
use super::pricing::{RentalPricing, SalePricing};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    Available,
    Sold,
    Leased,
    Removed,
}

impl StatusType {
    pub fn label(&self) -> &'static str {
        match self {
            StatusType::Available => "Available",
            StatusType::Sold => "Sold",
            StatusType::Leased => "Leased",
            StatusType::Removed => "Removed",
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four listing shapes the feed can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingCategory {
    Residential,
    Rental,
    Rural,
    Land,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 4] = [
        ListingCategory::Residential,
        ListingCategory::Rental,
        ListingCategory::Rural,
        ListingCategory::Land,
    ];

    /// Root element name used by the vendor feed.
    pub fn element_name(&self) -> &'static str {
        match self {
            ListingCategory::Residential => "residential",
            ListingCategory::Rental => "rental",
            ListingCategory::Rural => "rural",
            ListingCategory::Land => "land",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.element_name() == name)
    }
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// Attributes shared by every listing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCore {
    pub agency_id: String,
    pub id: String,
    pub status_type: StatusType,
    pub source_status: String,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<Address>,
    pub authority: AuthorityType,
    pub agents: Vec<Agent>,
    pub images: Vec<Media>,
    pub floor_plans: Vec<Media>,
    pub videos: Vec<Media>,
    pub documents: Vec<Media>,
    pub inspections: Vec<Inspection>,
    pub links: Vec<String>,
    pub features: Option<Features>,
    pub land_details: Option<LandDetails>,
}

impl ListingCore {
    /// A listing carrying only identity, status and timestamps.
    pub fn new(
        agency_id: impl Into<String>,
        id: impl Into<String>,
        status_type: StatusType,
        source_status: impl Into<String>,
        updated_on: NaiveDateTime,
    ) -> Self {
        Self {
            agency_id: agency_id.into(),
            id: id.into(),
            status_type,
            source_status: source_status.into(),
            created_on: updated_on,
            updated_on,
            title: None,
            description: None,
            address: None,
            authority: AuthorityType::Unknown,
            agents: Vec::new(),
            images: Vec::new(),
            floor_plans: Vec::new(),
            videos: Vec::new(),
            documents: Vec::new(),
            inspections: Vec::new(),
            links: Vec::new(),
            features: None,
            land_details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentialListing {
    pub core: ListingCore,
    pub property_type: PropertyType,
    pub pricing: Option<SalePricing>,
    pub auction_on: Option<NaiveDateTime>,
    pub building_details: Option<BuildingDetails>,
    pub council_rates: Option<String>,
    pub is_home_land_package: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalListing {
    pub core: ListingCore,
    pub property_type: PropertyType,
    pub pricing: Option<RentalPricing>,
    pub available_on: Option<NaiveDateTime>,
    pub building_details: Option<BuildingDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuralListing {
    pub core: ListingCore,
    pub category_type: RuralCategoryType,
    pub pricing: Option<SalePricing>,
    pub auction_on: Option<NaiveDateTime>,
    pub building_details: Option<BuildingDetails>,
    pub rural_features: Option<RuralFeatures>,
    pub council_rates: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandListing {
    pub core: ListingCore,
    pub category_type: LandCategoryType,
    pub pricing: Option<SalePricing>,
    pub auction_on: Option<NaiveDateTime>,
    pub estate: Option<Estate>,
    pub council_rates: Option<String>,
}

/// A fully typed listing, one variant per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing {
    Residential(ResidentialListing),
    Rental(RentalListing),
    Rural(RuralListing),
    Land(LandListing),
}

impl Listing {
    pub fn core(&self) -> &ListingCore {
        match self {
            Listing::Residential(listing) => &listing.core,
            Listing::Rental(listing) => &listing.core,
            Listing::Rural(listing) => &listing.core,
            Listing::Land(listing) => &listing.core,
        }
    }

    pub fn core_mut(&mut self) -> &mut ListingCore {
        match self {
            Listing::Residential(listing) => &mut listing.core,
            Listing::Rental(listing) => &mut listing.core,
            Listing::Rural(listing) => &mut listing.core,
            Listing::Land(listing) => &mut listing.core,
        }
    }

    pub fn category(&self) -> ListingCategory {
        match self {
            Listing::Residential(_) => ListingCategory::Residential,
            Listing::Rental(_) => ListingCategory::Rental,
            Listing::Rural(_) => ListingCategory::Rural,
            Listing::Land(_) => ListingCategory::Land,
        }
    }

    pub fn agency_id(&self) -> &str {
        &self.core().agency_id
    }

    pub fn id(&self) -> &str {
        &self.core().id
    }

    pub fn status_type(&self) -> StatusType {
        self.core().status_type
    }

    /// Sale pricing for the categories that carry it.
    pub fn sale_pricing(&self) -> Option<&SalePricing> {
        match self {
            Listing::Residential(listing) => listing.pricing.as_ref(),
            Listing::Rural(listing) => listing.pricing.as_ref(),
            Listing::Land(listing) => listing.pricing.as_ref(),
            Listing::Rental(_) => None,
        }
    }

    pub fn auction_on(&self) -> Option<NaiveDateTime> {
        match self {
            Listing::Residential(listing) => listing.auction_on,
            Listing::Rural(listing) => listing.auction_on,
            Listing::Land(listing) => listing.auction_on,
            Listing::Rental(_) => None,
        }
    }
}
