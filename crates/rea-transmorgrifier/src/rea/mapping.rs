use super::normalizer::normalize_token;
use crate::domain::{
    AuthorityType, CommunicationType, LandCategoryType, PaymentFrequencyType, PropertyType,
    RuralCategoryType, StatusType,
};
use std::collections::HashMap;
use std::sync::OnceLock;

static STATUS_MAP: OnceLock<HashMap<String, StatusType>> = OnceLock::new();
static PROPERTY_TYPE_MAP: OnceLock<HashMap<String, PropertyType>> = OnceLock::new();
static RURAL_CATEGORY_MAP: OnceLock<HashMap<String, RuralCategoryType>> = OnceLock::new();
static LAND_CATEGORY_MAP: OnceLock<HashMap<String, LandCategoryType>> = OnceLock::new();
static AUTHORITY_MAP: OnceLock<HashMap<String, AuthorityType>> = OnceLock::new();

const STATUSES: &[(&str, StatusType)] = &[
    ("current", StatusType::Available),
    ("sold", StatusType::Sold),
    ("leased", StatusType::Leased),
    ("withdrawn", StatusType::Removed),
    ("offmarket", StatusType::Removed),
    ("deleted", StatusType::Removed),
];

const PROPERTY_TYPES: &[(&str, PropertyType)] = &[
    ("House", PropertyType::House),
    ("Unit", PropertyType::Unit),
    ("Townhouse", PropertyType::Townhouse),
    ("Villa", PropertyType::Villa),
    ("Apartment", PropertyType::Apartment),
    ("Flat", PropertyType::Flat),
    ("Studio", PropertyType::Studio),
    ("Warehouse", PropertyType::Warehouse),
    ("DuplexSemi-detached", PropertyType::DuplexSemiDetached),
    ("Duplex", PropertyType::DuplexSemiDetached),
    ("Alpine", PropertyType::Alpine),
    ("AcreageSemi-rural", PropertyType::AcreageSemiRural),
    ("Acreage", PropertyType::AcreageSemiRural),
    ("Retirement", PropertyType::Retirement),
    ("BlockOfUnits", PropertyType::BlockOfUnits),
    ("Terrace", PropertyType::Terrace),
    ("ServicedApartment", PropertyType::ServicedApartment),
    ("Other", PropertyType::Other),
];

const RURAL_CATEGORIES: &[(&str, RuralCategoryType)] = &[
    ("Cropping", RuralCategoryType::Cropping),
    ("Dairy", RuralCategoryType::Dairy),
    ("Farmlet", RuralCategoryType::Farmlet),
    ("Horticulture", RuralCategoryType::Horticulture),
    ("Livestock", RuralCategoryType::Livestock),
    ("Viticulture", RuralCategoryType::Viticulture),
    ("MixedFarming", RuralCategoryType::MixedFarming),
    ("Lifestyle", RuralCategoryType::Lifestyle),
    ("Other", RuralCategoryType::Other),
];

const LAND_CATEGORIES: &[(&str, LandCategoryType)] = &[
    ("Residential", LandCategoryType::Residential),
    ("Commercial", LandCategoryType::Commercial),
];

const AUTHORITIES: &[(&str, AuthorityType)] = &[
    ("auction", AuthorityType::Auction),
    ("exclusive", AuthorityType::Exclusive),
    ("multiList", AuthorityType::MultiList),
    ("conjunctional", AuthorityType::Conjunctional),
    ("open", AuthorityType::Open),
    ("sale", AuthorityType::Sale),
    ("setSale", AuthorityType::SetSale),
    ("offers", AuthorityType::Offers),
];

fn build<T: Copy>(table: &[(&str, T)]) -> HashMap<String, T> {
    table
        .iter()
        .map(|(name, value)| (normalize_token(name), *value))
        .collect()
}

fn allowed(table: &[(&str, impl Copy)]) -> String {
    table
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn status_for(value: &str) -> Option<StatusType> {
    STATUS_MAP
        .get_or_init(|| build(STATUSES))
        .get(&normalize_token(value))
        .copied()
}

pub(crate) fn property_type_for(value: &str) -> Option<PropertyType> {
    PROPERTY_TYPE_MAP
        .get_or_init(|| build(PROPERTY_TYPES))
        .get(&normalize_token(value))
        .copied()
}

pub(crate) fn rural_category_for(value: &str) -> Option<RuralCategoryType> {
    RURAL_CATEGORY_MAP
        .get_or_init(|| build(RURAL_CATEGORIES))
        .get(&normalize_token(value))
        .copied()
}

pub(crate) fn land_category_for(value: &str) -> Option<LandCategoryType> {
    LAND_CATEGORY_MAP
        .get_or_init(|| build(LAND_CATEGORIES))
        .get(&normalize_token(value))
        .copied()
}

pub(crate) fn authority_for(value: &str) -> AuthorityType {
    AUTHORITY_MAP
        .get_or_init(|| build(AUTHORITIES))
        .get(&normalize_token(value))
        .copied()
        .unwrap_or_default()
}

pub(crate) fn allowed_property_types() -> String {
    allowed(PROPERTY_TYPES)
}

pub(crate) fn allowed_rural_categories() -> String {
    allowed(RURAL_CATEGORIES)
}

pub(crate) fn allowed_land_categories() -> String {
    allowed(LAND_CATEGORIES)
}

/// Rent period vocabulary; unmatched text is `Unknown`.
pub(crate) fn payment_frequency_for(value: &str) -> PaymentFrequencyType {
    match normalize_token(value).as_str() {
        "week" | "weekly" => PaymentFrequencyType::Weekly,
        "month" | "monthly" => PaymentFrequencyType::Monthly,
        _ => PaymentFrequencyType::Unknown,
    }
}

/// `telephone@type` vocabulary.
pub(crate) fn telephone_type_for(value: &str) -> CommunicationType {
    match normalize_token(value).as_str() {
        "bh" | "ah" | "landline" | "phone" => CommunicationType::Landline,
        "mobile" | "cell" => CommunicationType::Mobile,
        "fax" | "facsimile" => CommunicationType::Facsimile,
        _ => CommunicationType::Unknown,
    }
}
