//! Field-level merge of a freshly built listing onto a caller's existing listing.
//!
//! A field group is copied from the fresh listing only when the segment carried it. Groups the
//! segment never mentioned keep the existing value; a group that was present but empty (or a
//! date placeholder) clears it.

use super::error::ClassificationError;
use crate::domain::{Listing, ListingCore, SalePricing};
use std::collections::BTreeSet;

/// Field groups a segment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListingField {
    Title,
    Description,
    Address,
    Authority,
    Agents,
    Images,
    FloorPlans,
    Videos,
    Documents,
    Inspections,
    Links,
    Features,
    LandDetails,
    PropertyType,
    CategoryType,
    SalePrice,
    UnderOffer,
    SoldPrice,
    SoldOn,
    AuctionOn,
    RentalPrice,
    Bond,
    AvailableOn,
    BuildingDetails,
    CouncilRates,
    HomeLandPackage,
    RuralFeatures,
    Estate,
}

/// The field groups present in one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(BTreeSet<ListingField>);

impl FieldSet {
    pub fn insert(&mut self, field: ListingField) {
        self.0.insert(field);
    }

    pub fn insert_if(&mut self, present: bool, field: ListingField) {
        if present {
            self.insert(field);
        }
    }

    pub fn contains(&self, field: ListingField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<ListingField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = ListingField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Produces a new listing from `existing` updated with the present fields of `fresh`.
///
/// Identity, status and `updated_on` always come from `fresh`; `created_on` is kept from
/// `existing`. `existing` is only read.
pub fn merge(
    fresh: Listing,
    fields: &FieldSet,
    existing: &Listing,
) -> Result<Listing, ClassificationError> {
    if fresh.category() != existing.category() {
        return Err(ClassificationError::CategoryMismatch {
            listing_id: existing.id().to_string(),
            existing: existing.category().to_string(),
            segment: fresh.category().to_string(),
        });
    }

    let mut merged = existing.clone();
    merge_core(merged.core_mut(), fresh.core(), fields);

    match (&mut merged, fresh) {
        (Listing::Residential(target), Listing::Residential(source)) => {
            take(&mut target.property_type, source.property_type, fields, ListingField::PropertyType);
            merge_sale_pricing(&mut target.pricing, source.pricing, fields);
            take(&mut target.auction_on, source.auction_on, fields, ListingField::AuctionOn);
            take(&mut target.building_details, source.building_details, fields, ListingField::BuildingDetails);
            take(&mut target.council_rates, source.council_rates, fields, ListingField::CouncilRates);
            take(&mut target.is_home_land_package, source.is_home_land_package, fields, ListingField::HomeLandPackage);
        }
        (Listing::Rental(target), Listing::Rental(source)) => {
            take(&mut target.property_type, source.property_type, fields, ListingField::PropertyType);
            take(&mut target.available_on, source.available_on, fields, ListingField::AvailableOn);
            take(&mut target.building_details, source.building_details, fields, ListingField::BuildingDetails);

            let rental = source.pricing.unwrap_or_default();
            if fields.contains(ListingField::RentalPrice) || fields.contains(ListingField::Bond) {
                let pricing = target.pricing.get_or_insert_with(Default::default);
                if fields.contains(ListingField::RentalPrice) {
                    pricing.rental_price = rental.rental_price;
                    pricing.rental_price_text = rental.rental_price_text;
                    pricing.payment_frequency_type = rental.payment_frequency_type;
                }
                if fields.contains(ListingField::Bond) {
                    pricing.bond = rental.bond;
                }
            }
        }
        (Listing::Rural(target), Listing::Rural(source)) => {
            take(&mut target.category_type, source.category_type, fields, ListingField::CategoryType);
            merge_sale_pricing(&mut target.pricing, source.pricing, fields);
            take(&mut target.auction_on, source.auction_on, fields, ListingField::AuctionOn);
            take(&mut target.building_details, source.building_details, fields, ListingField::BuildingDetails);
            take(&mut target.rural_features, source.rural_features, fields, ListingField::RuralFeatures);
            take(&mut target.council_rates, source.council_rates, fields, ListingField::CouncilRates);
        }
        (Listing::Land(target), Listing::Land(source)) => {
            take(&mut target.category_type, source.category_type, fields, ListingField::CategoryType);
            merge_sale_pricing(&mut target.pricing, source.pricing, fields);
            take(&mut target.auction_on, source.auction_on, fields, ListingField::AuctionOn);
            take(&mut target.estate, source.estate, fields, ListingField::Estate);
            take(&mut target.council_rates, source.council_rates, fields, ListingField::CouncilRates);
        }
        (_, fresh) => {
            return Err(ClassificationError::CategoryMismatch {
                listing_id: existing.id().to_string(),
                existing: existing.category().to_string(),
                segment: fresh.category().to_string(),
            })
        }
    }

    Ok(merged)
}

fn take<T>(target: &mut T, source: T, fields: &FieldSet, field: ListingField) {
    if fields.contains(field) {
        *target = source;
    }
}

fn merge_core(target: &mut ListingCore, source: &ListingCore, fields: &FieldSet) {
    target.agency_id = source.agency_id.clone();
    target.id = source.id.clone();
    target.status_type = source.status_type;
    target.source_status = source.source_status.clone();
    target.updated_on = source.updated_on;

    let source = source.clone();
    take(&mut target.title, source.title, fields, ListingField::Title);
    take(&mut target.description, source.description, fields, ListingField::Description);
    take(&mut target.address, source.address, fields, ListingField::Address);
    take(&mut target.authority, source.authority, fields, ListingField::Authority);
    take(&mut target.agents, source.agents, fields, ListingField::Agents);
    take(&mut target.images, source.images, fields, ListingField::Images);
    take(&mut target.floor_plans, source.floor_plans, fields, ListingField::FloorPlans);
    take(&mut target.videos, source.videos, fields, ListingField::Videos);
    take(&mut target.documents, source.documents, fields, ListingField::Documents);
    take(&mut target.inspections, source.inspections, fields, ListingField::Inspections);
    take(&mut target.links, source.links, fields, ListingField::Links);
    take(&mut target.features, source.features, fields, ListingField::Features);
    take(&mut target.land_details, source.land_details, fields, ListingField::LandDetails);
}

fn merge_sale_pricing(
    target: &mut Option<SalePricing>,
    source: Option<SalePricing>,
    fields: &FieldSet,
) {
    let touches_pricing = [
        ListingField::SalePrice,
        ListingField::UnderOffer,
        ListingField::SoldPrice,
        ListingField::SoldOn,
    ]
    .into_iter()
    .any(|field| fields.contains(field));
    if !touches_pricing {
        return;
    }

    let source = source.unwrap_or_default();
    let pricing = target.get_or_insert_with(SalePricing::default);
    if fields.contains(ListingField::SalePrice) {
        pricing.sale_price = source.sale_price;
        pricing.sale_price_text = source.sale_price_text;
    }
    take(&mut pricing.is_under_offer, source.is_under_offer, fields, ListingField::UnderOffer);
    if fields.contains(ListingField::SoldPrice) {
        pricing.sold_price = source.sold_price;
        pricing.sold_price_text = source.sold_price_text;
    }
    take(&mut pricing.sold_on, source.sold_on, fields, ListingField::SoldOn);
}
