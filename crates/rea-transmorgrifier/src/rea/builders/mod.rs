//! Builders turning one listing segment into a [`Listing`].
//!
//! Each builder returns the fresh listing together with the [`FieldSet`] of groups the segment
//! actually carried, which is what the merge step needs to tell "absent" from "cleared".

mod common;
mod land;
mod media;
mod pricing;
mod rental;
mod residential;
mod rural;

use super::coerce::{required_attribute, required_value};
use super::dates::parse_required_date_time;
use super::error::{InvalidDocumentWarning, SegmentError};
use super::merge::FieldSet;
use super::query::XmlQuery;
use super::status::classify;
use crate::config::TransmorgrifierOptions;
use crate::domain::{
    LandListing, Listing, ListingCategory, ListingCore, RentalListing, ResidentialListing,
    RuralListing, StatusType,
};
use roxmltree::Node;

/// A segment plus everything a builder needs to read it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SegmentContext<'a, 'input> {
    pub node: Node<'a, 'input>,
    pub category: ListingCategory,
    pub status: StatusType,
    pub options: &'a TransmorgrifierOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BuiltListing {
    pub listing: Listing,
    pub fields: FieldSet,
    pub warnings: Vec<InvalidDocumentWarning>,
}

/// `agentID` and `uniqueID` when readable, for error traceability.
pub(crate) fn identity(node: Node<'_, '_>) -> (Option<String>, Option<String>) {
    (
        XmlQuery::element("agentID").value_or_default(node),
        XmlQuery::element("uniqueID").value_or_default(node),
    )
}

pub(crate) fn build(
    node: Node<'_, '_>,
    category: ListingCategory,
    options: &TransmorgrifierOptions,
) -> Result<BuiltListing, SegmentError> {
    let status = classify(node, category)?;
    let agency_id = required_value(node, "agentID")?;
    let id = required_value(node, "uniqueID")?;
    let mod_time = required_attribute(node, "modTime")?;
    let updated_on = parse_required_date_time(
        &mod_time,
        &format!("<{} modTime='..'/>", category.element_name()),
    )?;
    let core = ListingCore::new(
        agency_id,
        id,
        status.status_type,
        status.source_status,
        updated_on,
    );

    if status.status_type == StatusType::Removed {
        return Ok(BuiltListing {
            listing: tombstone(category, core),
            fields: FieldSet::default(),
            warnings: Vec::new(),
        });
    }

    let context = SegmentContext {
        node,
        category,
        status: status.status_type,
        options,
    };
    let mut fields = FieldSet::default();
    let common = common::read_common(&context, core, &mut fields)?;

    let listing = match category {
        ListingCategory::Residential => Listing::Residential(residential::build(
            &context,
            common.core,
            common.is_studio,
            &mut fields,
        )?),
        ListingCategory::Rental => Listing::Rental(rental::build(
            &context,
            common.core,
            common.is_studio,
            &mut fields,
        )?),
        ListingCategory::Rural => Listing::Rural(rural::build(&context, common.core, &mut fields)?),
        ListingCategory::Land => Listing::Land(land::build(&context, common.core, &mut fields)?),
    };

    Ok(BuiltListing {
        listing,
        fields,
        warnings: common.warnings,
    })
}

/// Identity, status and timestamps only.
fn tombstone(category: ListingCategory, core: ListingCore) -> Listing {
    match category {
        ListingCategory::Residential => Listing::Residential(ResidentialListing {
            core,
            property_type: Default::default(),
            pricing: None,
            auction_on: None,
            building_details: None,
            council_rates: None,
            is_home_land_package: false,
        }),
        ListingCategory::Rental => Listing::Rental(RentalListing {
            core,
            property_type: Default::default(),
            pricing: None,
            available_on: None,
            building_details: None,
        }),
        ListingCategory::Rural => Listing::Rural(RuralListing {
            core,
            category_type: Default::default(),
            pricing: None,
            auction_on: None,
            building_details: None,
            rural_features: None,
            council_rates: None,
        }),
        ListingCategory::Land => Listing::Land(LandListing {
            core,
            category_type: Default::default(),
            pricing: None,
            auction_on: None,
            estate: None,
            council_rates: None,
        }),
    }
}

/// 1-based position for `order` fields.
fn position(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
