use super::common::{read_building_details, read_council_rates, read_property_type};
use super::pricing::{read_auction, read_sale_pricing};
use super::SegmentContext;
use crate::domain::{ListingCore, ResidentialListing};
use crate::rea::coerce::attribute_bool_or_default;
use crate::rea::error::SegmentError;
use crate::rea::merge::{FieldSet, ListingField};
use crate::rea::query::child;

pub(super) fn build(
    context: &SegmentContext<'_, '_>,
    core: ListingCore,
    is_studio: bool,
    fields: &mut FieldSet,
) -> Result<ResidentialListing, SegmentError> {
    let node = context.node;

    let is_home_land_package = match child(node, "isHomeLandPackage") {
        Some(package) => {
            fields.insert(ListingField::HomeLandPackage);
            attribute_bool_or_default(package, "value")?
        }
        None => false,
    };

    Ok(ResidentialListing {
        core,
        property_type: read_property_type(node, is_studio, fields)?,
        pricing: read_sale_pricing(context, fields)?,
        auction_on: read_auction(context, fields)?,
        building_details: read_building_details(node, fields)?,
        council_rates: read_council_rates(node, fields),
        is_home_land_package,
    })
}
