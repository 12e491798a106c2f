use super::common::read_council_rates;
use super::pricing::{read_auction, read_sale_pricing};
use super::SegmentContext;
use crate::domain::{Estate, LandCategoryType, LandListing, ListingCore};
use crate::rea::error::{ClassificationError, SegmentError};
use crate::rea::mapping::{allowed_land_categories, land_category_for};
use crate::rea::merge::{FieldSet, ListingField};
use crate::rea::query::{child, XmlQuery};
use roxmltree::Node;

pub(super) fn build(
    context: &SegmentContext<'_, '_>,
    core: ListingCore,
    fields: &mut FieldSet,
) -> Result<LandListing, SegmentError> {
    let node = context.node;

    let estate = child(node, "estate").map(|estate| {
        fields.insert(ListingField::Estate);
        Estate {
            name: XmlQuery::element("name").value_or_default(estate),
            stage: XmlQuery::element("stage").value_or_default(estate),
        }
    });

    Ok(LandListing {
        core,
        category_type: read_category(node, fields)?,
        pricing: read_sale_pricing(context, fields)?,
        auction_on: read_auction(context, fields)?,
        estate,
        council_rates: read_council_rates(node, fields),
    })
}

/// `landCategory@name`; a missing category is `Unknown`, an unrecognised one is an error.
fn read_category(
    node: Node<'_, '_>,
    fields: &mut FieldSet,
) -> Result<LandCategoryType, ClassificationError> {
    fields.insert_if(child(node, "landCategory").is_some(), ListingField::CategoryType);
    match XmlQuery::element("landCategory")
        .with_attribute("name")
        .value_or_default(node)
    {
        None => Ok(LandCategoryType::Unknown),
        Some(name) => land_category_for(&name).ok_or_else(|| ClassificationError::UnknownValue {
            vocabulary: "land category",
            value: name.clone(),
            allowed: allowed_land_categories(),
        }),
    }
}
