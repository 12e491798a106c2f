use super::common::{read_building_details, read_council_rates};
use super::pricing::{read_auction, read_sale_pricing};
use super::SegmentContext;
use crate::domain::{ListingCore, RuralCategoryType, RuralFeatures, RuralListing};
use crate::rea::error::{ClassificationError, SegmentError};
use crate::rea::mapping::{allowed_rural_categories, rural_category_for};
use crate::rea::merge::{FieldSet, ListingField};
use crate::rea::query::{child, XmlQuery};
use roxmltree::Node;

pub(super) fn build(
    context: &SegmentContext<'_, '_>,
    core: ListingCore,
    fields: &mut FieldSet,
) -> Result<RuralListing, SegmentError> {
    let node = context.node;

    let rural_features = child(node, "ruralFeatures").map(|features| {
        fields.insert(ListingField::RuralFeatures);
        read_rural_features(features)
    });

    // Older feeds put council rates inside ruralFeatures.
    let council_rates = read_council_rates(node, fields).or_else(|| {
        let nested = child(node, "ruralFeatures")
            .and_then(|features| XmlQuery::element("councilRates").value_or_default(features));
        fields.insert_if(nested.is_some(), ListingField::CouncilRates);
        nested
    });

    Ok(RuralListing {
        core,
        category_type: read_category(node, fields)?,
        pricing: read_sale_pricing(context, fields)?,
        auction_on: read_auction(context, fields)?,
        building_details: read_building_details(node, fields)?,
        rural_features,
        council_rates,
    })
}

fn read_category(
    node: Node<'_, '_>,
    fields: &mut FieldSet,
) -> Result<RuralCategoryType, ClassificationError> {
    fields.insert_if(child(node, "ruralCategory").is_some(), ListingField::CategoryType);
    match XmlQuery::element("ruralCategory")
        .with_attribute("name")
        .value_or_default(node)
    {
        None => Ok(RuralCategoryType::Unknown),
        Some(name) => rural_category_for(&name).ok_or_else(|| ClassificationError::UnknownValue {
            vocabulary: "rural category",
            value: name.clone(),
            allowed: allowed_rural_categories(),
        }),
    }
}

fn read_rural_features(node: Node<'_, '_>) -> RuralFeatures {
    let text = |name: &str| XmlQuery::element(name).value_or_default(node);
    RuralFeatures {
        annual_rainfall: text("annualRainfall"),
        carrying_capacity: text("carryingCapacity"),
        fencing: text("fencing"),
        improvements: text("improvements"),
        irrigation: text("irrigation"),
        services: text("services"),
        soil_types: text("soilTypes"),
    }
}
