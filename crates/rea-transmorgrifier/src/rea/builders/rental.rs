use super::common::{display_flag, read_building_details, read_property_type};
use super::SegmentContext;
use crate::domain::{ListingCore, PaymentFrequencyType, RentalListing, RentalPricing};
use crate::rea::coerce::money_or_default;
use crate::rea::dates::parse_date_time;
use crate::rea::error::{SegmentError, StructuralParseError};
use crate::rea::mapping::payment_frequency_for;
use crate::rea::merge::{FieldSet, ListingField};
use crate::rea::query::{attribute_or_default, child, children, XmlQuery};
use chrono::NaiveDateTime;
use roxmltree::Node;

pub(super) fn build(
    context: &SegmentContext<'_, '_>,
    core: ListingCore,
    is_studio: bool,
    fields: &mut FieldSet,
) -> Result<RentalListing, SegmentError> {
    let node = context.node;

    Ok(RentalListing {
        core,
        property_type: read_property_type(node, is_studio, fields)?,
        pricing: read_rental_pricing(context, fields)?,
        available_on: read_available_on(node, fields)?,
        building_details: read_building_details(node, fields)?,
    })
}

fn frequency_of(rent: Node<'_, '_>) -> PaymentFrequencyType {
    attribute_or_default(rent, "period")
        .map(|period| payment_frequency_for(&period))
        .unwrap_or_default()
}

/// Rent, its period and display text, plus the bond.
///
/// Feeds may list one `rent` per period; the weekly amount wins, otherwise the first.
fn read_rental_pricing(
    context: &SegmentContext<'_, '_>,
    fields: &mut FieldSet,
) -> Result<Option<RentalPricing>, StructuralParseError> {
    let node = context.node;
    let culture = &context.options.culture_for_money_parsing;
    let mut pricing = RentalPricing::default();

    let rents: Vec<_> = children(node, "rent").collect();
    let rent = rents
        .iter()
        .copied()
        .find(|rent| frequency_of(*rent) == PaymentFrequencyType::Weekly)
        .or_else(|| rents.first().copied());

    if rent.is_some() || child(node, "priceView").is_some() {
        fields.insert(ListingField::RentalPrice);
        let mut displayed = true;
        if let Some(rent) = rent {
            pricing.rental_price = money_or_default(rent, None, culture)?.unwrap_or_default();
            pricing.payment_frequency_type = frequency_of(rent);
            displayed = display_flag(rent)?;
        }
        pricing.rental_price_text = if displayed {
            XmlQuery::element("priceView").value_or_default(node).or_else(|| {
                (!pricing.rental_price.is_zero()).then(|| culture.format(pricing.rental_price))
            })
        } else {
            None
        };
    }

    if child(node, "bond").is_some() {
        fields.insert(ListingField::Bond);
        pricing.bond = money_or_default(node, Some("bond"), culture)?;
    }

    let touched = fields.contains(ListingField::RentalPrice) || fields.contains(ListingField::Bond);
    Ok(touched.then_some(pricing))
}

fn read_available_on(
    node: Node<'_, '_>,
    fields: &mut FieldSet,
) -> Result<Option<NaiveDateTime>, StructuralParseError> {
    if child(node, "dateAvailable").is_none() {
        return Ok(None);
    }
    fields.insert(ListingField::AvailableOn);

    match XmlQuery::element("dateAvailable").value_or_default(node) {
        None => Ok(None),
        Some(value) => Ok(parse_date_time(&value, "<dateAvailable>..</dateAvailable>")?.into_option()),
    }
}
