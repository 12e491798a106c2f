use super::common::display_flag;
use super::SegmentContext;
use crate::domain::SalePricing;
use crate::rea::coerce::{attribute_bool_or_default, price_or_default};
use crate::rea::dates::parse_date_time;
use crate::rea::error::StructuralParseError;
use crate::rea::merge::{FieldSet, ListingField};
use crate::rea::query::{attribute_or_default, child, XmlQuery};
use chrono::NaiveDateTime;

const SALE_PRICING_FIELDS: [ListingField; 4] = [
    ListingField::SalePrice,
    ListingField::UnderOffer,
    ListingField::SoldPrice,
    ListingField::SoldOn,
];

/// Asking price, under-offer flag and sold details.
///
/// The numeric price is always kept. Its text follows `display`: hidden prices fall back to
/// the configured default text, shown prices use `priceView` or the formatted amount.
pub(super) fn read_sale_pricing(
    context: &SegmentContext<'_, '_>,
    fields: &mut FieldSet,
) -> Result<Option<SalePricing>, StructuralParseError> {
    let node = context.node;
    let options = context.options;
    let culture = &options.culture_for_money_parsing;
    let mut pricing = SalePricing::default();

    let price = child(node, "price");
    if price.is_some() || child(node, "priceView").is_some() {
        fields.insert(ListingField::SalePrice);
        pricing.sale_price = price_or_default(node, Some("price"), culture)?;
        let displayed = match price {
            Some(price) => display_flag(price)?,
            None => true,
        };
        pricing.sale_price_text = if displayed {
            XmlQuery::element("priceView")
                .value_or_default(node)
                .or_else(|| pricing.sale_price.map(|amount| culture.format(amount)))
        } else {
            options.default_sale_price_text_if_missing.clone()
        };
    }

    if let Some(under_offer) = child(node, "underOffer") {
        fields.insert(ListingField::UnderOffer);
        pricing.is_under_offer = attribute_bool_or_default(under_offer, "value")?;
    }

    if let Some(sold) = child(node, "soldDetails") {
        let sold_price = child(sold, "soldPrice")
            .map(|price| ("soldPrice", price))
            .or_else(|| child(sold, "price").map(|price| ("price", price)));
        if let Some((element, price)) = sold_price {
            fields.insert(ListingField::SoldPrice);
            pricing.sold_price = price_or_default(sold, Some(element), culture)?;
            pricing.sold_price_text = if display_flag(price)? {
                pricing.sold_price.map(|amount| culture.format(amount))
            } else {
                options.default_sold_price_text_if_missing.clone()
            };
        }

        let sold_date = ["soldDate", "date"]
            .into_iter()
            .find(|element| child(sold, element).is_some());
        if let Some(element) = sold_date {
            fields.insert(ListingField::SoldOn);
            pricing.sold_on = match XmlQuery::element(element).value_or_default(sold) {
                None => None,
                Some(value) => parse_date_time(
                    &value,
                    &format!("<soldDetails><{element}>..</{element}></soldDetails>"),
                )?
                .into_option(),
            };
        }
    }

    let touched = SALE_PRICING_FIELDS
        .into_iter()
        .any(|field| fields.contains(field));
    Ok(touched.then_some(pricing))
}

/// `auction@date` (or the element text). A present auction without a date clears it.
pub(super) fn read_auction(
    context: &SegmentContext<'_, '_>,
    fields: &mut FieldSet,
) -> Result<Option<NaiveDateTime>, StructuralParseError> {
    let Some(auction) = child(context.node, "auction") else {
        return Ok(None);
    };
    fields.insert(ListingField::AuctionOn);

    let value = attribute_or_default(auction, "date")
        .or_else(|| XmlQuery::this().value_or_default(auction));
    match value {
        None => Ok(None),
        Some(value) => Ok(parse_date_time(&value, "<auction date='..'/>")?.into_option()),
    }
}
