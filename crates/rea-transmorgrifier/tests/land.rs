use chrono::{NaiveDate, NaiveDateTime};
use rea_transmorgrifier::config::{MoneyCulture, TransmorgrifierOptions};
use rea_transmorgrifier::domain::{AuthorityType, LandCategoryType, LandListing, Listing, StatusType};
use rea_transmorgrifier::rea::{ParsedResult, ReaXmlTransmorgrifier};
use rust_decimal::Decimal;

const CURRENT: &str = include_str!("fixtures/land_current.xml");

const SOLD: &str = r#"<land modTime="2009-01-11-12:30:00" status="sold"><agentID>XNWXNW</agentID><uniqueID>Land-Current-ABCD1234</uniqueID><soldDetails><price display="yes">85000</price><date>2009-01-10-12:30:00</date></soldDetails></land>"#;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

fn land(result: &ParsedResult) -> &LandListing {
    assert!(result.errors.is_empty(), "unexpected errors: {:?}", result.errors);
    match &result.listings.first().expect("one listing").listing {
        Listing::Land(listing) => listing,
        other => panic!("expected a land listing, got {other:?}"),
    }
}

#[test]
fn current_land_matches_the_expected_values() {
    let result = ReaXmlTransmorgrifier::new().parse(CURRENT, None);
    let listing = land(&result);

    assert_eq!(listing.core.id, "Land-Current-ABCD1234");
    assert_eq!(listing.core.status_type, StatusType::Available);
    assert_eq!(listing.core.authority, AuthorityType::Auction);
    assert_eq!(listing.category_type, LandCategoryType::Residential);
    assert_eq!(listing.council_rates.as_deref(), Some("$1,000 per annum"));
    assert_eq!(listing.auction_on, None);

    let estate = listing.estate.as_ref().expect("estate");
    assert_eq!(estate.name.as_deref(), Some("Panorama"));
    assert_eq!(estate.stage.as_deref(), Some("5"));

    let pricing = listing.pricing.as_ref().expect("pricing");
    assert_eq!(pricing.sale_price, Some(Decimal::new(80_000, 0)));
    assert_eq!(pricing.sale_price_text.as_deref(), Some("$80,000"));
    assert!(!pricing.is_under_offer);

    let address = listing.core.address.as_ref().expect("address");
    assert_eq!(address.lot_number.as_deref(), Some("12"));
    assert_eq!(address.street_number.as_deref(), Some("LOT 12/39"));
    assert_eq!(
        address.display_address.as_deref(),
        Some("LOT 12/39 Main Road, RICHMOND, Victoria 3121")
    );

    let details = listing.core.land_details.as_ref().expect("land details");
    assert_eq!(details.depths.len(), 1);
    assert_eq!(details.depths[0].name, "rear");
    assert_eq!(listing.core.images.len(), 1);
}

#[test]
fn sold_land_reports_the_sold_price() {
    let result = ReaXmlTransmorgrifier::new().parse(SOLD, None);
    let listing = land(&result);

    assert_eq!(listing.core.status_type, StatusType::Sold);
    let pricing = listing.pricing.as_ref().expect("pricing");
    assert_eq!(pricing.sold_price, Some(Decimal::new(85_000, 0)));
    assert_eq!(pricing.sold_price_text.as_deref(), Some("$85,000"));
    assert_eq!(pricing.sold_on, Some(at(2009, 1, 10, 12, 30)));
}

#[test]
fn sold_land_text_follows_the_money_culture() {
    let options = TransmorgrifierOptions {
        culture_for_money_parsing: MoneyCulture::from_identifier("de-DE").expect("known culture"),
        ..TransmorgrifierOptions::default()
    };

    let result = ReaXmlTransmorgrifier::with_options(options).parse(SOLD, None);
    let pricing = land(&result).pricing.clone().expect("pricing");
    assert_eq!(pricing.sold_price_text.as_deref(), Some("85.000 €"));
}

#[test]
fn missing_land_category_is_unknown() {
    let xml = CURRENT.replace(r#"<landCategory name="Residential"/>"#, "");

    let result = ReaXmlTransmorgrifier::new().parse(&xml, None);
    assert_eq!(land(&result).category_type, LandCategoryType::Unknown);
}
