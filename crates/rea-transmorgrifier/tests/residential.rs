use chrono::{NaiveDate, NaiveDateTime};
use rea_transmorgrifier::config::{MoneyCulture, TransmorgrifierOptions};
use rea_transmorgrifier::domain::{
    AuthorityType, CommunicationType, Listing, PropertyType, ResidentialListing, StatusType,
};
use rea_transmorgrifier::rea::{ErrorKind, ParsedResult, ReaXmlTransmorgrifier};
use rust_decimal::Decimal;

const CURRENT: &str = include_str!("fixtures/residential_current.xml");
const SOLD: &str = include_str!("fixtures/residential_sold.xml");
const DOCUMENTS: &str = include_str!("fixtures/residential_current_documents.xml");

const ADDRESS: &str = r#"<address display="yes"><streetNumber>39</streetNumber><street>Main Road</street><suburb>RICHMOND</suburb><state>vic</state><postcode>3121</postcode></address>"#;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

fn segment(status: &str, body: &str) -> String {
    format!(
        r#"<residential modTime="2009-01-01-12:30:00" status="{status}"><agentID>XNWXNW</agentID><uniqueID>Residential-Current-ABCD1234</uniqueID>{body}</residential>"#
    )
}

fn residential(result: &ParsedResult) -> &ResidentialListing {
    assert!(result.errors.is_empty(), "unexpected errors: {:?}", result.errors);
    match &result.listings.first().expect("one listing").listing {
        Listing::Residential(listing) => listing,
        other => panic!("expected a residential listing, got {other:?}"),
    }
}

fn single_error_message(result: &ParsedResult) -> &str {
    assert!(result.listings.is_empty(), "segment should have been rejected");
    assert_eq!(result.errors.len(), 1);
    &result.errors[0].exception_message
}

#[test]
fn current_listing_matches_the_expected_values() {
    let result = ReaXmlTransmorgrifier::new().parse(CURRENT, None);
    let listing = residential(&result);
    let core = &listing.core;

    assert_eq!(result.source_name, "REA");
    assert!(result.listings[0].warnings.is_empty());
    assert!(result.listings[0].source_data.starts_with("<residential"));

    assert_eq!(core.agency_id, "XNWXNW");
    assert_eq!(core.id, "Residential-Current-ABCD1234");
    assert_eq!(core.status_type, StatusType::Available);
    assert_eq!(core.source_status, "current");
    assert_eq!(core.created_on, at(2009, 1, 1, 12, 30));
    assert_eq!(core.updated_on, at(2009, 1, 1, 12, 30));
    assert_eq!(core.title.as_deref(), Some("SHOW STOPPER!!!"));
    assert!(core
        .description
        .as_deref()
        .is_some_and(|description| description.starts_with("Don't pass up")));
    assert_eq!(core.authority, AuthorityType::Auction);

    let address = core.address.as_ref().expect("address");
    assert_eq!(address.sub_number.as_deref(), Some("2"));
    assert_eq!(address.street_number.as_deref(), Some("2/39"));
    assert_eq!(address.street.as_deref(), Some("Main Road"));
    assert_eq!(address.suburb.as_deref(), Some("RICHMOND"));
    assert_eq!(address.municipality.as_deref(), Some("Yarra"));
    assert_eq!(address.state.as_deref(), Some("Victoria"));
    assert_eq!(address.postcode.as_deref(), Some("3121"));
    assert_eq!(address.country_iso_code, "AU");
    assert!(address.is_street_displayed);
    assert_eq!(
        address.display_address.as_deref(),
        Some("2/39 Main Road, RICHMOND, Victoria 3121")
    );

    let pricing = listing.pricing.as_ref().expect("pricing");
    assert_eq!(pricing.sale_price, Some(Decimal::new(500_000, 0)));
    assert_eq!(
        pricing.sale_price_text.as_deref(),
        Some("Between $400,000 and $600,000")
    );
    assert!(!pricing.is_under_offer);
    assert_eq!(pricing.sold_price, None);
    assert_eq!(pricing.sold_on, None);

    assert_eq!(listing.property_type, PropertyType::House);
    assert_eq!(listing.auction_on, Some(at(2009, 2, 4, 18, 30)));
    assert_eq!(listing.council_rates.as_deref(), Some("$2,000 per annum"));
    assert!(!listing.is_home_land_package);
    let building = listing.building_details.as_ref().expect("building details");
    assert_eq!(building.energy_rating, Some(Decimal::new(45, 1)));
    assert_eq!(building.area.as_ref().map(|area| area.value), Some(Decimal::new(40, 0)));

    let features = core.features.as_ref().expect("features");
    assert_eq!(features.bedrooms, 4);
    assert_eq!(features.bathrooms, 2);
    assert_eq!(features.ensuites, 2);
    assert_eq!(features.toilets, 2);
    assert_eq!(features.living_areas, 1);
    assert_eq!(features.car_parking.garages, 2);
    assert_eq!(features.car_parking.carports, 2);
    assert_eq!(features.car_parking.open_spaces, 0);
    let tags: Vec<_> = features.tags.iter().map(String::as_str).collect();
    assert_eq!(
        tags,
        vec!["airConditioning", "alarmSystem", "dishwasher", "lots of land", "poolInGround"]
    );

    let land = core.land_details.as_ref().expect("land details");
    assert_eq!(land.area.as_ref().map(|area| area.kind.as_str()), Some("square"));
    assert_eq!(land.depths.len(), 3);
    assert_eq!(land.cross_over.as_deref(), Some("left"));

    assert_eq!(core.inspections.len(), 2);
    assert_eq!(core.inspections[1].opens_on, at(2009, 12, 22, 14, 0));
    assert_eq!(core.inspections[1].closes_on, Some(at(2009, 12, 22, 15, 30)));
    assert_eq!(core.links, vec!["http://www.example.com/listing/ABCD1234"]);
    assert_eq!(core.videos.len(), 1);
}

#[test]
fn agents_keep_feed_order_and_channels() {
    let result = ReaXmlTransmorgrifier::new().parse(CURRENT, None);
    let agents = &residential(&result).core.agents;

    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].name, "Mr. John Doe");
    assert_eq!(agents[0].order, 1);
    let channels: Vec<_> = agents[0]
        .communications
        .iter()
        .map(|communication| communication.communication_type)
        .collect();
    assert_eq!(
        channels,
        vec![
            CommunicationType::Email,
            CommunicationType::Landline,
            CommunicationType::Mobile,
        ]
    );
    assert_eq!(agents[1].name, "Mrs. Jane Doe");
    assert_eq!(agents[1].order, 2);
}

#[test]
fn media_follow_vendor_order() {
    let result = ReaXmlTransmorgrifier::new().parse(CURRENT, None);
    let core = &residential(&result).core;

    let images: Vec<_> = core
        .images
        .iter()
        .map(|image| (image.id.as_str(), image.order))
        .collect();
    assert_eq!(images, vec![("m", 1), ("a", 2), ("b", 3)]);
    assert!(core.images.iter().all(|image| image.created_on.is_some()));

    let plans: Vec<_> = core.floor_plans.iter().map(|plan| plan.id.as_str()).collect();
    assert_eq!(plans, vec!["1", "2"]);

    assert_eq!(core.documents.len(), 1);
    let document = &core.documents[0];
    assert_eq!(document.id, "aaaa1111");
    assert_eq!(document.order, 1);
    assert_eq!(document.tag.as_deref(), Some("statementOfInformation"));
    assert!(document.created_on.is_some());
}

#[test]
fn many_images_continue_into_double_letters() {
    let mut ids: Vec<String> = vec!["m".to_string()];
    ids.extend(('a'..='z').filter(|letter| *letter != 'm').map(String::from));
    ids.extend(["aa", "ab", "ac", "ad", "ae"].map(String::from));
    assert_eq!(ids.len(), 31);

    let images: String = ids
        .iter()
        .rev()
        .map(|id| format!(r#"<img id="{id}" url="http://images/{id}.jpg"/>"#))
        .collect();
    let xml = segment("current", &format!("{ADDRESS}<objects>{images}</objects>"));

    let result = ReaXmlTransmorgrifier::new().parse(&xml, None);
    let parsed: Vec<_> = residential(&result)
        .core
        .images
        .iter()
        .map(|image| image.id.clone())
        .collect();
    assert_eq!(parsed, ids);
    assert_eq!(residential(&result).core.images[30].order, 31);
}

#[test]
fn removed_statuses_produce_tombstones() {
    for (status, expected) in [
        ("withdrawn", "withdrawn"),
        ("offmarket", "offmarket"),
        ("deleted", "deleted"),
        ("Withdrawn", "withdrawn"),
    ] {
        let xml = CURRENT.replace(r#"status="current""#, &format!(r#"status="{status}""#));
        let result = ReaXmlTransmorgrifier::new().parse(&xml, None);
        let listing = residential(&result);

        assert_eq!(listing.core.status_type, StatusType::Removed, "status {status}");
        assert_eq!(listing.core.source_status, expected);
        assert_eq!(listing.core.id, "Residential-Current-ABCD1234");
        assert_eq!(listing.core.description, None);
        assert_eq!(listing.core.address, None);
        assert_eq!(listing.pricing, None);
        assert!(listing.core.images.is_empty());
        assert!(listing.core.agents.is_empty());
    }
}

#[test]
fn sold_segment_carries_sold_details_only() {
    let result = ReaXmlTransmorgrifier::new().parse(SOLD, None);
    let listing = residential(&result);

    assert_eq!(listing.core.status_type, StatusType::Sold);
    assert_eq!(listing.core.source_status, "sold");
    assert_eq!(listing.core.address, None);
    let pricing = listing.pricing.as_ref().expect("pricing");
    assert_eq!(pricing.sale_price, None);
    assert_eq!(pricing.sold_price, Some(Decimal::new(580_000, 0)));
    assert_eq!(pricing.sold_price_text.as_deref(), Some("$580,000"));
    assert_eq!(pricing.sold_on, Some(at(2009, 1, 10, 12, 30)));
}

#[test]
fn sold_segment_merged_onto_current_listing_keeps_the_asking_price() {
    let transmorgrifier = ReaXmlTransmorgrifier::new();
    let current = transmorgrifier.parse(CURRENT, None);
    let existing = current.listings[0].listing.clone();

    let result = transmorgrifier.parse(SOLD, Some(&existing));
    let listing = residential(&result);

    assert_eq!(listing.core.status_type, StatusType::Sold);
    assert_eq!(listing.core.created_on, at(2009, 1, 1, 12, 30));
    assert_eq!(listing.core.updated_on, at(2009, 1, 11, 12, 30));
    assert_eq!(listing.core.title.as_deref(), Some("SHOW STOPPER!!!"));
    assert!(listing.core.address.is_some());

    let pricing = listing.pricing.as_ref().expect("pricing");
    assert_eq!(pricing.sale_price, Some(Decimal::new(500_000, 0)));
    assert_eq!(
        pricing.sale_price_text.as_deref(),
        Some("Between $400,000 and $600,000")
    );
    assert_eq!(pricing.sold_price, Some(Decimal::new(580_000, 0)));
    assert_eq!(pricing.sold_on, Some(at(2009, 1, 10, 12, 30)));
}

#[test]
fn sold_price_hidden_uses_the_configured_text() {
    let xml = segment(
        "sold",
        r#"<soldDetails><price display="no">580000</price><date>2009-01-10-12:30:00</date></soldDetails>"#,
    );

    let plain = ReaXmlTransmorgrifier::new().parse(&xml, None);
    let pricing = residential(&plain).pricing.clone().expect("pricing");
    assert_eq!(pricing.sold_price, Some(Decimal::new(580_000, 0)));
    assert_eq!(pricing.sold_price_text, None);

    let options = TransmorgrifierOptions {
        default_sold_price_text_if_missing: Some("Sold - price withheld".to_string()),
        ..TransmorgrifierOptions::default()
    };
    let configured = ReaXmlTransmorgrifier::with_options(options).parse(&xml, None);
    let pricing = residential(&configured).pricing.clone().expect("pricing");
    assert_eq!(pricing.sold_price_text.as_deref(), Some("Sold - price withheld"));
}

#[test]
fn sale_price_text_follows_display_and_options() {
    let hidden = segment(
        "current",
        &format!(r#"{ADDRESS}<price display="no">500000</price><priceView>Offers over $450,000</priceView>"#),
    );
    let shown_without_view = segment(
        "current",
        &format!(r#"{ADDRESS}<price display="yes">500000.00</price>"#),
    );
    let shown_without_price = segment("current", &format!(r#"{ADDRESS}<price display="yes"/>"#));

    let default = ReaXmlTransmorgrifier::new();
    let with_text = ReaXmlTransmorgrifier::with_options(TransmorgrifierOptions {
        default_sale_price_text_if_missing: Some("Contact agent".to_string()),
        ..TransmorgrifierOptions::default()
    });

    let pricing = |transmorgrifier: &ReaXmlTransmorgrifier, xml: &str| {
        let result = transmorgrifier.parse(xml, None);
        residential(&result).pricing.clone().expect("pricing")
    };

    let hidden_default = pricing(&default, &hidden);
    assert_eq!(hidden_default.sale_price, Some(Decimal::new(500_000, 0)));
    assert_eq!(hidden_default.sale_price_text, None);
    assert_eq!(
        pricing(&with_text, &hidden).sale_price_text.as_deref(),
        Some("Contact agent")
    );

    let shown = pricing(&default, &shown_without_view);
    assert_eq!(shown.sale_price, Some(Decimal::new(500_000, 0)));
    assert_eq!(shown.sale_price_text.as_deref(), Some("$500,000"));

    let empty = pricing(&default, &shown_without_price);
    assert_eq!(empty.sale_price, None);
    assert_eq!(empty.sale_price_text, None);
}

#[test]
fn money_culture_drives_parsing_and_text() {
    let xml = segment(
        "current",
        &format!(r#"{ADDRESS}<price display="yes">500.000 €</price>"#),
    );
    let options = TransmorgrifierOptions {
        culture_for_money_parsing: MoneyCulture::from_identifier("de-DE").expect("known culture"),
        ..TransmorgrifierOptions::default()
    };

    let result = ReaXmlTransmorgrifier::with_options(options).parse(&xml, None);
    let pricing = residential(&result).pricing.clone().expect("pricing");
    assert_eq!(pricing.sale_price, Some(Decimal::new(500_000, 0)));
    assert_eq!(pricing.sale_price_text.as_deref(), Some("500.000 €"));
}

#[test]
fn studio_bedrooms_become_a_studio_property() {
    let xml = segment(
        "current",
        &format!(r#"{ADDRESS}<category name="Unit"/><features><bedrooms>Studio</bedrooms><bathrooms>1</bathrooms></features>"#),
    );

    let result = ReaXmlTransmorgrifier::new().parse(&xml, None);
    let listing = residential(&result);
    assert_eq!(listing.property_type, PropertyType::Studio);
    assert_eq!(listing.core.features.as_ref().map(|features| features.bedrooms), Some(0));
}

#[test]
fn hidden_street_keeps_only_the_locality() {
    let xml = CURRENT.replace(r#"<address display="yes">"#, r#"<address display="no">"#);

    let result = ReaXmlTransmorgrifier::new().parse(&xml, None);
    let address = residential(&result).core.address.clone().expect("address");
    assert!(!address.is_street_displayed);
    assert_eq!(address.street_number.as_deref(), Some("2/39"));
    assert_eq!(address.display_address.as_deref(), Some("RICHMOND, Victoria 3121"));
}

#[test]
fn invalid_documents_are_dropped_with_warnings() {
    let result = ReaXmlTransmorgrifier::new().parse(DOCUMENTS, None);
    let listing = residential(&result);

    let ids: Vec<_> = listing
        .core
        .documents
        .iter()
        .map(|document| (document.id.as_str(), document.order))
        .collect();
    assert_eq!(ids, vec![("aaaa1111", 1), ("cccc3333", 2), ("eeee5555", 3)]);
    assert_eq!(
        result.listings[0].warnings,
        vec![
            "At least 1 document has an invalid 'usage' value. Invalid values: blah-1, blah-3",
            "At least 1 document has an invalid 'contentType' value. Invalid values: blah-2, blah-4",
        ]
    );
}

#[test]
fn unreadable_values_reject_the_segment() {
    let cases = [
        (
            format!(r#"{ADDRESS}<price display="yes">5500006000000000</price>"#),
            "Failed to parse element: residential.price; value: '5500006000000000' into a int.",
        ),
        (
            format!(r#"{ADDRESS}<price display="range">500000</price>"#),
            "Value 'range' is out of range. It should only be 0/1/yes/no.",
        ),
        (
            format!("{ADDRESS}<inspectionTimes><inspection> 12:00AM to 12:00AM</inspection></inspectionTimes>"),
            "Inspection element has an invalid Date/Time value. Element: <inspection> 12:00AM to 12:00AM</inspection>",
        ),
        (
            format!(r#"{ADDRESS}<objects><img id="m" url="http://images/m.jpg" modTime="2016-02-1112:50:05"/></objects>"#),
            "Invalid date/time trying to be parsed. Attempted the value: '2016-02-1112:50:05' but that format is invalid. Element/Attribute: <img modTime='..'/>",
        ),
        (
            format!("{ADDRESS}<features><bedrooms>4.5</bedrooms></features>"),
            "Failed to parse the value '4.5' into an int. Is it a valid number? Does it contain decimal point values?",
        ),
        (
            "<headline>No address</headline>".to_string(),
            "Expected the element 'address' but failed to find it in the element 'residential'.",
        ),
    ];

    for (body, expected) in cases {
        let xml = segment("current", &body);
        let result = ReaXmlTransmorgrifier::new().parse(&xml, None);

        assert_eq!(single_error_message(&result), expected);
        let error = &result.errors[0];
        assert_eq!(error.kind, ErrorKind::StructuralParse);
        assert_eq!(error.agency_id.as_deref(), Some("XNWXNW"));
        assert_eq!(error.listing_id.as_deref(), Some("Residential-Current-ABCD1234"));
        assert_eq!(error.invalid_data, xml);
    }
}

#[test]
fn unknown_vocabulary_is_a_classification_error() {
    let cases = [
        segment("pending", ADDRESS),
        segment("leased", ADDRESS),
        segment("current", &format!(r#"{ADDRESS}<category name="Castle"/>"#)),
    ];

    for xml in cases {
        let result = ReaXmlTransmorgrifier::new().parse(&xml, None);
        assert!(result.listings.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ErrorKind::Classification, "xml {xml}");
    }

    let result = ReaXmlTransmorgrifier::new().parse(&segment("pending", ADDRESS), None);
    assert_eq!(
        result.errors[0].exception_message,
        "Invalid status 'pending' found for the listing category 'residential'."
    );
}
