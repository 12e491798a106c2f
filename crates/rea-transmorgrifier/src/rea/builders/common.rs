//! Sections shared by every listing category.

use super::media::read_media;
use super::{position, SegmentContext};
use crate::domain::{
    compose_lot_street_number, compose_street_number, Address, Agent, BuildingDetails, CarParking,
    Communication, CommunicationType, Features, Inspection, LandDetails, ListingCategory,
    ListingCore, Media, PropertyType, StatusType,
};
use crate::rea::coerce::{
    attribute_bool_or_default, bool_or_byte_or_default, bool_or_default, byte_or_default,
    invalid_inspection, nullable_decimal_or_default, parse_byte_or_default, side_or_default,
    unit_of_measure_or_default,
};
use crate::rea::dates::parse_inspection;
use crate::rea::error::{
    ClassificationError, InvalidDocumentWarning, SegmentError, StructuralParseError,
};
use crate::rea::mapping::{
    allowed_property_types, authority_for, property_type_for, telephone_type_for,
};
use crate::rea::merge::{FieldSet, ListingField};
use crate::rea::normalizer::{country_iso_code, expand_state, remove_extra_spaces};
use crate::rea::query::{attribute_or_default, child, children, local_attribute, XmlQuery};
use roxmltree::Node;

/// Boolean amenity elements recorded as feature tags when set.
const AMENITIES: &[&str] = &[
    "remoteGarage",
    "secureParking",
    "airConditioning",
    "alarmSystem",
    "vacuumSystem",
    "intercom",
    "poolInGround",
    "poolAboveGround",
    "tennisCourt",
    "balcony",
    "deck",
    "courtyard",
    "outdoorEnt",
    "shed",
    "fullyFenced",
    "openFirePlace",
    "insideSpa",
    "outsideSpa",
    "broadband",
    "builtInRobes",
    "dishwasher",
    "ductedCooling",
    "ductedHeating",
    "evaporativeCooling",
    "floorboards",
    "gasHeating",
    "gym",
    "hydronicHeating",
    "payTV",
    "reverseCycleAirCon",
    "rumpusRoom",
    "solarHotWater",
    "solarPanels",
    "splitSystemAirCon",
    "splitSystemHeating",
    "study",
    "waterTank",
    "workshop",
];

/// Rental allowances, also kept as tags.
const ALLOWANCES: &[&str] = &["petFriendly", "furnished", "smokers"];

pub(super) struct CommonParts {
    pub core: ListingCore,
    pub is_studio: bool,
    pub warnings: Vec<InvalidDocumentWarning>,
}

pub(super) fn read_common(
    context: &SegmentContext<'_, '_>,
    mut core: ListingCore,
    fields: &mut FieldSet,
) -> Result<CommonParts, SegmentError> {
    let node = context.node;

    if child(node, "headline").is_some() {
        fields.insert(ListingField::Title);
        core.title = XmlQuery::element("headline")
            .value_or_default(node)
            .map(|title| remove_extra_spaces(&title));
    }

    if child(node, "description").is_some() {
        fields.insert(ListingField::Description);
        core.description = XmlQuery::element("description").value_or_default(node);
    }

    if let Some(authority) = child(node, "authority") {
        fields.insert(ListingField::Authority);
        core.authority = attribute_or_default(authority, "value")
            .map(|value| authority_for(&value))
            .unwrap_or_default();
    }

    core.address = read_address(context, fields)?;

    if child(node, "listingAgent").is_some() {
        fields.insert(ListingField::Agents);
        core.agents = read_agents(node);
    }

    if let Some(times) = child(node, "inspectionTimes") {
        fields.insert(ListingField::Inspections);
        core.inspections = read_inspections(times)?;
    }

    if child(node, "externalLink").is_some() {
        fields.insert(ListingField::Links);
        core.links = children(node, "externalLink")
            .filter_map(|link| attribute_or_default(link, "href"))
            .collect();
    }

    if child(node, "videoLink").is_some() {
        fields.insert(ListingField::Videos);
        core.videos = read_videos(node);
    }

    let features = child(node, "features");
    let allowances = child(node, "allowances");
    let mut is_studio = false;
    if features.is_some() || allowances.is_some() {
        fields.insert(ListingField::Features);
        let (read, studio) = read_features(features, allowances)?;
        core.features = Some(read);
        is_studio = studio;
    }

    if let Some(land) = child(node, "landDetails") {
        fields.insert(ListingField::LandDetails);
        core.land_details = Some(read_land_details(land)?);
    }

    let media = read_media(node, fields)?;
    core.images = media.images;
    core.floor_plans = media.floor_plans;
    core.documents = media.documents;

    Ok(CommonParts {
        core,
        is_studio,
        warnings: media.warnings,
    })
}

/// `display` attribute; missing or blank means the value may be shown.
pub(super) fn display_flag(node: Node<'_, '_>) -> Result<bool, StructuralParseError> {
    if attribute_or_default(node, "display").is_none() {
        return Ok(true);
    }
    attribute_bool_or_default(node, "display")
}

fn read_address(
    context: &SegmentContext<'_, '_>,
    fields: &mut FieldSet,
) -> Result<Option<Address>, SegmentError> {
    let Some(node) = child(context.node, "address") else {
        if context.status == StatusType::Available {
            return Err(StructuralParseError::MissingElement {
                name: "address".to_string(),
                parent: context.category.element_name().to_string(),
            }
            .into());
        }
        return Ok(None);
    };
    fields.insert(ListingField::Address);

    let value = |name: &str| XmlQuery::element(name).value_or_default(node);
    let sub_number = value("subNumber");
    let lot_number = value("lotNumber");
    let raw_street_number = value("streetNumber");
    let street_number = match context.category {
        ListingCategory::Land => compose_lot_street_number(
            lot_number.as_deref(),
            sub_number.as_deref(),
            raw_street_number.as_deref(),
        ),
        _ => compose_street_number(sub_number.as_deref(), raw_street_number.as_deref()),
    };
    let geocode = child(node, "geocode").unwrap_or(node);

    let mut address = Address {
        sub_number,
        lot_number,
        street_number,
        street: value("street").map(|street| remove_extra_spaces(&street)),
        suburb: value("suburb").map(|suburb| remove_extra_spaces(&suburb)),
        municipality: XmlQuery::element("municipality").value_or_default(context.node),
        state: value("state").map(|state| expand_state(&state)),
        postcode: value("postcode"),
        country_iso_code: country_iso_code(value("country").as_deref()),
        latitude: nullable_decimal_or_default(geocode, Some("latitude"))?,
        longitude: nullable_decimal_or_default(geocode, Some("longitude"))?,
        is_street_displayed: display_flag(node)?,
        display_address: None,
    };

    let display = if address.is_street_displayed {
        address.full_address()
    } else {
        address.locality()
    };
    address.display_address = (!display.is_empty()).then_some(display);

    Ok(Some(address))
}

/// Agents in feed order; repeats of a name fold into the first entry.
fn read_agents(node: Node<'_, '_>) -> Vec<Agent> {
    let mut agents: Vec<Agent> = Vec::new();

    for agent in children(node, "listingAgent") {
        let Some(name) = XmlQuery::element("name")
            .value_or_default(agent)
            .map(|name| remove_extra_spaces(&name))
        else {
            continue;
        };
        let communications = read_communications(agent);

        let order = position(agents.len());
        match agents.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => existing.absorb_communications(communications),
            None => agents.push(Agent {
                name,
                order,
                communications,
            }),
        }
    }

    agents
}

fn read_communications(agent: Node<'_, '_>) -> Vec<Communication> {
    let mut communications = Vec::new();

    for email in children(agent, "email") {
        if let Some(details) = XmlQuery::this().value_or_default(email) {
            communications.push(Communication {
                communication_type: CommunicationType::Email,
                details,
            });
        }
    }

    for telephone in children(agent, "telephone") {
        if let Some(details) = XmlQuery::this().value_or_default(telephone) {
            let communication_type = local_attribute(telephone, "type")
                .map(telephone_type_for)
                .unwrap_or(CommunicationType::Landline);
            communications.push(Communication {
                communication_type,
                details,
            });
        }
    }

    communications
}

fn read_inspections(times: Node<'_, '_>) -> Result<Vec<Inspection>, StructuralParseError> {
    let mut inspections = Vec::new();
    for inspection in children(times, "inspection") {
        let Some(text) = XmlQuery::this().value_or_default(inspection) else {
            continue;
        };
        let (opens_on, closes_on) =
            parse_inspection(&text).ok_or_else(|| invalid_inspection(inspection))?;
        inspections.push(Inspection {
            opens_on,
            closes_on,
        });
    }
    Ok(inspections)
}

fn read_videos(node: Node<'_, '_>) -> Vec<Media> {
    children(node, "videoLink")
        .filter_map(|video| attribute_or_default(video, "href"))
        .enumerate()
        .map(|(index, url)| Media {
            id: position(index).to_string(),
            url,
            order: position(index),
            tag: None,
            content_type: None,
            created_on: None,
        })
        .collect()
}

/// Features plus whether the bedroom count was given as "studio".
fn read_features(
    features: Option<Node<'_, '_>>,
    allowances: Option<Node<'_, '_>>,
) -> Result<(Features, bool), StructuralParseError> {
    let mut read = Features::default();
    let mut is_studio = false;

    if let Some(node) = features {
        match XmlQuery::element("bedrooms").value_or_default(node) {
            Some(bedrooms) if bedrooms.eq_ignore_ascii_case("studio") => is_studio = true,
            bedrooms => read.bedrooms = parse_byte_or_default(bedrooms.as_deref())?,
        }
        read.bathrooms = byte_or_default(node, Some("bathrooms"))?;
        read.toilets = byte_or_default(node, Some("toilets"))?;
        read.ensuites = bool_or_byte_or_default(node, Some("ensuite"))?;
        read.living_areas = byte_or_default(node, Some("livingAreas"))?;
        read.car_parking = CarParking {
            garages: byte_or_default(node, Some("garages"))?,
            carports: byte_or_default(node, Some("carports"))?,
            open_spaces: byte_or_default(node, Some("openSpaces"))?,
        };

        for amenity in AMENITIES.iter().copied() {
            if bool_or_default(node, Some(amenity))? {
                read.tags.insert(amenity.to_string());
            }
        }

        if let Some(other) = XmlQuery::element("otherFeatures").value_or_default(node) {
            read.tags.extend(
                other
                    .split(',')
                    .map(remove_extra_spaces)
                    .filter(|tag| !tag.is_empty()),
            );
        }
    }

    if let Some(node) = allowances {
        for allowance in ALLOWANCES.iter().copied() {
            if bool_or_default(node, Some(allowance))? {
                read.tags.insert(allowance.to_string());
            }
        }
    }

    Ok((read, is_studio))
}

fn read_land_details(node: Node<'_, '_>) -> Result<LandDetails, StructuralParseError> {
    let mut depths = Vec::new();
    for depth in children(node, "depth") {
        let name = attribute_or_default(depth, "side").unwrap_or_else(|| "depth".to_string());
        if let Some(side) = side_or_default(depth, &name, "unit")? {
            depths.push(side);
        }
    }

    Ok(LandDetails {
        area: unit_of_measure_or_default(node, "area", "unit")?,
        frontage: unit_of_measure_or_default(node, "frontage", "unit")?,
        depths,
        cross_over: XmlQuery::element("crossOver")
            .with_attribute("value")
            .value_or_default(node),
    })
}

pub(super) fn read_building_details(
    node: Node<'_, '_>,
    fields: &mut FieldSet,
) -> Result<Option<BuildingDetails>, StructuralParseError> {
    let Some(details) = child(node, "buildingDetails") else {
        return Ok(None);
    };
    fields.insert(ListingField::BuildingDetails);

    Ok(Some(BuildingDetails {
        area: unit_of_measure_or_default(details, "area", "unit")?,
        energy_rating: nullable_decimal_or_default(details, Some("energyRating"))?,
    }))
}

pub(super) fn read_council_rates(node: Node<'_, '_>, fields: &mut FieldSet) -> Option<String> {
    child(node, "councilRates")?;
    fields.insert(ListingField::CouncilRates);
    XmlQuery::element("councilRates").value_or_default(node)
}

/// `category@name`, overridden to studio when the bedroom count said so.
pub(super) fn read_property_type(
    node: Node<'_, '_>,
    is_studio: bool,
    fields: &mut FieldSet,
) -> Result<PropertyType, ClassificationError> {
    fields.insert_if(
        child(node, "category").is_some() || is_studio,
        ListingField::PropertyType,
    );
    if is_studio {
        return Ok(PropertyType::Studio);
    }

    match XmlQuery::element("category")
        .with_attribute("name")
        .value_or_default(node)
    {
        None => Ok(PropertyType::Unknown),
        Some(name) => property_type_for(&name).ok_or_else(|| ClassificationError::UnknownValue {
            vocabulary: "property type",
            value: name.clone(),
            allowed: allowed_property_types(),
        }),
    }
}
