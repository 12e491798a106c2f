//! Typed readers over element and attribute text.
//!
//! The `*_or_default` readers treat an absent or blank value as the type's default; only text
//! that is present but unusable is an error.

use super::error::StructuralParseError;
use super::query::{attribute_or_default, element_label, outer_xml, XmlQuery};
use crate::config::MoneyCulture;
use crate::domain::{Side, UnitOfMeasure};
use roxmltree::Node;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// `1`/`yes` or `0`/`no`, ignoring case.
pub fn parse_one_yes_zero_no(value: &str) -> Result<bool, StructuralParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" => Ok(true),
        "0" | "no" => Ok(false),
        _ => Err(StructuralParseError::NotOneZeroYesNo {
            value: value.to_string(),
        }),
    }
}

/// `yes`/`true` or `no`/`false`, ignoring case.
pub fn parse_yes_true_or_no_false(value: &str) -> Result<bool, StructuralParseError> {
    try_parse_yes_or_no(value).ok_or_else(|| StructuralParseError::NotTrueFalse {
        value: value.to_string(),
    })
}

/// Non-failing variant of [`parse_yes_true_or_no_false`].
pub fn try_parse_yes_or_no(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Some(true),
        "no" | "false" => Some(false),
        _ => None,
    }
}

/// Whole number in `0..=255`. `1.0` is accepted, `1.5` is not.
pub fn parse_byte_or_default(value: Option<&str>) -> Result<u8, StructuralParseError> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(0);
    };

    let number = Decimal::from_str(value)
        .ok()
        .filter(|number| number.fract().is_zero())
        .ok_or_else(|| StructuralParseError::NotAnInteger {
            value: value.to_string(),
        })?;

    number
        .to_u8()
        .ok_or_else(|| StructuralParseError::ByteOutOfRange {
            value: value.to_string(),
        })
}

fn read(node: Node<'_, '_>, element: Option<&str>) -> Option<String> {
    match element {
        Some(element) => XmlQuery::element(element).value_or_default(node),
        None => XmlQuery::this().value_or_default(node),
    }
}

fn invalid(
    node: Node<'_, '_>,
    element: Option<&str>,
    value: String,
    target: &'static str,
) -> StructuralParseError {
    StructuralParseError::InvalidValue {
        element: element_label(node, element),
        value,
        target,
    }
}

pub fn int_or_default(node: Node<'_, '_>, element: Option<&str>) -> Result<i32, StructuralParseError> {
    Ok(nullable_int_or_default(node, element)?.unwrap_or_default())
}

pub fn nullable_int_or_default(
    node: Node<'_, '_>,
    element: Option<&str>,
) -> Result<Option<i32>, StructuralParseError> {
    let Some(value) = read(node, element) else {
        return Ok(None);
    };

    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| invalid(node, element, value, "int"))
}

pub fn decimal_or_default(
    node: Node<'_, '_>,
    element: Option<&str>,
) -> Result<Decimal, StructuralParseError> {
    Ok(nullable_decimal_or_default(node, element)?.unwrap_or_default())
}

pub fn nullable_decimal_or_default(
    node: Node<'_, '_>,
    element: Option<&str>,
) -> Result<Option<Decimal>, StructuralParseError> {
    let Some(value) = read(node, element) else {
        return Ok(None);
    };

    Decimal::from_str(&value)
        .or_else(|_| Decimal::from_scientific(&value))
        .map(Some)
        .map_err(|_| invalid(node, element, value, "decimal"))
}

/// Plain or currency formatted amount, read with the caller's culture.
pub fn money_or_default(
    node: Node<'_, '_>,
    element: Option<&str>,
    culture: &MoneyCulture,
) -> Result<Option<Decimal>, StructuralParseError> {
    let Some(value) = read(node, element) else {
        return Ok(None);
    };

    culture
        .parse(&value)
        .map(Some)
        .ok_or_else(|| invalid(node, element, value, "decimal"))
}

/// Whole-dollar price: money text truncated to an `i32` range amount.
pub fn price_or_default(
    node: Node<'_, '_>,
    element: Option<&str>,
    culture: &MoneyCulture,
) -> Result<Option<Decimal>, StructuralParseError> {
    let Some(value) = read(node, element) else {
        return Ok(None);
    };

    culture
        .parse(&value)
        .map(|amount| amount.trunc())
        .filter(|amount| amount.to_i32().is_some())
        .map(Some)
        .ok_or_else(|| invalid(node, element, value, "int"))
}

pub fn byte_or_default(node: Node<'_, '_>, element: Option<&str>) -> Result<u8, StructuralParseError> {
    parse_byte_or_default(read(node, element).as_deref())
}

/// `true`/`false` first, then the `0/1/yes/no` vocabulary.
pub fn bool_or_default(node: Node<'_, '_>, element: Option<&str>) -> Result<bool, StructuralParseError> {
    match read(node, element) {
        None => Ok(false),
        Some(value) => parse_bool_text(&value),
    }
}

/// `yes`/`no`/`true`/`false` become 1/0, anything else must be a byte.
pub fn bool_or_byte_or_default(
    node: Node<'_, '_>,
    element: Option<&str>,
) -> Result<u8, StructuralParseError> {
    let Some(value) = read(node, element) else {
        return Ok(0);
    };

    match try_parse_yes_or_no(&value) {
        Some(flag) => Ok(u8::from(flag)),
        None => parse_byte_or_default(Some(&value)),
    }
}

pub fn attribute_bool_or_default(
    node: Node<'_, '_>,
    attribute: &str,
) -> Result<bool, StructuralParseError> {
    match attribute_or_default(node, attribute) {
        None => Ok(false),
        Some(value) => parse_bool_text(&value),
    }
}

fn parse_bool_text(value: &str) -> Result<bool, StructuralParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => parse_one_yes_zero_no(value),
    }
}

/// Measurement from an element's text with its unit taken from `attribute`.
pub fn unit_of_measure_or_default(
    node: Node<'_, '_>,
    element: &str,
    attribute: &str,
) -> Result<Option<UnitOfMeasure>, StructuralParseError> {
    let value = decimal_or_default(node, Some(element))?;
    let kind = XmlQuery::element(element)
        .with_attribute(attribute)
        .value_or_default(node);
    Ok(UnitOfMeasure::new(value, kind.as_deref()))
}

/// Measurement of the element itself, named after the element.
pub fn side_or_default(
    side_node: Node<'_, '_>,
    name: &str,
    attribute: &str,
) -> Result<Option<Side>, StructuralParseError> {
    let value = decimal_or_default(side_node, None)?;
    let kind = attribute_or_default(side_node, attribute);
    Ok(UnitOfMeasure::new(value, kind.as_deref()).map(|measure| Side::new(name, measure)))
}

/// Text of a child element that must be present.
pub fn required_value(node: Node<'_, '_>, element: &str) -> Result<String, StructuralParseError> {
    read(node, Some(element)).ok_or_else(|| StructuralParseError::MissingElement {
        name: element.to_string(),
        parent: node.tag_name().name().to_string(),
    })
}

/// Value of an attribute on `node` that must be present.
pub fn required_attribute(node: Node<'_, '_>, attribute: &str) -> Result<String, StructuralParseError> {
    attribute_or_default(node, attribute).ok_or_else(|| StructuralParseError::MissingAttribute {
        name: attribute.to_string(),
        element: node.tag_name().name().to_string(),
    })
}

/// Error for an inspection line that does not read as a date/time window.
pub fn invalid_inspection(node: Node<'_, '_>) -> StructuralParseError {
    StructuralParseError::InvalidInspection {
        element: outer_xml(node).to_string(),
    }
}
