use super::error::{ClassificationError, SegmentError, StructuralParseError};
use super::mapping::status_for;
use super::query::{attribute_or_default, XmlQuery};
use crate::domain::{ListingCategory, StatusType};
use roxmltree::Node;

/// Classified status plus the vendor's own text, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedStatus {
    pub status_type: StatusType,
    pub source_status: String,
}

/// Reads `@status` (or a `<status>` child) and maps it for the segment's category.
///
/// Sale categories cannot be leased and rentals cannot be sold.
pub fn classify(
    segment: Node<'_, '_>,
    category: ListingCategory,
) -> Result<ClassifiedStatus, SegmentError> {
    let raw = attribute_or_default(segment, "status")
        .or_else(|| XmlQuery::element("status").value_or_default(segment))
        .ok_or_else(|| StructuralParseError::MissingAttribute {
            name: "status".to_string(),
            element: segment.tag_name().name().to_string(),
        })?;

    let unknown = || ClassificationError::UnknownStatus {
        value: raw.clone(),
        category: category.element_name().to_string(),
    };

    let status_type = status_for(&raw).ok_or_else(unknown)?;
    let fits_category = match (category, status_type) {
        (ListingCategory::Rental, StatusType::Sold) => false,
        (ListingCategory::Rental, _) => true,
        (_, StatusType::Leased) => false,
        _ => true,
    };
    if !fits_category {
        return Err(unknown().into());
    }

    Ok(ClassifiedStatus {
        status_type,
        source_status: raw.to_ascii_lowercase(),
    })
}
