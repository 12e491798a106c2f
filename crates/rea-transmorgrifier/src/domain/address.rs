use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Postal location of a listing.
///
/// `street_number` holds the composed number shown to buyers (for example `2/39` or
/// `LOT 12/39`); the raw vendor parts are kept in `sub_number` and `lot_number`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub sub_number: Option<String>,
    pub lot_number: Option<String>,
    pub street_number: Option<String>,
    pub street: Option<String>,
    pub suburb: Option<String>,
    pub municipality: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country_iso_code: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub is_street_displayed: bool,
    pub display_address: Option<String>,
}

impl Address {
    /// `suburb, state postcode`, skipping whatever is missing.
    pub fn locality(&self) -> String {
        let state_postcode = join_present(&[self.state.as_deref(), self.postcode.as_deref()], " ");
        join_present(
            &[self.suburb.as_deref(), non_empty(&state_postcode)],
            ", ",
        )
    }

    /// `number street, suburb, state postcode`, skipping whatever is missing.
    pub fn full_address(&self) -> String {
        let street_line = join_present(
            &[self.street_number.as_deref(), self.street.as_deref()],
            " ",
        );
        let locality = self.locality();
        join_present(&[non_empty(&street_line), non_empty(&locality)], ", ")
    }
}

/// Combines a unit/sub number with a street number (`sub/street`).
pub fn compose_street_number(sub_number: Option<&str>, street_number: Option<&str>) -> Option<String> {
    match (sub_number, street_number) {
        (Some(sub), Some(street)) => Some(format!("{sub}/{street}")),
        (Some(sub), None) => Some(sub.to_string()),
        (None, Some(street)) => Some(street.to_string()),
        (None, None) => None,
    }
}

/// Land convention: `LOT lot/street`, falling back to the plain composition.
pub fn compose_lot_street_number(
    lot_number: Option<&str>,
    sub_number: Option<&str>,
    street_number: Option<&str>,
) -> Option<String> {
    match (lot_number, street_number) {
        (Some(lot), Some(street)) => Some(format!("LOT {lot}/{street}")),
        (Some(lot), None) => Some(format!("LOT {lot}")),
        (None, _) => compose_street_number(sub_number, street_number),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
