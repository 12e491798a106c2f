use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MEASURE_TYPE: &str = "Total";

/// A measured quantity such as a land area or frontage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
}

impl UnitOfMeasure {
    /// Builds a measurement only when the value is strictly positive.
    pub fn new(value: Decimal, kind: Option<&str>) -> Option<Self> {
        if value <= Decimal::ZERO {
            return None;
        }

        let kind = kind
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .unwrap_or(DEFAULT_MEASURE_TYPE);

        Some(Self {
            value,
            kind: kind.to_string(),
        })
    }
}

/// A measurement of one named side of a block, e.g. the rear depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub name: String,
    #[serde(flatten)]
    pub measure: UnitOfMeasure,
}

impl Side {
    pub fn new(name: impl Into<String>, measure: UnitOfMeasure) -> Self {
        Self {
            name: name.into(),
            measure,
        }
    }
}
