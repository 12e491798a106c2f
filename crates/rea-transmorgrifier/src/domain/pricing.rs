use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing for listings that are for sale (residential, rural and land).
///
/// Prices are always kept even when the vendor suppresses the text shown to buyers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePricing {
    pub sale_price: Option<Decimal>,
    pub sale_price_text: Option<String>,
    pub is_under_offer: bool,
    pub sold_price: Option<Decimal>,
    pub sold_price_text: Option<String>,
    pub sold_on: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequencyType {
    #[default]
    Unknown,
    Weekly,
    Monthly,
}

/// Pricing for rental listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPricing {
    pub rental_price: Decimal,
    pub rental_price_text: Option<String>,
    pub payment_frequency_type: PaymentFrequencyType,
    pub bond: Option<Decimal>,
}
