use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale rules used to read and render money amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyCulture {
    identifier: &'static str,
    currency_symbol: &'static str,
    symbol_position: SymbolPosition,
    group_separator: char,
    decimal_separator: char,
}

const CULTURES: &[MoneyCulture] = &[
    MoneyCulture::dollar("en-AU"),
    MoneyCulture::dollar("en-US"),
    MoneyCulture::dollar("en-NZ"),
    MoneyCulture::dollar("en-CA"),
    MoneyCulture {
        identifier: "en-GB",
        currency_symbol: "£",
        symbol_position: SymbolPosition::Prefix,
        group_separator: ',',
        decimal_separator: '.',
    },
    MoneyCulture {
        identifier: "de-DE",
        currency_symbol: "€",
        symbol_position: SymbolPosition::Suffix,
        group_separator: '.',
        decimal_separator: ',',
    },
    MoneyCulture {
        identifier: "fr-FR",
        currency_symbol: "€",
        symbol_position: SymbolPosition::Suffix,
        group_separator: '\u{a0}',
        decimal_separator: ',',
    },
];

impl MoneyCulture {
    const fn dollar(identifier: &'static str) -> Self {
        Self {
            identifier,
            currency_symbol: "$",
            symbol_position: SymbolPosition::Prefix,
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Looks up a culture by locale identifier (`en-AU`, `de_DE`, ...), ignoring case.
    pub fn from_identifier(value: &str) -> Option<Self> {
        let wanted = value.trim().replace('_', "-");
        CULTURES
            .iter()
            .find(|culture| culture.identifier.eq_ignore_ascii_case(&wanted))
            .cloned()
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn currency_symbol(&self) -> &'static str {
        self.currency_symbol
    }

    /// Reads a plain or currency formatted amount such as `$1,250.50` or `1250.5`.
    pub fn parse(&self, text: &str) -> Option<Decimal> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut normalized = String::with_capacity(trimmed.len());
        let without_symbol = trimmed.replace(self.currency_symbol, "");
        for ch in without_symbol.chars() {
            if ch == self.group_separator || ch.is_whitespace() || ch == '\u{202f}' {
                continue;
            }
            if ch == self.decimal_separator {
                normalized.push('.');
            } else {
                normalized.push(ch);
            }
        }

        if normalized.is_empty() || normalized.starts_with('+') {
            return None;
        }

        Decimal::from_str(&normalized).ok()
    }

    /// Renders an amount with symbol and grouping, e.g. `$500,000` or `500.000 €`.
    /// Whole amounts are shown without cents.
    pub fn format(&self, amount: Decimal) -> String {
        let negative = amount.is_sign_negative() && !amount.is_zero();
        let rounded = amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let cents = ((rounded - whole) * Decimal::ONE_HUNDRED).trunc();

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }
        if !cents.is_zero() {
            grouped.push(self.decimal_separator);
            grouped.push_str(&format!("{:0>2}", cents.to_string()));
        }

        let sign = if negative { "-" } else { "" };
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{grouped}", self.currency_symbol),
            SymbolPosition::Suffix => format!("{sign}{grouped} {}", self.currency_symbol),
        }
    }
}

impl Default for MoneyCulture {
    fn default() -> Self {
        Self::dollar("en-AU")
    }
}
