use super::error::StructuralParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const SENTINEL_DATE: &str = "0000-00-00";
const SENTINEL_TIMES: &[&str] = &["", "-00:00", "T00:00", "-00:00:00", "T00:00:00", " 00:00:00"];

/// A date/time read from the feed.
///
/// `Cleared` is the vendor's all-zero placeholder: an explicit "no date", which differs from
/// the element being absent altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    At(NaiveDateTime),
    Cleared,
}

impl DateValue {
    pub fn into_option(self) -> Option<NaiveDateTime> {
        match self {
            DateValue::At(value) => Some(value),
            DateValue::Cleared => None,
        }
    }
}

pub fn is_sentinel(value: &str) -> bool {
    value
        .trim()
        .strip_prefix(SENTINEL_DATE)
        .is_some_and(|rest| SENTINEL_TIMES.contains(&rest))
}

/// Parses the date shapes the feed uses. `location` names the element or attribute for errors.
pub fn parse_date_time(value: &str, location: &str) -> Result<DateValue, StructuralParseError> {
    let trimmed = value.trim();
    if is_sentinel(trimmed) {
        return Ok(DateValue::Cleared);
    }

    parse_non_sentinel(trimmed)
        .map(DateValue::At)
        .ok_or_else(|| StructuralParseError::InvalidDateTime {
            value: value.to_string(),
            location: location.to_string(),
        })
}

/// Like [`parse_date_time`] but the placeholder is not acceptable either.
pub fn parse_required_date_time(
    value: &str,
    location: &str,
) -> Result<NaiveDateTime, StructuralParseError> {
    match parse_date_time(value, location)? {
        DateValue::At(value) => Ok(value),
        DateValue::Cleared => Err(StructuralParseError::InvalidDateTime {
            value: value.to_string(),
            location: location.to_string(),
        }),
    }
}

fn parse_non_sentinel(value: &str) -> Option<NaiveDateTime> {
    if !value.chars().take(4).all(|ch| ch.is_ascii_digit()) || value.len() < 8 {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y%m%d-%H%M%S") {
        return Some(parsed);
    }

    let date = NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()?;
    let rest = value.get(10..)?;
    if rest.is_empty() {
        return date.and_hms_opt(0, 0, 0);
    }

    let time = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix('T'))
        .or_else(|| rest.strip_prefix(' '))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()?;

    Some(date.and_time(time))
}

/// Parses `21-Dec-2009 11:00am to 1:00pm`. The closing part may repeat the date.
pub fn parse_inspection(value: &str) -> Option<(NaiveDateTime, Option<NaiveDateTime>)> {
    let cleaned = super::normalizer::remove_extra_spaces(value);
    let (opens, closes) = match cleaned.split_once(" to ") {
        Some((opens, closes)) => (opens, Some(closes)),
        None => (cleaned.as_str(), None),
    };

    let (date_text, time_text) = opens.split_once(' ')?;
    let date = NaiveDate::parse_from_str(date_text, "%d-%b-%Y").ok()?;
    let opens_on = date.and_time(parse_twelve_hour(time_text)?);

    let closes_on = match closes {
        None => None,
        Some(closes) => Some(match closes.split_once(' ') {
            Some((date_text, time_text)) => NaiveDate::parse_from_str(date_text, "%d-%b-%Y")
                .ok()?
                .and_time(parse_twelve_hour(time_text)?),
            None => date.and_time(parse_twelve_hour(closes)?),
        }),
    };

    Some((opens_on, closes_on))
}

fn parse_twelve_hour(value: &str) -> Option<NaiveTime> {
    let lowered = value.trim().to_ascii_lowercase();
    let (clock, is_pm) = if let Some(clock) = lowered.strip_suffix("pm") {
        (clock, true)
    } else {
        (lowered.strip_suffix("am")?, false)
    };

    let (hour, minute) = clock.trim().split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, true) => hour + 12,
        (hour, false) => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}
