use crate::error::SeedError;
use chrono::{Datelike, NaiveDate};

/// Noms de jours, lundi en premier.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Nom du jour pour `date` (numérotation dimanche=0 ramenée à lundi=0).
pub fn day_of_week(date: NaiveDate) -> &'static str {
    let n = date.weekday().num_days_from_sunday() as usize;
    let idx = if n == 0 { 6 } else { n - 1 };
    WEEKDAY_NAMES[idx]
}

/// Premier et dernier jour (inclus) du mois de `reference`.
pub fn month_bounds(reference: NaiveDate) -> Result<(NaiveDate, NaiveDate), SeedError> {
    let first = reference
        .with_day(1)
        .ok_or_else(|| SeedError::InvalidDate(reference.to_string()))?;
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| SeedError::InvalidDate(reference.to_string()))?;
    Ok((first, last))
}

/// Date de référence : `YYYY-MM-DD` ou `YYYY-MM` (premier du mois).
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, SeedError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .map_err(|_| SeedError::InvalidDate(raw.to_string()))
}
