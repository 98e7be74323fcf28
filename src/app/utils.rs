use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;

pub fn parse_datetime(field: &str) -> Result<DateTime<Local>> {
    let date_str = format!("{} 00:00:00", field.trim());
    let naive = chrono::NaiveDateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("Failed to parse date '{}'", field))?;

    Ok(Local.from_utc_datetime(&naive))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_i64(field: &str, field_name: &str) -> Result<i64> {
    field
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

/// Expands a leading `~` to the home directory.
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}
