//! Formatting utilities used for CLI and export outputs.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `1234567` → `$1,234,567` (US dollars, no fractional digits).
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `2024-01-05` (or an RFC 3339 timestamp) → `January 5, 2024`.
pub fn format_date(input: &str) -> AppResult<String> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| AppError::InvalidDate(input.to_string()))?;

    Ok(format_long_date(date))
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Full, half and empty stars for a rating out of `max`. The half star is
/// `½` (Latin-1), which every terminal font carries.
pub fn star_rating(rating: f64, max: u8) -> String {
    let rating = rating.clamp(0.0, max as f64);
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    let empty = (max as usize).saturating_sub(full + usize::from(half));

    let mut out = "★".repeat(full);
    if half {
        out.push('½');
    }
    out.push_str(&"☆".repeat(empty));
    out
}

/// Initials shown in place of the avatar image.
pub fn initials(first: &str, last: &str) -> String {
    first
        .chars()
        .next()
        .into_iter()
        .chain(last.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
