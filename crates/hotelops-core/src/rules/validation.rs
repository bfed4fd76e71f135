//! Field contracts for operator input
//!
//! Each parser takes one raw console line and either shapes it into the
//! value the domain needs or returns `InvalidInput`. They never touch
//! storage; the engine's prompt loops re-ask on `Err`.

use crate::errors::{HotelOpsError, Result};
use crate::model::Gender;
use regex::Regex;
use std::sync::OnceLock;

// ASCII classes only; `\d` also matches non-ASCII digits.
static DIGITS: OnceLock<Regex> = OnceLock::new();
static DATE: OnceLock<Regex> = OnceLock::new();

fn digits() -> &'static Regex {
    DIGITS.get_or_init(|| Regex::new(r"^[0-9]+$").expect("digit pattern is valid"))
}

fn date() -> &'static Regex {
    DATE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
    })
}

fn invalid(field: &str, reason: impl Into<String>) -> HotelOpsError {
    HotelOpsError::InvalidInput {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Parse an ID, count, or price field: one or more ASCII digits that fit in an `i64`
pub fn parse_numeric(field: &str, input: &str) -> Result<i64> {
    let input = input.trim();
    if !digits().is_match(input) {
        return Err(invalid(field, "only digits are allowed"));
    }
    input
        .parse::<i64>()
        .map_err(|_| invalid(field, "number is too large"))
}

/// Parse a digits-only field that must keep its text form (phone numbers)
pub fn parse_digit_string(field: &str, input: &str) -> Result<String> {
    let input = input.trim();
    if digits().is_match(input) {
        Ok(input.to_string())
    } else {
        Err(invalid(field, "only digits are allowed"))
    }
}

/// Parse a `YYYY-MM-DD` date. Only the shape is checked.
pub fn parse_date(field: &str, input: &str) -> Result<String> {
    let input = input.trim();
    if date().is_match(input) {
        Ok(input.to_string())
    } else {
        Err(invalid(field, "expected YYYY-MM-DD"))
    }
}

/// Map free text to a gender: exactly `M` or `F`, anything else is `Other`
pub fn parse_gender(input: &str) -> Gender {
    match input.trim() {
        "M" => Gender::Male,
        "F" => Gender::Female,
        _ => Gender::Other,
    }
}

/// Parse a `y`/`n` certification answer (case-insensitive)
pub fn parse_certified(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(invalid("certification", "answer y or n")),
    }
}

/// Optional free text; an empty answer is stored as an empty string
pub fn parse_optional_text(input: &str) -> String {
    input.trim().to_string()
}

/// Parse a menu choice as a signed integer
pub fn parse_choice(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid("choice", "not an integer"))
}
