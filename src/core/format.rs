//! # Display Formatting
//!
//! Turns country fields into the strings shown on the detail screen.
//! Numbers use en-US grouping (`83,783,942`) with at most three fraction
//! digits, matching what a default locale formatter prints.

use crate::api::Country;

/// Shown when a field has nothing to display.
pub const NOT_AVAILABLE: &str = "N/A";

const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats an integer with comma thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a number with grouping and up to three fraction digits.
///
/// Trailing fraction zeros are dropped, so whole numbers print without a
/// decimal point.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    let scaled = (value.abs() * scale as f64).round() as u64;
    let whole = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if fraction != 0 {
        let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

pub fn format_population(country: &Country) -> String {
    group_thousands(country.population)
}

pub fn format_area(country: &Country) -> String {
    format!("{} km²", format_number(country.area))
}

/// `"Euro (€), Swiss franc (Fr)"`, in the order the API listed them.
pub fn format_currencies(country: &Country) -> String {
    if country.currencies.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    country
        .currencies
        .iter()
        .map(|(_, currency)| format!("{} ({})", currency.name, currency.symbol))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_languages(country: &Country) -> String {
    if country.languages.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    country
        .languages
        .iter()
        .map(|(_, name)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_capital(country: &Country) -> String {
    country
        .first_capital()
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

pub fn format_subregion(country: &Country) -> String {
    if country.subregion.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        country.subregion.clone()
    }
}
