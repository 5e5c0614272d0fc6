//! Localized date formatting
//!
//! Publication dates are rendered with written-out month names in the
//! site's configured language. Any language other than Portuguese falls
//! back to English.

use chrono::{DateTime, Datelike, TimeZone};

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Format a date with the full month name
///
/// # Examples
/// ```ignore
/// format_date_long(&date, "pt-br") // -> "15 de março de 2021"
/// format_date_long(&date, "en")    // -> "March 15, 2021"
/// ```
pub fn format_date_long<Tz: TimeZone>(date: &DateTime<Tz>, language: &str) -> String {
    let month_index = date.month0() as usize;
    if is_portuguese(language) {
        format!(
            "{:02} de {} de {}",
            date.day(),
            MONTHS_PT[month_index],
            date.year()
        )
    } else {
        format!(
            "{} {:02}, {}",
            MONTHS_EN[month_index],
            date.day(),
            date.year()
        )
    }
}

/// Format a date with an abbreviated month name
///
/// # Examples
/// ```ignore
/// format_date_short(&date, "pt-br") // -> "15 mar 2021"
/// format_date_short(&date, "en")    // -> "15 Mar 2021"
/// ```
pub fn format_date_short<Tz: TimeZone>(date: &DateTime<Tz>, language: &str) -> String {
    let month_index = date.month0() as usize;
    let month = if is_portuguese(language) {
        MONTHS_PT[month_index]
    } else {
        MONTHS_EN[month_index]
    };
    let abbrev: String = month.chars().take(3).collect();

    format!("{:02} {} {}", date.day(), abbrev, date.year())
}

fn is_portuguese(language: &str) -> bool {
    language.eq_ignore_ascii_case("pt-br") || language.eq_ignore_ascii_case("pt")
}
