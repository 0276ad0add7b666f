//! Per-user date formatting.
//!
//! [`format_user_date`] is the date collaborator behind the last-updated line:
//! it turns an RFC 3339 instant from the data layer into display text honouring
//! the viewer's locale, UTC offset, and date-style preference.
//!
//! The `time` crate has no locale data, so month names and hour conventions
//! are carried here for the locales we ship translations for. Unknown locales
//! render like English.

use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::core::viewer::{DateStyle, ViewerPreferences};

/// Failure modes of the date collaborator. Callers propagate these unchanged;
/// nothing here is retried or papered over with placeholder text.
#[derive(Debug, Error)]
pub enum DateFormatError {
    #[error("entity has no last-updated timestamp")]
    MissingTimestamp,
    #[error("malformed timestamp: {0}")]
    Parse(#[from] time::error::Parse),
    #[error("viewer UTC offset out of range: {0}")]
    OffsetConversion(#[from] time::error::ComponentRange),
    #[error("failed to format timestamp: {0}")]
    Format(#[from] time::error::Format),
}

/// Render `raw` (an RFC 3339 instant) for the given viewer preferences.
pub fn format_user_date(
    prefs: &ViewerPreferences,
    raw: &str,
) -> Result<String, DateFormatError> {
    let instant = OffsetDateTime::parse(raw, &Rfc3339)?;
    let offset = UtcOffset::from_whole_seconds(prefs.utc_offset_minutes * 60)?;
    let local = instant.to_offset(offset);

    match prefs.date_style {
        DateStyle::Long => Ok(format!(
            "{}, {}",
            long_date(&prefs.locale, local),
            clock_time(&prefs.locale, local)
        )),
        DateStyle::Short => Ok(local.format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute]"
        ))?),
        DateStyle::DateOnly => Ok(long_date(&prefs.locale, local)),
    }
}

/// Primary language subtag, lowercased: `fr-FR` → `fr`.
fn primary_subtag(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

fn long_date(locale: &str, dt: OffsetDateTime) -> String {
    let month = month_name(locale, u8::from(dt.month()));
    let (day, year) = (dt.day(), dt.year());
    match primary_subtag(locale).as_str() {
        "fr" => format!("{day} {month} {year}"),
        "es" => format!("{day} de {month} de {year}"),
        _ => format!("{month} {day}, {year}"),
    }
}

fn clock_time(locale: &str, dt: OffsetDateTime) -> String {
    let (hour, minute) = (dt.hour(), dt.minute());
    match primary_subtag(locale).as_str() {
        // 24-hour clock everywhere except English.
        "fr" | "es" => format!("{hour:02}:{minute:02}"),
        _ => {
            let (hour12, meridiem) = match hour {
                0 => (12, "AM"),
                12 => (12, "PM"),
                h if h < 12 => (h, "AM"),
                h => (h - 12, "PM"),
            };
            format!("{hour12}:{minute:02} {meridiem}")
        }
    }
}

fn month_name(locale: &str, month: u8) -> &'static str {
    const EN: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    const FR: [&str; 12] = [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ];
    const ES: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ];

    let idx = usize::from(month.clamp(1, 12)) - 1;
    match primary_subtag(locale).as_str() {
        "fr" => FR[idx],
        "es" => ES[idx],
        _ => EN[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewer::ViewerPreferences;

    fn prefs(locale: &str, offset_minutes: i32, style: DateStyle) -> ViewerPreferences {
        ViewerPreferences {
            locale: locale.to_string(),
            utc_offset_minutes: offset_minutes,
            date_style: style,
        }
    }

    #[test]
    fn english_long_midnight_utc() {
        let out = format_user_date(
            &prefs("en-US", 0, DateStyle::Long),
            "2018-05-01T00:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "May 1, 2018, 12:00 AM");
    }

    #[test]
    fn english_long_afternoon() {
        let out = format_user_date(
            &prefs("en-US", 0, DateStyle::Long),
            "2018-05-01T15:04:00Z",
        )
        .expect("format");
        assert_eq!(out, "May 1, 2018, 3:04 PM");
    }

    #[test]
    fn english_long_noon_is_pm() {
        let out = format_user_date(
            &prefs("en-US", 0, DateStyle::Long),
            "2018-05-01T12:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "May 1, 2018, 12:00 PM");
    }

    #[test]
    fn french_long_uses_french_months_and_24h_clock() {
        let out = format_user_date(
            &prefs("fr-FR", 0, DateStyle::Long),
            "2018-05-01T00:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "1 mai 2018, 00:00");
    }

    #[test]
    fn spanish_long_form() {
        let out = format_user_date(
            &prefs("es-ES", 0, DateStyle::Long),
            "2018-08-09T18:30:00Z",
        )
        .expect("format");
        assert_eq!(out, "9 de agosto de 2018, 18:30");
    }

    #[test]
    fn viewer_offset_shifts_the_rendered_instant() {
        // UTC-5: midnight UTC is 7 PM the previous evening.
        let out = format_user_date(
            &prefs("en-US", -300, DateStyle::Long),
            "2018-05-01T00:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "April 30, 2018, 7:00 PM");
    }

    #[test]
    fn short_style_is_numeric() {
        let out = format_user_date(
            &prefs("en-US", 0, DateStyle::Short),
            "2018-05-01T00:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "2018-05-01 00:00");
    }

    #[test]
    fn date_only_style_drops_the_time() {
        let out = format_user_date(
            &prefs("fr-FR", 0, DateStyle::DateOnly),
            "2018-05-01T00:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "1 mai 2018");
    }

    #[test]
    fn minimum_rfc3339_instant_formats_cleanly() {
        let out = format_user_date(
            &prefs("en-US", 0, DateStyle::Long),
            "0000-01-01T00:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "January 1, 0, 12:00 AM");
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let err = format_user_date(&prefs("en-US", 0, DateStyle::Long), "yesterday-ish")
            .expect_err("must not format");
        assert!(matches!(err, DateFormatError::Parse(_)));
    }

    #[test]
    fn absurd_offset_is_rejected() {
        // UtcOffset is bounded to ±25:59:59.
        let err = format_user_date(
            &prefs("en-US", 100_000, DateStyle::Long),
            "2018-05-01T00:00:00Z",
        )
        .expect_err("must not format");
        assert!(matches!(err, DateFormatError::OffsetConversion(_)));
    }

    #[test]
    fn underscore_locale_tags_still_resolve() {
        let out = format_user_date(
            &prefs("fr_FR", 0, DateStyle::DateOnly),
            "2018-12-24T00:00:00Z",
        )
        .expect("format");
        assert_eq!(out, "24 décembre 2018");
    }
}
