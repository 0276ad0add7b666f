//! Viewer session context: who is looking, and how they want values rendered.

use serde::{Deserialize, Serialize};

/// How a timestamp should be rendered for a given viewer.
///
/// Mirrors the per-account datetime preference: `Long` is the prose style used
/// in entity sidebars, `Short` is a compact numeric form for dense listings,
/// and `DateOnly` drops the time of day entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    #[default]
    Long,
    Short,
    DateOnly,
}

/// Per-user formatting preferences.
///
/// Time zones are carried as a fixed offset from UTC in minutes; resolving
/// named zones against a tz database is the surrounding application's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerPreferences {
    /// BCP 47 language tag, e.g. `en-US` or `fr-FR`.
    pub locale: String,
    /// Offset from UTC in minutes (east positive), e.g. `-300` for EST.
    pub utc_offset_minutes: i32,
    pub date_style: DateStyle,
}

impl Default for ViewerPreferences {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            utc_offset_minutes: 0,
            date_style: DateStyle::Long,
        }
    }
}

/// Read-only bundle describing the current viewing session.
///
/// Hosts construct one at the root and hand it down as plain props; nothing in
/// this crate mutates or retains it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub user: ViewerPreferences,
}

impl ViewerContext {
    /// Convenience constructor for a viewer with default (UTC, long-form)
    /// rendering in the given locale.
    pub fn for_locale<T: Into<String>>(locale: T) -> Self {
        Self {
            user: ViewerPreferences {
                locale: locale.into(),
                ..ViewerPreferences::default()
            },
        }
    }
}
