//! "Last updated on {date}" sidebar line.

use dioxus::prelude::*;
use dioxus::CapturedError;

use crate::core::entity::CoreEntity;
use crate::core::format::{format_user_date, DateFormatError};
use crate::core::viewer::ViewerContext;
use crate::i18n;

/// Compose the last-updated line for one entity, as seen by one viewer.
///
/// This is deliberately nothing more than the localized template applied to
/// the per-user formatted date: deterministic in its two arguments, no state,
/// no fallback text. A missing or malformed timestamp surfaces as an error
/// for the caller to handle.
pub fn last_updated_line(
    viewer: &ViewerContext,
    entity: &CoreEntity,
) -> Result<String, DateFormatError> {
    let raw = entity
        .last_updated
        .as_deref()
        .ok_or(DateFormatError::MissingTimestamp)?;
    let date = format_user_date(&viewer.user, raw)?;
    Ok(i18n::localize_for(
        &viewer.user.locale,
        "last-updated-on",
        &[("date", date)],
    ))
}

/// Paragraph wrapper around [`last_updated_line`].
///
/// Both inputs arrive as explicit props; the component reads them and renders
/// a single `p.lastupdate`. Formatter failures abort the render and bubble to
/// the nearest error boundary rather than degrade to empty text.
#[component]
pub fn LastUpdated(viewer: ViewerContext, entity: CoreEntity) -> Element {
    match last_updated_line(&viewer, &entity) {
        Ok(line) => rsx! {
            p { class: "lastupdate", "{line}" }
        },
        Err(err) => Err(RenderError::Aborted(CapturedError::from_display(
            err.to_string(),
        ))),
    }
}
