//! Internationalization (i18n) support for `linernotes-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/linernotes_ui.ftl   (fallback/reference)
//!   es-ES/linernotes_ui.ftl   (additional locale)
//!   fr-FR/linernotes_ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::i18n::init;
//! use crate::t;
//! init(); // idempotent
//! let home_label = t!("nav-home");
//! ```
//!
//! Two lookup paths exist on purpose:
//! - `t!` / `fl!` resolve against the globally selected UI language in
//!   [`LOADER`]. Application chrome (header, pages) uses this.
//! - [`localize_for`] resolves against an explicit locale tag without touching
//!   global state. Viewer-scoped rendering (the last-updated line) uses this so
//!   its output stays a function of the viewer preferences alone.
//!
//! To add a new locale:
//! 1. Copy `en-US/linernotes_ui.ftl` to `i18n/<lang-id>/linernotes_ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (we enable `debug-embed` feature in that target-specific dependency section).
use std::collections::HashMap;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("entity-not-found", id = "mbid-123")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// The `fl!` macro derives this from the package name snake-cased, so the
/// fallback file path must be: `i18n/en-US/linernotes_ui.ftl`
const DOMAIN: &str = "linernotes_ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

fn fallback_language() -> LanguageIdentifier {
    "en-US".parse().expect("valid fallback language identifier")
}

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, fallback_language()));

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
        // Bundles are rebuilt on every load, resetting this flag, so it must
        // be applied after `select`. Substituted values are plain dates and
        // ids; keep the output free of Unicode directional isolate marks.
        LOADER.set_use_isolating(false);
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    // Reapplied after every load; see init().
    LOADER.set_use_isolating(false);
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Resolve `key` against an explicit locale, ignoring the globally selected
/// UI language. Unknown or malformed tags fall back to `en-US`.
///
/// A dedicated loader is built per call; bundle assembly from the embedded
/// assets is cheap at display-component scale and keeps this function free of
/// shared mutable state.
pub fn localize_for(locale: &str, key: &str, args: &[(&str, String)]) -> String {
    let lang: LanguageIdentifier = locale.parse().unwrap_or_else(|_| fallback_language());
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang]) {
        eprintln!("[i18n] Failed selecting scoped locale {locale} ({err}); using fallback");
    }
    // Must follow `select`: loading rebuilds the bundles with isolation on.
    loader.set_use_isolating(false);
    if args.is_empty() {
        loader.get(key)
    } else {
        let args: HashMap<&str, String> = args.iter().map(|(k, v)| (*k, v.clone())).collect();
        loader.get_args(key, args)
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn scoped_lookup_honours_locale() {
        assert_eq!(localize_for("en-US", "nav-home", &[]), "Home");
        assert_eq!(localize_for("fr-FR", "nav-home", &[]), "Accueil");
        assert_eq!(localize_for("es-ES", "nav-home", &[]), "Inicio");
    }

    #[test]
    fn scoped_lookup_falls_back_on_unknown_locale() {
        assert_eq!(localize_for("zz-ZZ", "nav-home", &[]), "Home");
        assert_eq!(localize_for("not a tag", "nav-home", &[]), "Home");
    }

    #[test]
    fn scoped_lookup_substitutes_arguments() {
        let line = localize_for(
            "en-US",
            "last-updated-on",
            &[("date", "May 1, 2018, 12:00 AM".to_string())],
        );
        assert_eq!(line, "Last updated on May 1, 2018, 12:00 AM");
    }

    #[test]
    fn global_loader_output_has_no_directional_isolates() {
        init();
        let line = fl!(&*LOADER, "last-updated-on", date = "May 1, 2018, 12:00 AM");
        assert_eq!(line, "Last updated on May 1, 2018, 12:00 AM");

        // set_language reloads the bundles; substitution must stay clean.
        set_language("en-US").expect("known language");
        let line = fl!(&*LOADER, "entity-not-found", id = "release-blue-train");
        assert!(
            !line.contains('\u{2068}') && !line.contains('\u{2069}'),
            "directional isolate marks leaked into: {line:?}"
        );
    }
}
