//! Internationalization (i18n) support for `everydaycare-ui`.
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
//!   en-GB/everydaycare-ui.ftl   (fallback/reference)
//!   pl-PL/everydaycare-ui.ftl   (additional locale)
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
//! Flat display strings live here; structured collections (services, FAQ
//! sections, blog posts, ...) live in `crate::content`, typed per language.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (we enable `debug-embed` feature in
//!   that target-specific dependency section).
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `select_language(lang)` – switch to one of the supported languages.
//! - `available_languages()` – discover embedded language tags.
//! - `fl` macro re-export (for direct keyed access when needed).
//! - `LOADER` – global `FluentLanguageLoader` consumed by the `t!` macro.
//!
//! NOTE: The hyphenated filename `everydaycare-ui.ftl` is canonical across
//! all locales.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::nav::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("footer-rights")
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
/// Fallback file path must be: `i18n/en-GB/{DOMAIN}.ftl`
const DOMAIN: &str = "everydaycare-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = Language::En
        .locale_tag()
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch the active bundle to one of the two supported languages.
///
/// Typed on purpose: callers cannot request a locale that was never
/// embedded, so the lookup side stays total.
pub fn select_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    let id: LanguageIdentifier = match lang.locale_tag().parse() {
        Ok(id) => id,
        Err(_) => return Ok(()), // Tags are compile-time constants; nothing to do.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[id]).map(|_| ())
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
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-GB"));
    }

    #[test]
    fn embedded_locales_cover_both_supported_languages() {
        let langs = available_languages();
        for lang in [Language::En, Language::Pl] {
            assert!(
                langs.iter().any(|l| l == lang.locale_tag()),
                "missing embedded locale for {}",
                lang.locale_tag()
            );
        }
    }

    // Single test for lookup + switching: the loader is a shared global, so
    // exercising both languages in sequence avoids cross-test interleaving.
    #[test]
    fn lookup_follows_selected_language() {
        init();

        select_language(Language::Pl).expect("pl-PL bundle embedded");
        let polish = fl!(&*LOADER, "nav-home");

        select_language(Language::En).expect("en-GB bundle embedded");
        let english = fl!(&*LOADER, "nav-home");

        assert_eq!(english, "Home");
        assert_ne!(polish, english);
    }
}
