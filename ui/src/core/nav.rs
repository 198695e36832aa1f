//! Navigation state: active language, logical page, and article slug.
//!
//! `Session` holds the plain transition rules so they stay testable without
//! a Dioxus runtime; `AppState` wraps one `Session` in a signal and is
//! provided once at the app root via `use_context_provider`. Navigation is
//! in-memory only; the address bar never changes.

use dioxus::prelude::*;

use crate::i18n;

/// Supported display languages. The site ships exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    /// Locale tag matching the embedded Fluent folder for this language.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Language::En => "en-GB",
            Language::Pl => "pl-PL",
        }
    }
}

/// Logical page identifiers. Any target is always a legal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Faq,
    Blog,
    Article,
}

/// In-memory navigation state for one browsing session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub language: Language,
    pub page: Page,
    pub slug: Option<String>,
}

impl Session {
    /// Move to `page`. Leaving the article context (any target other than
    /// `Article`) clears the selected slug.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        if page != Page::Article {
            self.slug = None;
        }
    }

    /// Select a blog post and switch to the article page.
    pub fn open_article(&mut self, slug: impl Into<String>) {
        self.slug = Some(slug.into());
        self.page = Page::Article;
    }

    /// Switch language. Page and slug are untouched; content simply
    /// re-resolves under the new language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}

/// Shared application state handle passed down through context.
///
/// Copy-cheap by design: every accessor goes through the inner signal, so
/// any component that reads it re-renders when navigation changes.
#[derive(Clone, Copy)]
pub struct AppState {
    session: Signal<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::default()),
        }
    }

    pub fn language(&self) -> Language {
        self.session.read().language
    }

    pub fn page(&self) -> Page {
        self.session.read().page
    }

    pub fn slug(&self) -> Option<String> {
        self.session.read().slug.clone()
    }

    pub fn navigate(&mut self, page: Page) {
        self.session.write().navigate(page);
    }

    pub fn open_article(&mut self, slug: &str) {
        self.session.write().open_article(slug);
    }

    /// Switch the Fluent bundle and the session language together. If the
    /// bundle cannot be selected the session keeps its current language, so
    /// strings and structured content never disagree.
    pub fn set_language(&mut self, language: Language) {
        match i18n::select_language(language) {
            Ok(()) => self.session.write().set_language(language),
            Err(err) => eprintln!("[i18n] Failed switching language ({err}); keeping current"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
