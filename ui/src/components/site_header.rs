use dioxus::prelude::*;

use crate::core::nav::{AppState, Language, Page};
use crate::t;

// Navbar stylesheet (inlined as well for release native builds).
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Sticky site header: brand, the five page links with active-page styling,
/// the EN/PL switcher, and the consultation call-to-action. On small
/// screens the links collapse behind a menu toggle.
///
/// Every label is pulled fresh through `t!` on each render; reading the
/// session language below keeps the header subscribed so a switch
/// elsewhere re-renders it immediately.
#[component]
pub fn SiteHeader() -> Element {
    let state = use_context::<AppState>();
    let mut menu_open = use_signal(|| false);

    // Reactive dependency on the language (and a render marker below).
    let lang_marker = state.language().locale_tag();

    #[cfg(debug_assertions)]
    println!("[i18n] SiteHeader render lang={lang_marker}");

    let entries = [
        (Page::Home, t!("nav-home")),
        (Page::Services, t!("nav-services")),
        (Page::About, t!("nav-about")),
        (Page::Faq, t!("nav-faq")),
        (Page::Blog, t!("nav-blog")),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures the header re-renders when the language changes.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    button {
                        r#type: "button",
                        class: "navbar__brand-link",
                        onclick: {
                            let mut state = state;
                            move |_| {
                                state.navigate(Page::Home);
                                menu_open.set(false);
                            }
                        },
                        span { class: "navbar__brand-mark", "Everyday Care Plus" }
                    }
                }

                // Navigation
                nav { class: "navbar__links",
                    {entries.iter().map(|(page, label)| nav_link(state, *page, label.clone(), menu_open))}
                }

                // Language switcher
                div { class: "navbar__locale",
                    {lang_button(state, Language::En, "EN")}
                    {lang_button(state, Language::Pl, "PL")}
                }

                button {
                    r#type: "button",
                    class: "navbar__cta button button--primary",
                    onclick: {
                        let mut state = state;
                        move |_| {
                            state.navigate(Page::Home);
                            menu_open.set(false);
                        }
                    },
                    {t!("nav-consultation")}
                }

                // Small-screen menu toggle
                button {
                    r#type: "button",
                    class: "navbar__menu-toggle",
                    aria_expanded: menu_open(),
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                div { class: "navbar__mobile",
                    {entries.iter().map(|(page, label)| nav_link(state, *page, label.clone(), menu_open))}
                    div { class: "navbar__mobile-locale",
                        {lang_button(state, Language::En, "English")}
                        {lang_button(state, Language::Pl, "Polski")}
                    }
                }
            }
        }
    }
}

fn nav_link(mut state: AppState, page: Page, label: String, mut menu_open: Signal<bool>) -> Element {
    let class = if state.page() == page {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |_| {
                state.navigate(page);
                menu_open.set(false);
            },
            "{label}"
        }
    }
}

fn lang_button(mut state: AppState, lang: Language, label: &str) -> Element {
    let class = if state.language() == lang {
        "navbar__locale-button navbar__locale-button--active"
    } else {
        "navbar__locale-button"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |_| state.set_language(lang),
            "{label}"
        }
    }
}
