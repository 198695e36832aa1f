use dioxus::prelude::*;

use crate::app::PHONE_URI;
use crate::content;
use crate::core::nav::{AppState, Page};
use crate::t;

/// Site footer: brand blurb, service shortcuts, page shortcuts, contact
/// details, and the legal line.
#[component]
pub fn SiteFooter() -> Element {
    let state = use_context::<AppState>();
    let lang_marker = state.language().locale_tag();
    let content = content::for_language(state.language());

    // First few services double as footer shortcuts, like the home grid.
    let service_shortcuts: Vec<String> = content
        .service_summaries
        .iter()
        .take(4)
        .map(|service| service.title.to_string())
        .collect();

    rsx! {
        footer { class: "footer",
            div { style: "display:none", "{lang_marker}" }
            div { class: "footer__columns",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "Everyday Care Plus" }
                    p { class: "footer__tagline", {t!("hero-subtitle")} }
                }

                div { class: "footer__column",
                    h4 { {t!("nav-services")} }
                    ul {
                        {service_shortcuts.iter().map(|title| {
                            let mut state = state;
                            rsx! {
                                li { key: "{title}",
                                    button {
                                        r#type: "button",
                                        class: "footer__link",
                                        onclick: move |_| state.navigate(Page::Services),
                                        "{title}"
                                    }
                                }
                            }
                        })}
                    }
                }

                div { class: "footer__column",
                    h4 { {t!("footer-navigation")} }
                    ul {
                        {footer_link(state, Page::Home, t!("nav-home"))}
                        {footer_link(state, Page::About, t!("nav-about"))}
                        {footer_link(state, Page::Faq, t!("nav-faq"))}
                        {footer_link(state, Page::Blog, t!("nav-blog"))}
                    }
                }

                div { class: "footer__column footer__contact",
                    h4 { {t!("nav-contact")} }
                    p { {t!("footer-address")} }
                    p {
                        a { class: "footer__link", href: PHONE_URI, {t!("footer-phone")} }
                    }
                    p {
                        a {
                            class: "footer__link",
                            href: "mailto:greg@every-day-care.com",
                            {t!("footer-email")}
                        }
                    }
                }
            }

            div { class: "footer__legal",
                p { {t!("footer-rights")} }
                div { class: "footer__legal-links",
                    span { {t!("footer-privacy")} }
                    span { {t!("footer-complaints")} }
                    span { {t!("footer-safeguarding")} }
                }
            }
        }
    }
}

fn footer_link(mut state: AppState, page: Page, label: String) -> Element {
    rsx! {
        li {
            button {
                r#type: "button",
                class: "footer__link",
                onclick: move |_| state.navigate(page),
                "{label}"
            }
        }
    }
}
