use dioxus::prelude::*;

use crate::app::PHONE_URI;
use crate::components::ConsultationForm;
use crate::content;
use crate::core::nav::{AppState, Page};

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let lang_marker = state.language().locale_tag();
    let content = content::for_language(state.language());

    #[cfg(debug_assertions)]
    {
        log_home_render(lang_marker);
    }

    rsx! {
        // Hidden marker node ensures reactive dependency on the language.
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",

            // Hero
            section { class: "hero",
                h1 { class: "hero__title", {crate::t!("hero-title")} }
                p { class: "hero__subtitle", {crate::t!("hero-subtitle")} }
                div { class: "hero__actions",
                    a {
                        class: "button button--primary",
                        href: "#consultation-form",
                        {crate::t!("hero-cta-primary")}
                    }
                    a {
                        class: "button button--ghost",
                        href: PHONE_URI,
                        {crate::t!("hero-cta-secondary")}
                    }
                }
                ul { class: "hero__badges",
                    li { {crate::t!("trust-dbs")} }
                    li { {crate::t!("trust-cqc")} }
                    li { {crate::t!("trust-gdpr")} }
                    li { {crate::t!("trust-training")} }
                }
            }

            // Founder message
            section { class: "founder",
                span { class: "founder__eyebrow", {crate::t!("founder-title")} }
                h2 { class: "founder__name", {crate::t!("founder-name")} }
                blockquote { class: "founder__message", {crate::t!("founder-message")} }
                button {
                    r#type: "button",
                    class: "founder__more",
                    onclick: {
                        let mut state = state;
                        move |_| state.navigate(Page::About)
                    },
                    {crate::t!("founder-signature")}
                }
            }

            // Services highlight (first six summaries)
            section { class: "services-highlight",
                div { class: "section-heading",
                    h2 { {crate::t!("services-title")} }
                    p { {crate::t!("services-subtitle")} }
                }
                div { class: "services-highlight__grid",
                    {content.service_summaries.iter().take(6).map(|service| {
                        let mut state = state;
                        rsx! {
                            article { key: "{service.id}", class: "service-card",
                                h3 { class: "service-card__title", "{service.title}" }
                                p { class: "service-card__description", "{service.description}" }
                                button {
                                    r#type: "button",
                                    class: "service-card__more",
                                    onclick: move |_| state.navigate(Page::Services),
                                    {crate::t!("services-learn-more")}
                                }
                            }
                        }
                    })}
                }
                div { class: "services-highlight__all",
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: {
                            let mut state = state;
                            move |_| state.navigate(Page::Services)
                        },
                        {crate::t!("services-view-all")}
                    }
                }
            }

            // Testimonials + compliance panel
            section { class: "trust",
                div { class: "trust__testimonials",
                    h2 { {crate::t!("testimonials-title")} }
                    {content.testimonials.iter().map(|item| rsx! {
                        figure { key: "{item.author}", class: "testimonial",
                            blockquote { class: "testimonial__text", "{item.text}" }
                            figcaption {
                                p { class: "testimonial__author", "{item.author}" }
                                if !item.context.is_empty() {
                                    p { class: "testimonial__context", "{item.context}" }
                                }
                            }
                        }
                    })}
                    p { class: "trust__note", {crate::t!("testimonials-trust-note")} }
                }
                div { class: "trust__compliance",
                    h3 { {crate::t!("trust-compliance-title")} }
                    ul {
                        {content.compliance.iter().map(|item| rsx! {
                            li { key: "{item.title}", class: "trust__item",
                                h4 { "{item.title}" }
                                p { "{item.description}" }
                            }
                        })}
                    }
                    p { class: "trust__footer-line", {crate::t!("trust-compliance-footer")} }
                }
            }

            // Areas covered
            section { class: "areas",
                h2 { {crate::t!("areas-title")} }
                p { class: "areas__intro", {crate::t!("areas-intro")} }
                ul { class: "areas__list",
                    {content.areas.iter().map(|area| rsx! {
                        li { key: "{area}", class: "areas__pill", "{area}" }
                    })}
                }
                p { class: "areas__bottom-line", {crate::t!("areas-bottom-line")} }
            }

            section { class: "section section--form",
                ConsultationForm {}
            }
        }
    }
}
