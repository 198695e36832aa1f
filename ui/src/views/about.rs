use dioxus::prelude::*;

use crate::components::ConsultationForm;
use crate::content;
use crate::core::nav::AppState;

#[component]
pub fn About() -> Element {
    let state = use_context::<AppState>();
    let lang_marker = state.language().locale_tag();
    let content = content::for_language(state.language());

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-about",

            section { class: "page-banner page-banner--accent",
                h1 { {crate::t!("about-intro-title")} }
                p { {crate::t!("about-intro-text")} }
            }

            section { class: "about-founder",
                h2 { {crate::t!("about-founder-title")} }
                p { {crate::t!("about-founder-text")} }

                div { class: "about-values",
                    h3 { {crate::t!("about-values-title")} }
                    ul {
                        {content.values.iter().map(|value| rsx! {
                            li { key: "{value.title}", class: "about-values__item",
                                span { class: "about-values__icon", "{value.icon}" }
                                div {
                                    h4 { "{value.title}" }
                                    p { "{value.description}" }
                                }
                            }
                        })}
                    }
                }
            }

            section { class: "about-how",
                h2 { {crate::t!("about-how-title")} }
                p { {crate::t!("about-how-text")} }
                h3 { {crate::t!("about-quality-title")} }
                div { class: "about-how__grid",
                    {content.quality_safety.iter().map(|item| rsx! {
                        div { key: "{item.title}", class: "about-how__card",
                            h4 { "{item.title}" }
                            p { "{item.description}" }
                        }
                    })}
                }
            }

            section { class: "about-local",
                h2 { {crate::t!("about-local-title")} }
                p { {crate::t!("about-local-text")} }
                p { class: "about-local__closing", {crate::t!("about-closing")} }
            }

            section { class: "section section--form",
                ConsultationForm {}
            }
        }
    }
}
