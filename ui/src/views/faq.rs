use dioxus::prelude::*;

use crate::content;
use crate::core::accordion::Accordion;
use crate::core::nav::AppState;

/// Grouped question/answer accordion. Open state is keyed by question
/// text, so switching language collapses everything; the other
/// language's questions are different keys.
#[component]
pub fn Faq() -> Element {
    let state = use_context::<AppState>();
    let lang_marker = state.language().locale_tag();
    let content = content::for_language(state.language());

    let mut open_items = use_signal(Accordion::default);

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-faq",

            section { class: "page-banner",
                h1 { {crate::t!("faq-title")} }
                p { {crate::t!("faq-intro")} }
            }

            section { class: "faq-sections",
                {content.faq_sections.iter().map(|section| rsx! {
                    div { key: "{section.title}", class: "faq-section",
                        h2 { class: "faq-section__title", "{section.title}" }
                        div { class: "faq-section__items",
                            {section.items.iter().map(|item| {
                                let is_open = open_items.read().is_open(item.question);
                                let question = item.question;
                                rsx! {
                                    div { key: "{item.question}", class: "faq-item",
                                        button {
                                            r#type: "button",
                                            class: if is_open {
                                                "faq-item__question faq-item__question--open"
                                            } else {
                                                "faq-item__question"
                                            },
                                            aria_expanded: is_open,
                                            onclick: move |_| {
                                                open_items.with_mut(|open| open.toggle(question));
                                            },
                                            "{item.question}"
                                        }
                                        if is_open {
                                            p { class: "faq-item__answer", "{item.answer}" }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                })}
            }

            section { class: "faq-closing",
                p { {crate::t!("faq-closing")} }
                a {
                    class: "button button--primary",
                    href: "#consultation-form",
                    {crate::t!("nav-contact")}
                }
            }
        }
    }
}
