use dioxus::prelude::*;

use crate::components::ConsultationForm;
use crate::content;
use crate::core::nav::AppState;

#[component]
pub fn Services() -> Element {
    let state = use_context::<AppState>();
    let lang_marker = state.language().locale_tag();
    let content = content::for_language(state.language());

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-services",

            section { class: "page-banner",
                h1 { {crate::t!("services-page-title")} }
                p { {crate::t!("services-page-intro")} }
            }

            section { class: "service-details",
                {content.detailed_services.iter().map(|service| rsx! {
                    article { key: "{service.id}", class: "service-detail",
                        div { class: "service-detail__icon", "{service.icon}" }
                        h2 { class: "service-detail__title", "{service.title}" }
                        p { class: "service-detail__reassurance", "{service.reassurance}" }
                        div { class: "service-detail__section",
                            h4 { {crate::t!("services-who-label")} }
                            p { "{service.who_it_is_for}" }
                        }
                        div { class: "service-detail__section",
                            h4 { {crate::t!("services-how-label")} }
                            p { "{service.how_we_provide}" }
                        }
                        a {
                            class: "button button--primary",
                            href: "#consultation-form",
                            {crate::t!("services-discuss")}
                        }
                    }
                })}
            }

            section { class: "services-closing",
                h2 { {crate::t!("services-closing-title")} }
                p { {crate::t!("services-closing-text")} }
                p { class: "services-closing__sub", {crate::t!("services-closing-sub")} }
                a {
                    class: "button button--accent",
                    href: "#consultation-form",
                    {crate::t!("nav-consultation")}
                }
            }

            section { class: "section section--form",
                ConsultationForm {}
            }
        }
    }
}
