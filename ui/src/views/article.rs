use dioxus::prelude::*;

use crate::components::ConsultationForm;
use crate::content;
use crate::core::nav::{AppState, Page};

/// Single advice article, resolved from the session slug.
///
/// Resolution can fail (a stale slug, or one belonging to the other
/// language's collection after a switch). That is recoverable, not an
/// error: an effect redirects to the blog listing and this pass renders
/// nothing. The effect reads the language and slug through the signal so
/// it re-checks whenever either changes.
#[component]
pub fn Article() -> Element {
    let state = use_context::<AppState>();
    let lang_marker = state.language().locale_tag();

    use_effect(move || {
        let mut state = state;
        let lang = state.language();
        let resolved = state
            .slug()
            .is_some_and(|slug| content::for_language(lang).post_by_slug(&slug).is_some());
        if !resolved {
            state.navigate(Page::Blog);
        }
    });

    let content = content::for_language(state.language());
    let slug = state.slug();
    let Some(post) = slug.as_deref().and_then(|s| content.post_by_slug(s)) else {
        // Redirect is underway; nothing to show for this pass.
        return rsx! {};
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-article",

            section { class: "page-banner page-banner--article",
                button {
                    r#type: "button",
                    class: "article__back",
                    onclick: {
                        let mut state = state;
                        move |_| state.navigate(Page::Blog)
                    },
                    {crate::t!("blog-back")}
                }
                span { class: "article__category", "{post.category}" }
                h1 { class: "article__title", "{post.title}" }
                div { class: "article__meta",
                    span { "{post.date}" }
                    span { "•" }
                    span { "{post.read_time} " {crate::t!("blog-read-time-label")} }
                }
            }

            article { class: "article__body",
                p { class: "article__intro", "{post.intro}" }

                {post.blocks.iter().map(|block| rsx! {
                    div { key: "{block.heading}", class: "article__block",
                        h2 { "{block.heading}" }
                        p { "{block.body}" }
                        if !block.bullets.is_empty() {
                            ul { class: "article__bullets",
                                {block.bullets.iter().map(|bullet| rsx! {
                                    li { key: "{bullet}", "{bullet}" }
                                })}
                            }
                        }
                    }
                })}

                div { class: "article__cta",
                    h3 { {crate::t!("blog-article-cta")} }
                    a {
                        class: "button button--primary",
                        href: "#consultation-form",
                        {crate::t!("blog-article-cta-button")}
                    }
                }
            }

            section { class: "section section--form",
                ConsultationForm {}
            }
        }
    }
}
