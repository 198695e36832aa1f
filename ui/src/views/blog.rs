use dioxus::prelude::*;

use crate::content;
use crate::core::nav::AppState;

/// Advice listing with an exact-match category filter. `None` shows the
/// whole collection; the filter starts unset and never persists.
#[component]
pub fn Blog() -> Element {
    let state = use_context::<AppState>();
    let lang_marker = state.language().locale_tag();
    let content = content::for_language(state.language());

    let mut active_category = use_signal(|| Option::<String>::None);

    let selected = active_category();
    let posts = content.posts_in_category(selected.as_deref());

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-blog",

            section { class: "page-banner",
                h1 { {crate::t!("blog-title")} }
                p { {crate::t!("blog-intro")} }
            }

            section { class: "blog-filter",
                button {
                    r#type: "button",
                    class: if selected.is_none() {
                        "blog-filter__chip blog-filter__chip--active"
                    } else {
                        "blog-filter__chip"
                    },
                    onclick: move |_| active_category.set(None),
                    {crate::t!("blog-all-categories")}
                }
                {content.blog_categories.iter().map(|category| {
                    let is_active = selected.as_deref() == Some(*category);
                    let category = *category;
                    rsx! {
                        button {
                            key: "{category}",
                            r#type: "button",
                            class: if is_active {
                                "blog-filter__chip blog-filter__chip--active"
                            } else {
                                "blog-filter__chip"
                            },
                            onclick: move |_| active_category.set(Some(category.to_string())),
                            "{category}"
                        }
                    }
                })}
            }

            section { class: "blog-grid",
                {posts.iter().map(|post| {
                    let mut state = state;
                    let slug = post.slug;
                    rsx! {
                        article { key: "{post.slug}", class: "post-card",
                            span { class: "post-card__category", "{post.category}" }
                            div { class: "post-card__meta",
                                span { "{post.date}" }
                                span { "•" }
                                span { "{post.read_time} " {crate::t!("blog-read-time-label")} }
                            }
                            h3 { class: "post-card__title", "{post.title}" }
                            p { class: "post-card__excerpt", "{post.excerpt}" }
                            button {
                                r#type: "button",
                                class: "post-card__more",
                                onclick: move |_| state.open_article(slug),
                                {crate::t!("blog-read-more")}
                            }
                        }
                    }
                })}
            }
        }
    }
}
