//! Application root: context injection and the page resolver.
//!
//! Navigation is in-memory only: the resolver is a plain `match` over the
//! session's page, mounting exactly one view per render. There is no
//! router and the address bar never changes.

use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::core::nav::{AppState, Page};
use crate::core::submit::SubmissionHandle;
use crate::i18n;
use crate::views::{About, Article, Blog, Faq, Home, Services};

// Shared theme; platform launchers may add their own resources on top.
const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Dialer action target. Fire-and-forget: the app never inspects the result.
pub const PHONE_URI: &str = "tel:07563011244";

/// Messaging deep link with the same number.
pub const WHATSAPP_URI: &str = "https://wa.me/447563011244";

#[component]
pub fn App() -> Element {
    i18n::init();

    // Explicit dependencies for the whole tree: navigation state and the
    // submission capability. Views receive both through context instead of
    // reaching for globals.
    let state = use_context_provider(AppState::new);
    use_context_provider(SubmissionHandle::simulated);

    let page = state.page();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "site",
            SiteHeader {}

            main { class: "site__main",
                {
                    match page {
                        Page::Home => rsx! { Home {} },
                        Page::About => rsx! { About {} },
                        Page::Services => rsx! { Services {} },
                        Page::Faq => rsx! { Faq {} },
                        Page::Blog => rsx! { Blog {} },
                        Page::Article => rsx! { Article {} },
                    }
                }
            }

            SiteFooter {}

            div { class: "floating-actions",
                a {
                    class: "floating-actions__call",
                    href: PHONE_URI,
                    aria_label: "Call Everyday Care Plus",
                    "☎"
                }
                a {
                    class: "floating-actions__chat",
                    href: WHATSAPP_URI,
                    aria_label: "Message Everyday Care Plus",
                    "💬"
                }
            }
        }
    }
}
