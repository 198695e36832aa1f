#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

// Embedded shared theme (ui/assets/theme/main.css) so packaged builds do
// not depend on asset paths resolving at runtime.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Everyday Care Plus – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("Rebuild with the `desktop` feature (enabled by default) to launch the shell.");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }

        ui::App {}
    }
}
