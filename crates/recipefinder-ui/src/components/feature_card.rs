//! Feature Card Component
//!
//! Static highlight tile used in the landing page features section.

use dioxus::prelude::*;

/// Icon, heading and one-line blurb
#[component]
pub fn FeatureCard(
    /// Emoji or symbol shown above the title
    icon: String,
    title: String,
    body: String,
) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-card__icon", "{icon}" }
            h3 { class: "feature-card__title", "{title}" }
            p { class: "feature-card__body", "{body}" }
        }
    }
}
