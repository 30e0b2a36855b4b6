//! Landing page - the Anuncia marketing experience.
//!
//! Composes the hero call-to-action, the example-creative gallery and the
//! closing banner. Every call-to-action navigates to the sign-up page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{AssetGrid, NavHeader, PromoAction, PromoBlock, PromoEmphasis};
use crate::content;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let hero = content::hero_promo();
    let closing = content::closing_promo();

    rsx! {
        main { class: "landing",
            NavHeader {}

            // Hero call-to-action
            PromoBlock {
                heading: hero.heading,
                body: hero.body,
                action_label: hero.action_label,
                action: PromoAction::Navigate(Route::Auth {}),
                emphasis: PromoEmphasis::Inline,
            }

            // Example creatives
            section { class: "gallery-section",
                h2 { class: "section-header", "Anúncios criados com Anuncia" }
                p { class: "body-text", "Exemplos reais, gerados em segundos." }

                AssetGrid { items: content::gallery_items() }
            }

            // Closing banner
            PromoBlock {
                heading: closing.heading,
                body: closing.body,
                action_label: closing.action_label,
                action: PromoAction::Navigate(Route::Auth {}),
                emphasis: PromoEmphasis::Banner,
            }
        }
    }
}
