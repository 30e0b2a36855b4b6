//! Promotional Block Component
//!
//! A single-action promotional section: heading, supporting copy and one
//! primary button. One configurable component covers both shipped uses
//! (inline hero section and bottom-of-page banner); the two differ only
//! in emphasis styling, never in behavior.

use dioxus::prelude::*;

use crate::app::Route;

/// The primary action of a promo block.
///
/// Exactly one mechanism exists per block: either a route push handled by
/// the router, or a caller-supplied handler invoked once per activation.
/// The enum makes "both" and "neither" unrepresentable, so the contract
/// holds at construction time rather than at click time.
#[derive(Clone, PartialEq)]
pub enum PromoAction {
    /// Request navigation to this route on activation.
    Navigate(Route),
    /// Invoke this handler synchronously, once per activation.
    Activate(EventHandler<()>),
}

/// Visual emphasis of the block. Styling and sizing only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PromoEmphasis {
    /// Mid-page call-to-action section
    #[default]
    Inline,
    /// Full-width closing banner
    Banner,
}

impl PromoEmphasis {
    /// CSS class for the section container.
    pub fn block_class(&self) -> &'static str {
        match self {
            PromoEmphasis::Inline => "promo-block promo-block--inline",
            PromoEmphasis::Banner => "promo-block promo-block--banner",
        }
    }

    /// CSS class for the action button.
    pub fn button_class(&self) -> &'static str {
        match self {
            PromoEmphasis::Inline => "btn-cta",
            PromoEmphasis::Banner => "btn-cta btn-cta--large",
        }
    }
}

/// Promotional section with exactly one primary action.
///
/// # Example
///
/// ```ignore
/// PromoBlock {
///     heading: "Dê vida às suas ideias".to_string(),
///     body: "Crie campanhas completas em segundos.".to_string(),
///     action_label: "Experimentar Gratuitamente".to_string(),
///     action: PromoAction::Navigate(Route::Auth {}),
///     emphasis: PromoEmphasis::Inline,
/// }
/// ```
#[component]
pub fn PromoBlock(
    /// Section heading (non-empty)
    heading: String,
    /// Supporting copy
    body: String,
    /// Button label (non-empty)
    action_label: String,
    /// What activating the button does
    action: PromoAction,
    /// Visual emphasis variant
    #[props(default)]
    emphasis: PromoEmphasis,
) -> Element {
    debug_assert!(!heading.is_empty(), "PromoBlock requires a heading");
    debug_assert!(!action_label.is_empty(), "PromoBlock requires an action label");

    let navigator = use_navigator();

    let activate = move |_| match &action {
        PromoAction::Navigate(route) => {
            tracing::info!("Promo action activated, navigating to {}", route);
            navigator.push(route.clone());
        }
        PromoAction::Activate(handler) => {
            handler.call(());
        }
    };

    rsx! {
        section { class: "{emphasis.block_class()}",
            h2 { class: "promo-block__heading", "{heading}" }
            p { class: "promo-block__body", "{body}" }
            button {
                class: "{emphasis.button_class()}",
                onclick: activate,
                "{action_label}"
            }
        }
    }
}
