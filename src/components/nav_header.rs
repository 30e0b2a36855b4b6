//! Navigation Header Component
//!
//! Slim horizontal header with the product title on the left and a
//! sign-up link on the right.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NavHeader() -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                // Left: product title
                Link { to: Route::Landing {}, class: "nav-title",
                    span { class: "app-title", "Anuncia" }
                }

                // Right: sign-up link
                nav { class: "nav-links",
                    Link { to: Route::Auth {}, class: "nav-link", "Criar conta" }
                }
            }
        }
    }
}
