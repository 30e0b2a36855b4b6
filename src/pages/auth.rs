//! Sign-up page - target of every landing call-to-action.

use dioxus::prelude::*;

use crate::app::Route;

/// Sign-up placeholder page.
#[component]
pub fn Auth() -> Element {
    rsx! {
        main { class: "auth",
            h1 { class: "page-title", "Crie sua conta" }
            p { class: "body-text", "O cadastro estará disponível em breve." }

            Link { to: Route::Landing {}, class: "nav-link", "Voltar" }
        }
    }
}
