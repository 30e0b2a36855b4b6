use dioxus::prelude::*;

use crate::pages::{Auth, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with hero, gallery and closing call-to-action
/// - `/auth` - Sign-up page, the target of every landing call-to-action
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth")]
    Auth {},
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_route_path() {
        assert_eq!(Route::Landing {}.to_string(), "/");
    }

    #[test]
    fn test_auth_route_path() {
        assert_eq!(Route::Auth {}.to_string(), "/auth");
    }
}
