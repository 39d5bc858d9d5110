//! Wrapper for pages that need a signed-in user.

use dioxus::prelude::*;

use crate::app::session_context::use_session;
use crate::app::{LoadingScreen, Route};
use crate::session::guard::GuardDecision;

/// Renders `children` only for a signed-in user. While the stored session is
/// still being read it shows a spinner; without a session it replaces the
/// current history entry with the login page.
#[component]
pub fn Protected(children: Element) -> Element {
    let session = use_session();
    let decision = session.decision();

    use_effect(move || {
        if session.decision() == GuardDecision::RedirectToLogin {
            navigator().replace(Route::Login {});
        }
    });

    match decision {
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Pending | GuardDecision::RedirectToLogin => rsx! { LoadingScreen {} },
    }
}
