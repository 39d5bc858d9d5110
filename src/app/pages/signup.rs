use dioxus::prelude::*;

use crate::app::components::{AuthCard, Layout, PasswordField, TextField};
use crate::app::session_context::use_session;
use crate::app::Route;

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);

    let stale = session.clone();
    use_hook(move || stale.clear_error());

    let signed_in = session.clone();
    use_effect(move || {
        if signed_in.is_authenticated() {
            navigator().replace(Route::Home {});
        }
    });

    let submit = session.clone();
    let dismiss = session.clone();

    rsx! {
        Layout { title: "Sign Up".to_string(), minimal: true,
            div { class: "min-h-screen pt-28 pb-16 px-4 bg-gradient-to-b from-black via-neutral-900 to-black",
                AuthCard {
                    title: "Sign Up".to_string(),
                    submit_label: "Sign Up".to_string(),
                    busy_label: "Creating Account...".to_string(),
                    busy: session.is_loading(),
                    error: session.error(),
                    on_submit: move |_| submit.signup(email(), password(), name()),
                    on_dismiss_error: move |_| dismiss.clear_error(),
                    footer: rsx! {
                        p {
                            "Already have an account? "
                            Link { to: Route::Login {}, class: "text-white hover:underline", "Sign in" }
                            "."
                        }
                    },
                    TextField { id: "name".to_string(), label: "Name".to_string(), value: name, required: false }
                    TextField { id: "email".to_string(), label: "Email".to_string(), input_type: "email".to_string(), value: email }
                    PasswordField { value: password }
                }
            }
        }
    }
}
