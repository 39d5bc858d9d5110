use dioxus::prelude::*;

use crate::app::components::{AuthCard, Layout, PasswordField, TextField};
use crate::app::session_context::use_session;
use crate::app::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let email = use_signal(String::new);
    let password = use_signal(String::new);

    // Drop a banner left over from the other auth page
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
        Layout { title: "Sign In".to_string(), minimal: true,
            div { class: "min-h-screen pt-28 pb-16 px-4 bg-gradient-to-b from-black via-neutral-900 to-black",
                AuthCard {
                    title: "Sign In".to_string(),
                    submit_label: "Sign In".to_string(),
                    busy_label: "Signing In...".to_string(),
                    busy: session.is_loading(),
                    error: session.error(),
                    on_submit: move |_| submit.login(email(), password()),
                    on_dismiss_error: move |_| dismiss.clear_error(),
                    footer: rsx! {
                        p {
                            "New to Cinestream? "
                            Link { to: Route::Signup {}, class: "text-white hover:underline", "Sign up now" }
                            "."
                        }
                    },
                    TextField { id: "email".to_string(), label: "Email or phone number".to_string(), input_type: "email".to_string(), value: email }
                    PasswordField { value: password }
                    div { class: "flex items-center justify-between text-sm text-white/50",
                        label { class: "flex items-center gap-2",
                            input { r#type: "checkbox", class: "h-4 w-4" }
                            "Remember me"
                        }
                        span { class: "hover:underline cursor-pointer", "Need help?" }
                    }
                }
            }
        }
    }
}
