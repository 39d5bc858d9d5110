//! Pieces shared by the sign-in and sign-up forms.

use dioxus::prelude::*;

use super::{ErrorAlert, Spinner};

/// Dark card the auth forms sit in, with title, error banner and submit button.
#[component]
pub fn AuthCard(
    title: String,
    /// Submit label while idle
    submit_label: String,
    /// Submit label while the request is in flight
    busy_label: String,
    busy: bool,
    error: Option<String>,
    on_submit: EventHandler<()>,
    on_dismiss_error: EventHandler<()>,
    /// Fields
    children: Element,
    /// Links under the form
    footer: Element,
) -> Element {
    rsx! {
        div { class: "w-full max-w-md mx-auto bg-black/75 p-8 md:p-16 rounded",
            h1 { class: "text-3xl font-bold mb-6", "{title}" }
            form {
                class: "space-y-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                if let Some(message) = error {
                    ErrorAlert { message, on_dismiss: move |_| on_dismiss_error.call(()) }
                }
                {children}
                button {
                    r#type: "submit",
                    disabled: busy,
                    class: if busy { "w-full py-3 mt-6 rounded font-medium bg-red-600/60 cursor-not-allowed" } else { "w-full py-3 mt-6 rounded font-medium bg-red-600 hover:bg-red-700 transition" },
                    if busy {
                        span { class: "flex items-center justify-center gap-2",
                            Spinner { size: "h-5 w-5".to_string() }
                            "{busy_label}"
                        }
                    } else {
                        "{submit_label}"
                    }
                }
            }
            div { class: "mt-12 text-white/50", {footer} }
        }
    }
}

/// Input with a floating label.
#[component]
pub fn TextField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    value: Signal<String>,
    #[props(default = true)] required: bool,
) -> Element {
    let mut value = value;
    let label_class = if value.read().is_empty() {
        "absolute text-white/50 left-4 top-4 transition-all pointer-events-none"
    } else {
        "absolute text-white/50 left-4 top-1 text-xs transition-all pointer-events-none"
    };

    rsx! {
        div { class: "relative",
            input {
                id: "{id}",
                r#type: "{input_type}",
                required,
                class: "w-full bg-neutral-700 px-4 pt-5 pb-2 rounded focus:outline-none focus:ring-1 focus:ring-red-600",
                placeholder: " ",
                value: "{value}",
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
            label { r#for: "{id}", class: label_class, "{label}" }
        }
    }
}

/// Password input with a SHOW/HIDE toggle once something is typed.
#[component]
pub fn PasswordField(value: Signal<String>) -> Element {
    let mut value = value;
    let mut visible = use_signal(|| false);
    let label_class = if value.read().is_empty() {
        "absolute text-white/50 left-4 top-4 transition-all pointer-events-none"
    } else {
        "absolute text-white/50 left-4 top-1 text-xs transition-all pointer-events-none"
    };

    rsx! {
        div { class: "relative",
            input {
                id: "password",
                r#type: if visible() { "text" } else { "password" },
                required: true,
                class: "w-full bg-neutral-700 px-4 pt-5 pb-2 pr-16 rounded focus:outline-none focus:ring-1 focus:ring-red-600",
                placeholder: " ",
                value: "{value}",
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
            label { r#for: "password", class: label_class, "Password" }
            if !value.read().is_empty() {
                button {
                    r#type: "button",
                    class: "absolute right-3 top-4 text-white/50 text-sm",
                    onclick: move |_| visible.set(!visible()),
                    if visible() { "HIDE" } else { "SHOW" }
                }
            }
        }
    }
}
