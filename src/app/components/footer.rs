use dioxus::prelude::*;

const LINKS: [&str; 8] = [
    "Audio Description",
    "Help Center",
    "Gift Cards",
    "Media Center",
    "Investor Relations",
    "Jobs",
    "Terms of Use",
    "Privacy",
];

#[component]
pub fn Footer() -> Element {
    let version = env!("CINESTREAM_VERSION");
    let git_sha = env!("CINESTREAM_GIT_SHA");

    rsx! {
        footer { class: "max-w-5xl mx-auto w-full px-4 md:px-12 py-10 text-white/50 text-sm",
            ul { class: "grid grid-cols-2 md:grid-cols-4 gap-3 mb-6",
                for link in LINKS {
                    li { key: "{link}", span { class: "hover:underline cursor-pointer", "{link}" } }
                }
            }
            small { "Cinestream v{version} ({git_sha})" }
        }
    }
}
