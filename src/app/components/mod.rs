//! Shared UI components for the Dioxus fullstack web UI.

pub mod auth_form;
pub mod error_alert;
pub mod finder_results;
pub mod finder_upload;
pub mod footer;
pub mod guard;
pub mod header;
pub mod hero;
pub mod layout;
pub mod movie_card;
pub mod movie_row;
pub mod spinner;

pub use auth_form::{AuthCard, PasswordField, TextField};
pub use error_alert::ErrorAlert;
pub use finder_results::FinderResults;
pub use finder_upload::FinderUpload;
pub use footer::Footer;
pub use guard::Protected;
pub use header::Header;
pub use hero::Hero;
pub use layout::Layout;
pub use movie_card::MovieCard;
pub use movie_row::MovieRow;
pub use spinner::Spinner;
