//! Dioxus fullstack page components.
//!
//! Every page except login and signup sits behind the session guard.

mod home;
mod login;
mod movie_detail;
mod not_found;
mod scene_finder;
mod signup;
mod watch;

pub use home::Home;
pub use login::Login;
pub use movie_detail::MovieDetail;
pub use not_found::NotFound;
pub use scene_finder::SceneFinder;
pub use signup::Signup;
pub use watch::Watch;
