//! Cinestream - streaming catalog demo with a scene finder
//!
//! This library provides:
//! - A static movie catalog with scenes and browse rows
//! - Mock sign-in persisted in browser storage
//! - Route guarding for signed-in pages
//! - A scene finder that "recognises" an uploaded screenshot
//! - A synthetic player driven by timers
//! - Web UI (Dioxus fullstack)

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod finder;
pub mod playback;
pub mod session;
pub mod storage;
pub mod timer;
