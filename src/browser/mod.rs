//! Browser session management
//!
//! Thin wrapper over `headless_chrome`: launching or connecting to Chrome,
//! navigating the active tab and locating listing cards.

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
