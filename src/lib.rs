//! FinBud landing site.
//!
//! Server-rendered marketing page for FinBud, an AI financial assistant.
//! The page is composed from Leptos SSR components and shipped as plain
//! HTML; the only client-side state is the chat draft, wired up through
//! Alpine.js directives emitted by the components.
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, environment, CLI)
//! - [`server`]: Router construction and server startup
//! - [`ui`]: Page components and rendering

pub mod config;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
