//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the FinBud
//! landing page, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Main application component and page rendering
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`landing`]: Landing page sections

pub mod app;
pub mod components;
pub mod landing;

pub use app::{render_landing, render_not_found};
