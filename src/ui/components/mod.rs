//! ShadCN-style reusable UI components.
//!
//! This module provides the small set of composable, stateless primitives the
//! landing page is built from, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: clickable button with variants and sizes
//! - [`Card`], [`CardContent`]: card container
//! - [`Input`]: text input field
//! - [`Badge`]: label/tag pill
//! - [`icons`]: inline SVG icon components

mod badge;
mod button;
mod card;
mod icons;
mod input;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent};
pub use icons::*;
pub use input::Input;
