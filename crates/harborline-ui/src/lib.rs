//! Harborline Site UI Components
//!
//! Presentational Dioxus components for the Harborline charter page.
//! They hold no state of their own: the page owns the state types from
//! `harborline-core` and passes snapshots and callbacks down.
//!
//! ## Class Conventions
//!
//! Components emit the class names the stylesheet keys on:
//! - **`active`**: current slide/indicator, open FAQ item, open menu
//! - **`toast success` / `toast error`**: notification accents
//! - **`ph ph-*`**: Phosphor icon glyphs

pub mod components;

pub use components::*;
