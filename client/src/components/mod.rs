//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared session state from Leptos context providers.

pub mod toast_stack;
pub mod user_summary;
