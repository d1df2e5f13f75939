//! Signal payloads shared through Leptos context.

pub mod auth;
pub mod toasts;
