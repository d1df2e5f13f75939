//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router and browser-storage concerns from page
//! logic to improve reuse and testability.

pub mod auth;
pub mod storage;
