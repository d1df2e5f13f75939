//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs the route guard for its audience and delegates
//! rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
