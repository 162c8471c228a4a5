//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, webhook calls,
//! navigation) and delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod registration;
pub mod tracks;
