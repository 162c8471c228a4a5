//! Client application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is wrapped in an `RwSignal` and provided through Leptos
//! context by the root `App`. Pure transitions live on the structs so they can
//! be unit-tested without a reactive runtime.

pub mod notifications;
pub mod session;
pub mod slideshow;
pub mod tracks;
pub mod ui;
