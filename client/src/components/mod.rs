//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (logo, toasts, modals, form fields) while
//! reading/writing state from Leptos context providers.

pub mod form_field;
pub mod logo_button;
pub mod notification_stack;
pub mod slideshow_modal;
pub mod welcome_modal;
