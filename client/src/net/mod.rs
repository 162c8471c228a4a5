//! Networking modules for the external webhooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `webhook` posts form bodies to the registration and login endpoints and
//! interprets their loosely shaped responses.

pub mod webhook;
