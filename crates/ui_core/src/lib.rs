//! Core UI state for the InnovaEd client.
//!
//! This crate holds the pure, host-testable logic behind the web frontend:
//! viewport classification, the sidebar open/closed controller, and the
//! login-form validator. Nothing here touches the DOM; the `frontend`
//! crate wires these into Yew components.

pub mod login;
pub mod sidebar;
pub mod viewport;
