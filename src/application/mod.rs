//! Application layer containing the checkout flow orchestration.
//!
//! This module defines the `CheckoutController`, the single owner of the wizard
//! state. Collaborator callbacks enter through its `on_*` methods and are
//! applied one at a time, in arrival order.

pub mod config;
pub mod controller;
