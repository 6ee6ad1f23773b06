//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types are plain values; pages hold them in `RwSignal`s and drive
//! them through the pure transitions defined here.

pub mod auth;
