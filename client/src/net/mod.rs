//! Networking modules for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `transport` puts them behind a swappable trait,
//! `auth_events` is the in-process notification hub, and `auth_client` ties
//! them together for pages.

pub mod api;
pub mod auth_client;
pub mod auth_events;
pub mod transport;
