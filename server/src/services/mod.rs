//! Auth-service integration used by the access guard and HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `auth` defines the provider seam, `gotrue` implements it over HTTP, and
//! `session` owns the cookie pair and the per-request session check. Route
//! handlers stay focused on protocol translation.

pub mod auth;
pub mod gotrue;
pub mod session;
