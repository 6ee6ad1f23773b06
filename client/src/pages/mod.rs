//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages render the site header and own their form state. Dashboard
//! pages render inside `DashboardLayout`, which gates them on the session.

pub mod dashboard;
pub mod forgot_password;
pub mod habits;
pub mod home;
pub mod info;
pub mod login;
pub mod profile;
pub mod progress;
pub mod register;
pub mod reset_password;
pub mod settings;
