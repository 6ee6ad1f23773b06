//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site and dashboard chrome while reading/writing shared
//! state from Leptos context providers.

pub mod dashboard_layout;
pub mod form_field;
pub mod preference_toggles;
pub mod sidebar;
pub mod site_header;
