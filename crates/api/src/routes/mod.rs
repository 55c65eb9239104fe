//! HTTP route handlers.

pub mod admin_blog;
pub mod admin_dashboard;
pub mod admin_leads;
pub mod admin_properties;
pub mod auth;
pub mod blog;
pub mod health;
pub mod leads;
pub mod properties;
