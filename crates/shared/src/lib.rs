//! Shared utilities for the Villamar backend.
//!
//! Framework-free building blocks used by every other crate:
//! password hashing, JWT issuance/validation, token hashing,
//! slug handling, HTML sanitization, and field validators.

pub mod crypto;
pub mod jwt;
pub mod password;
pub mod sanitize;
pub mod slug;
pub mod validation;
