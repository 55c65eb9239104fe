//! Domain models for the Villamar backend.
//!
//! Plain data shapes shared between the API and persistence layers:
//! entities, typed filters, and validated request bodies. No I/O.

pub mod models;
