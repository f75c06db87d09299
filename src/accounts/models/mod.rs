//! Data models for the accounts service.
//!
//! Entities map to the accounts database tables; request/response types are
//! the JSON surface of the API.

/// Bank account model
pub mod account;
/// Local replica of registered clients
pub mod client;
/// Deposit/withdrawal movement model
pub mod movement;
/// Movement report types
pub mod report;
