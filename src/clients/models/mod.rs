//! Data models for the clients service.

/// Client entity and registration DTOs
pub mod client;
