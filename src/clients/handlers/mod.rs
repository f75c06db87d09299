//! HTTP request handlers for the clients server.

/// Client CRUD endpoints
pub mod clients;
/// Health check endpoint
pub mod health;
