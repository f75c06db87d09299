//! HTTP request handlers for the accounts server.
//!
//! Each handler is an async function that receives request data (JSON
//! body, path/query parameters), runs the business logic, and returns a
//! JSON response or an `AppError`.

/// Account management endpoints
pub mod accounts;
/// Client event intake from the clients service
pub mod client_events;
/// Health check endpoint
pub mod health;
/// Movement endpoints
pub mod movements;
/// Movement report endpoint
pub mod reports;
