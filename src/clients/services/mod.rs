//! Business logic services for the clients server.

pub mod event_publisher;
pub mod registration_service;
