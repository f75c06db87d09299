//! Banking services: account/movement management and client registration.
//!
//! This crate builds two cooperating HTTP microservices from one codebase:
//!
//! - **accounts-server** — CRUD for bank accounts and their movements
//!   (deposits and withdrawals), plus a movement report that joins
//!   movements with accounts and clients.
//! - **clients-server** — client registration, update and deletion, with a
//!   signed `client.created` / `client.deleted` event published over HTTP.
//!
//! The accounts service keeps a local replica of registered clients,
//! maintained by consuming the events the clients service publishes.
//!
//! # Stack
//!
//! - **Web framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries, one database per service)
//! - **Events**: HMAC-SHA256 signed JSON over HTTP, fire-and-forget
//! - **Format**: JSON requests/responses

pub mod accounts;
pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod signing;
