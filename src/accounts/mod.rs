//! Accounts service: bank accounts, movements, reports, client replica.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use crate::{config::AccountsConfig, db::DbPool};

/// Shared state for the accounts server, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: AccountsConfig,
}
