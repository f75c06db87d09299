//! Business logic services for the accounts server.
//!
//! Services contain the multi-step operations separated from the HTTP
//! handlers: balance updates inside database transactions and the
//! movement report join.

pub mod movement_service;
pub mod report_service;
