//! Library exports for sentiboard, shared between the binary and tests.

pub mod config;
pub mod inference;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;
pub mod utils;
