pub mod config;
pub mod domain;
pub mod errors;
pub mod fleet;
pub mod handlers;
pub mod metrics;
pub mod repo;
pub mod routes;
pub mod services;
pub mod validation;
