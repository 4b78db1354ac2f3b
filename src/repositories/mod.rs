//! Capa de persistencia
//!
//! Acceso a PostgreSQL via SQLx.

pub mod vehicle_registration_repository;

pub use vehicle_registration_repository::*;
