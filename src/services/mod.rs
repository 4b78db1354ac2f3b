//! Servicios de negocio
//!
//! La validación y orquestación del API de registro.

pub mod vehicle_registration_service;

pub use vehicle_registration_service::*;
