//! Modelos de datos del sistema
//!
//! Structs que mapean a las tablas PostgreSQL.

pub mod ownership_history;
pub mod vehicle_registration;

pub use ownership_history::*;
pub use vehicle_registration::*;
