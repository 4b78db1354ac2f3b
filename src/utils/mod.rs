//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y los mensajes
//! de respuesta de la API.

pub mod errors;
pub mod messages;
