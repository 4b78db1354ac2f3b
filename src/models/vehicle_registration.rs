//! Modelo de registro de vehículo
//!
//! Este módulo contiene el struct VehicleRegistration y las variantes
//! de escritura usadas por el servicio. Mapea exactamente al schema
//! PostgreSQL con primary key 'id'.

use serde::Serialize;
use sqlx::FromRow;

/// Registro principal - mapea a la tabla vehicle_registration
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleRegistration {
    pub id: i64,
    pub plate_no: String,
    pub make: String,
    pub model: String,
    #[sqlx(rename = "vehicle_year")]
    pub year: i32,
    pub owner_name: String,
    pub owner_surname: String,
    pub owner_legal_name: Option<String>,
    pub owner_code: String,
    pub is_deleted: bool,
}

/// Datos validados para insertar un registro nuevo
#[derive(Debug, Clone)]
pub struct NewVehicleRegistration {
    pub plate_no: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
    pub owner_surname: String,
    pub owner_legal_name: Option<String>,
    pub owner_code: String,
}

/// Propietario nuevo validado para una transferencia
#[derive(Debug, Clone)]
pub struct NewOwner {
    pub name: String,
    pub surname: String,
    pub legal_name: Option<String>,
    pub code: String,
}
