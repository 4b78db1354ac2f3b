//! Modelo del historial de propietarios
//!
//! Cada fila es un snapshot del propietario anterior, tomado justo
//! antes de sobreescribir los campos del registro en una transferencia.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleOwnershipHistory {
    pub id: i64,
    pub vehicle_registration_id: i64,
    pub owner_name: String,
    pub owner_surname: String,
    pub owner_legal_name: Option<String>,
    pub owner_code: String,
    pub transfer_date: DateTime<Utc>,
}
