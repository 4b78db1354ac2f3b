//! DTOs de registro de vehículos
//!
//! Los nombres en el wire van en camelCase para mantener compatibilidad
//! con los clientes existentes del registro.

use serde::{Deserialize, Serialize};

use crate::models::VehicleRegistration;

// Request para registrar un vehículo. Todos los campos son opcionales
// a nivel de deserialización, la validación por campo vive en el servicio.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRegistrationRequest {
    pub plate_no: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub owner_name: Option<String>,
    pub owner_surname: Option<String>,
    pub owner_legal_name: Option<String>,
    pub owner_code: Option<String>,
}

// Request para transferir la propiedad a un propietario nuevo
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOwnerRequest {
    pub new_owner_name: Option<String>,
    pub new_owner_surname: Option<String>,
    pub new_owner_legal_name: Option<String>,
    pub new_owner_code: Option<String>,
}

/// Respuesta de acciones (registrar, transferir, eliminar)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleActionResponse {
    pub message: String,
    pub vehicle_id: i64,
}

/// Detalle de un registro
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRegistrationDetailsResponse {
    pub vehicle_id: i64,
    pub plate_no: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
    pub owner_surname: String,
    pub owner_legal_name: Option<String>,
    pub owner_code: String,
}

/// Página de registros con los totales reales
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRegistrationPageResponse {
    pub content: Vec<VehicleRegistrationDetailsResponse>,
    pub current_page: i32,
    pub page_size: i32,
    pub total_pages: i64,
    pub total_elements: i64,
}

/// Parámetros de listado con los defaults del API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListParams {
    #[serde(default)]
    pub page: i32,
    #[serde(default = "default_page_size")]
    pub size: i32,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,
}

fn default_page_size() -> i32 {
    10
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_direction() -> String {
    "ASC".to_string()
}

impl From<VehicleRegistration> for VehicleRegistrationDetailsResponse {
    fn from(vehicle: VehicleRegistration) -> Self {
        Self {
            vehicle_id: vehicle.id,
            plate_no: vehicle.plate_no,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            owner_name: vehicle.owner_name,
            owner_surname: vehicle.owner_surname,
            owner_legal_name: vehicle.owner_legal_name,
            owner_code: vehicle.owner_code,
        }
    }
}
