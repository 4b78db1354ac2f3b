//! Servicio de registro de vehículos
//!
//! Toda la lógica del API vive acá: validación por campo, chequeo de
//! matrícula duplicada, orquestación de la transferencia de propiedad
//! y el soft delete. Los errores se levantan en el punto de detección
//! y la capa HTTP los traduce a status codes.

use sqlx::PgPool;
use tracing::info;

use crate::dto::vehicle_registration_dto::{
    TransferOwnerRequest, VehicleRegistrationDetailsResponse, VehicleRegistrationPageResponse,
    VehicleRegistrationRequest,
};
use crate::models::{NewOwner, NewVehicleRegistration, VehicleRegistration};
use crate::repositories::vehicle_registration_repository::{
    sort_column, sort_direction, VehicleRegistrationRepository,
};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::messages;

pub struct VehicleRegistrationService {
    repository: VehicleRegistrationRepository,
}

impl VehicleRegistrationService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRegistrationRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: VehicleRegistrationRequest,
    ) -> AppResult<VehicleRegistration> {
        let candidate = validate_registration(request)?;

        // La unicidad de matrícula ignora mayúsculas y solo cuenta
        // registros activos
        if self
            .repository
            .find_by_plate_no_not_deleted(&candidate.plate_no)
            .await?
            .is_some()
        {
            return Err(AppError::PlateNoAlreadyExists);
        }

        let vehicle = self.repository.insert(&candidate).await?;
        info!("🚗 Vehículo {} registrado con matrícula {}", vehicle.id, vehicle.plate_no);
        Ok(vehicle)
    }

    pub async fn find_by_id(&self, vehicle_id: i64) -> AppResult<VehicleRegistrationDetailsResponse> {
        let vehicle = self
            .repository
            .find_by_id_not_deleted(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::vehicle_not_found(vehicle_id)))?;

        Ok(vehicle.into())
    }

    pub async fn find_all(
        &self,
        page: i32,
        size: i32,
        sort_by: &str,
        direction: &str,
    ) -> AppResult<VehicleRegistrationPageResponse> {
        if page < 0 {
            return Err(AppError::BadRequest(messages::INVALID_PAGE_INDEX.to_string()));
        }
        if size < 1 {
            return Err(AppError::BadRequest(messages::INVALID_PAGE_SIZE.to_string()));
        }
        let column = sort_column(sort_by)
            .ok_or_else(|| AppError::BadRequest(messages::INVALID_SORT_FIELD.to_string()))?;
        let order = sort_direction(direction)
            .ok_or_else(|| AppError::BadRequest(messages::INVALID_SORT_DIRECTION.to_string()))?;

        let total_elements = self.repository.count_not_deleted().await?;
        let limit = size as i64;
        let offset = page as i64 * size as i64;

        // Una página fuera de rango devuelve contenido vacío con los
        // totales reales, no es un error
        let vehicles = self
            .repository
            .find_all_not_deleted(column, order, limit, offset)
            .await?;

        Ok(VehicleRegistrationPageResponse {
            content: vehicles.into_iter().map(Into::into).collect(),
            current_page: page,
            page_size: size,
            total_pages: total_pages(total_elements, size),
            total_elements,
        })
    }

    pub async fn transfer_owner(
        &self,
        vehicle_id: i64,
        request: TransferOwnerRequest,
    ) -> AppResult<VehicleRegistration> {
        // El propietario nuevo se valida antes de tocar la base
        let new_owner = validate_new_owner(request)?;

        let vehicle = self
            .repository
            .find_by_id_not_deleted(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::vehicle_not_found(vehicle_id)))?;

        // Chequeo defensivo: el registro no puede transferirse sin un
        // propietario actual completo
        if current_owner_missing(&vehicle) {
            return Err(AppError::CurrentOwnerNotFound);
        }

        let updated = self.repository.transfer_owner(&vehicle, &new_owner).await?;
        info!(
            "🔑 Propiedad del vehículo {} transferida a {} {}",
            updated.id, updated.owner_name, updated.owner_surname
        );
        Ok(updated)
    }

    pub async fn delete(&self, vehicle_id: i64) -> AppResult<VehicleRegistration> {
        let vehicle = self
            .repository
            .find_by_id_not_deleted(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::vehicle_not_found(vehicle_id)))?;

        let deleted = self.repository.mark_deleted(vehicle.id).await?;
        info!("🗑️ Vehículo {} marcado como eliminado", deleted.id);
        Ok(deleted)
    }
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// Valida los campos obligatorios en el orden documentado del API.
/// El nombre legal es siempre opcional.
fn validate_registration(request: VehicleRegistrationRequest) -> AppResult<NewVehicleRegistration> {
    let plate_no = required(request.plate_no, messages::PLATE_NO_IS_REQUIRED)?;
    let make = required(request.make, messages::MAKE_IS_REQUIRED)?;
    let model = required(request.model, messages::MODEL_IS_REQUIRED)?;
    let year = request
        .year
        .ok_or_else(|| AppError::Validation(messages::YEAR_IS_REQUIRED.to_string()))?;
    let owner_name = required(request.owner_name, messages::OWNER_NAME_IS_REQUIRED)?;
    let owner_surname = required(request.owner_surname, messages::OWNER_SURNAME_IS_REQUIRED)?;
    let owner_code = required(request.owner_code, messages::OWNER_CODE_IS_REQUIRED)?;

    Ok(NewVehicleRegistration {
        plate_no,
        make,
        model,
        year,
        owner_name,
        owner_surname,
        owner_legal_name: request.owner_legal_name,
        owner_code,
    })
}

fn validate_new_owner(request: TransferOwnerRequest) -> AppResult<NewOwner> {
    let name = required(request.new_owner_name, messages::OWNER_NAME_IS_REQUIRED)?;
    let surname = required(request.new_owner_surname, messages::OWNER_SURNAME_IS_REQUIRED)?;
    let code = required(request.new_owner_code, messages::OWNER_CODE_IS_REQUIRED)?;

    Ok(NewOwner {
        name,
        surname,
        legal_name: request.new_owner_legal_name,
        code,
    })
}

fn current_owner_missing(vehicle: &VehicleRegistration) -> bool {
    vehicle.owner_name.is_empty()
        || vehicle.owner_surname.is_empty()
        || vehicle.owner_code.is_empty()
}

fn total_pages(total_elements: i64, size: i32) -> i64 {
    (total_elements + size as i64 - 1) / size as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural_person_request() -> VehicleRegistrationRequest {
        VehicleRegistrationRequest {
            plate_no: Some("ABC123".to_string()),
            make: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(2020),
            owner_name: Some("Jonas".to_string()),
            owner_surname: Some("Petrauskas".to_string()),
            owner_legal_name: None,
            owner_code: Some("39601010000".to_string()),
        }
    }

    fn legal_entity_request() -> VehicleRegistrationRequest {
        VehicleRegistrationRequest {
            plate_no: Some("BCD456".to_string()),
            owner_legal_name: Some("UAB ABC".to_string()),
            owner_code: Some("123456789".to_string()),
            ..natural_person_request()
        }
    }

    fn transfer_request() -> TransferOwnerRequest {
        TransferOwnerRequest {
            new_owner_name: Some("Petras".to_string()),
            new_owner_surname: Some("Petraitis".to_string()),
            new_owner_legal_name: Some("UAB Petras".to_string()),
            new_owner_code: Some("39601010000".to_string()),
        }
    }

    fn natural_person_vehicle() -> VehicleRegistration {
        VehicleRegistration {
            id: 1,
            plate_no: "ABC123".to_string(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            owner_name: "Jonas".to_string(),
            owner_surname: "Petrauskas".to_string(),
            owner_legal_name: None,
            owner_code: "39601010000".to_string(),
            is_deleted: false,
        }
    }

    fn assert_validation_message<T: std::fmt::Debug>(result: AppResult<T>, expected: &str) {
        match result {
            Err(AppError::Validation(message)) => assert_eq!(message, expected),
            other => panic!("se esperaba error de validación, se obtuvo {:?}", other),
        }
    }

    #[test]
    fn test_register_natural_person_passes_validation() {
        let candidate = validate_registration(natural_person_request()).unwrap();
        assert_eq!(candidate.plate_no, "ABC123");
        assert_eq!(candidate.make, "Toyota");
        assert_eq!(candidate.model, "Corolla");
        assert_eq!(candidate.year, 2020);
        assert_eq!(candidate.owner_name, "Jonas");
        assert_eq!(candidate.owner_surname, "Petrauskas");
        assert!(candidate.owner_legal_name.is_none());
        assert_eq!(candidate.owner_code, "39601010000");
    }

    #[test]
    fn test_register_legal_entity_keeps_legal_name() {
        let candidate = validate_registration(legal_entity_request()).unwrap();
        assert_eq!(candidate.plate_no, "BCD456");
        assert_eq!(candidate.owner_legal_name.as_deref(), Some("UAB ABC"));
        assert_eq!(candidate.owner_code, "123456789");
    }

    #[test]
    fn test_register_with_missing_plate_no() {
        let mut request = natural_person_request();
        request.plate_no = None;
        assert_validation_message(validate_registration(request), messages::PLATE_NO_IS_REQUIRED);

        let mut request = natural_person_request();
        request.plate_no = Some(String::new());
        assert_validation_message(validate_registration(request), messages::PLATE_NO_IS_REQUIRED);
    }

    #[test]
    fn test_register_with_missing_make() {
        let mut request = natural_person_request();
        request.make = None;
        assert_validation_message(validate_registration(request), messages::MAKE_IS_REQUIRED);
    }

    #[test]
    fn test_register_with_missing_model() {
        let mut request = natural_person_request();
        request.model = Some(String::new());
        assert_validation_message(validate_registration(request), messages::MODEL_IS_REQUIRED);
    }

    #[test]
    fn test_register_with_missing_year() {
        let mut request = natural_person_request();
        request.year = None;
        assert_validation_message(validate_registration(request), messages::YEAR_IS_REQUIRED);
    }

    #[test]
    fn test_register_with_missing_owner_name() {
        let mut request = natural_person_request();
        request.owner_name = None;
        assert_validation_message(validate_registration(request), messages::OWNER_NAME_IS_REQUIRED);
    }

    #[test]
    fn test_register_with_missing_owner_surname() {
        let mut request = natural_person_request();
        request.owner_surname = Some(String::new());
        assert_validation_message(
            validate_registration(request),
            messages::OWNER_SURNAME_IS_REQUIRED,
        );
    }

    #[test]
    fn test_register_with_missing_owner_code() {
        let mut request = natural_person_request();
        request.owner_code = None;
        assert_validation_message(validate_registration(request), messages::OWNER_CODE_IS_REQUIRED);
    }

    #[test]
    fn test_register_validates_fields_in_order() {
        // con todos los campos vacíos el primer error es el de matrícula
        let request = VehicleRegistrationRequest {
            plate_no: None,
            make: None,
            model: None,
            year: None,
            owner_name: None,
            owner_surname: None,
            owner_legal_name: None,
            owner_code: None,
        };
        assert_validation_message(validate_registration(request), messages::PLATE_NO_IS_REQUIRED);
    }

    #[test]
    fn test_transfer_request_passes_validation() {
        let new_owner = validate_new_owner(transfer_request()).unwrap();
        assert_eq!(new_owner.name, "Petras");
        assert_eq!(new_owner.surname, "Petraitis");
        assert_eq!(new_owner.legal_name.as_deref(), Some("UAB Petras"));
        assert_eq!(new_owner.code, "39601010000");
    }

    #[test]
    fn test_transfer_without_legal_name_is_valid() {
        let mut request = transfer_request();
        request.new_owner_legal_name = None;
        let new_owner = validate_new_owner(request).unwrap();
        assert!(new_owner.legal_name.is_none());
    }

    #[test]
    fn test_transfer_with_missing_new_owner_fields() {
        let mut request = transfer_request();
        request.new_owner_name = None;
        assert_validation_message(validate_new_owner(request), messages::OWNER_NAME_IS_REQUIRED);

        let mut request = transfer_request();
        request.new_owner_surname = Some(String::new());
        assert_validation_message(validate_new_owner(request), messages::OWNER_SURNAME_IS_REQUIRED);

        let mut request = transfer_request();
        request.new_owner_code = None;
        assert_validation_message(validate_new_owner(request), messages::OWNER_CODE_IS_REQUIRED);
    }

    #[test]
    fn test_current_owner_check() {
        assert!(!current_owner_missing(&natural_person_vehicle()));

        let mut vehicle = natural_person_vehicle();
        vehicle.owner_name = String::new();
        assert!(current_owner_missing(&vehicle));

        let mut vehicle = natural_person_vehicle();
        vehicle.owner_code = String::new();
        assert!(current_owner_missing(&vehicle));
    }

    #[test]
    fn test_total_pages_math() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }
}
