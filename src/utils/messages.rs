//! Mensajes de respuesta de la API
//!
//! Los textos visibles al cliente están en lituano, el idioma del
//! registro de transporte al que sirve esta API.

pub const VEHICLE_REGISTERED_SUCCESSFULLY: &str = "Transporto priemonė sėkmingai užregistruota";
pub const PLATE_NO_ALREADY_EXISTS: &str = "Transporto priemonė su šiais numeriais jau egzistuoja";
pub const REQUEST_BODY_CANNOT_BE_NULL: &str = "Užklausa negali būti tuščia";
pub const PLATE_NO_IS_REQUIRED: &str = "Valstybinis numeris yra privalomas";
pub const MAKE_IS_REQUIRED: &str = "Gamintojas yra privalomas";
pub const MODEL_IS_REQUIRED: &str = "Modelis yra privalomas";
pub const YEAR_IS_REQUIRED: &str = "Metai yra privalomi";
pub const OWNER_NAME_IS_REQUIRED: &str = "Vardas yra privalomas";
pub const OWNER_SURNAME_IS_REQUIRED: &str = "Pavardė yra privaloma";
pub const OWNER_CODE_IS_REQUIRED: &str = "Asmens kodas yra privalomas";
pub const CURRENT_OWNER_NOT_FOUND: &str = "Transporto priemonės esamas savininkas nerastas";
pub const VEHICLE_OWNER_TRANSFERRED: &str = "Transporto priemonės savininkystė sėkmingai perleista";
pub const VEHICLE_DELETED: &str = "Transporto priemonė sėkmingai pašalinta";
pub const INVALID_SORT_FIELD: &str = "Netinkamas rūšiavimo laukas";
pub const INVALID_SORT_DIRECTION: &str = "Netinkama rūšiavimo kryptis";
pub const INVALID_PAGE_INDEX: &str = "Puslapio numeris negali būti neigiamas";
pub const INVALID_PAGE_SIZE: &str = "Puslapio dydis turi būti teigiamas";

/// Mensaje de "no encontrado" parametrizado con el id solicitado
pub fn vehicle_not_found(vehicle_id: i64) -> String {
    format!("Transporto priemonė su id {} neegzistuoja", vehicle_id)
}
