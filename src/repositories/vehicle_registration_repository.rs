//! Persistencia de registros de vehículos
//!
//! Todas las lecturas filtran por `is_deleted = FALSE`: un registro
//! eliminado sigue en la tabla pero deja de ser visible para el API.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::{NewOwner, NewVehicleRegistration, VehicleOwnershipHistory, VehicleRegistration};
use crate::utils::errors::AppResult;

const SELECT_ACTIVE: &str = "SELECT * FROM vehicle_registration WHERE is_deleted = FALSE";

/// Mapea el nombre de campo del wire a la columna por la que se ordena.
/// Cualquier valor fuera de esta lista se rechaza antes de armar el SQL.
pub fn sort_column(sort_by: &str) -> Option<&'static str> {
    match sort_by {
        "id" => Some("id"),
        "plateNo" => Some("plate_no"),
        "make" => Some("make"),
        "model" => Some("model"),
        "year" => Some("vehicle_year"),
        "ownerName" => Some("owner_name"),
        "ownerSurname" => Some("owner_surname"),
        "ownerCode" => Some("owner_code"),
        _ => None,
    }
}

/// Dirección de ordenamiento, insensible a mayúsculas como en el API original
pub fn sort_direction(direction: &str) -> Option<&'static str> {
    match direction.to_ascii_uppercase().as_str() {
        "ASC" => Some("ASC"),
        "DESC" => Some("DESC"),
        _ => None,
    }
}

pub struct VehicleRegistrationRepository {
    pool: PgPool,
}

impl VehicleRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: &NewVehicleRegistration) -> AppResult<VehicleRegistration> {
        let vehicle = sqlx::query_as::<_, VehicleRegistration>(
            r#"
            INSERT INTO vehicle_registration
                (plate_no, make, model, vehicle_year, owner_name, owner_surname, owner_legal_name, owner_code, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE)
            RETURNING *
            "#,
        )
        .bind(&new.plate_no)
        .bind(&new.make)
        .bind(&new.model)
        .bind(new.year)
        .bind(&new.owner_name)
        .bind(&new.owner_surname)
        .bind(&new.owner_legal_name)
        .bind(&new.owner_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id_not_deleted(&self, id: i64) -> AppResult<Option<VehicleRegistration>> {
        let vehicle = sqlx::query_as::<_, VehicleRegistration>(&format!("{SELECT_ACTIVE} AND id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_plate_no_not_deleted(&self, plate_no: &str) -> AppResult<Option<VehicleRegistration>> {
        let vehicle = sqlx::query_as::<_, VehicleRegistration>(&format!(
            "{SELECT_ACTIVE} AND LOWER(plate_no) = LOWER($1)"
        ))
        .bind(plate_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn count_not_deleted(&self) -> AppResult<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicle_registration WHERE is_deleted = FALSE")
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    /// Página de registros activos. `column` y `direction` ya vienen
    /// validados contra la whitelist de este módulo.
    pub async fn find_all_not_deleted(
        &self,
        column: &'static str,
        direction: &'static str,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<VehicleRegistration>> {
        let query = format!("{SELECT_ACTIVE} ORDER BY {column} {direction} LIMIT $1 OFFSET $2");

        let vehicles = sqlx::query_as::<_, VehicleRegistration>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Transferencia de propiedad: snapshot del propietario actual al
    /// historial y sobreescritura de los campos del registro, ambas
    /// escrituras dentro de la misma transacción. Si algo falla a mitad
    /// de camino el drop de la transacción revierte todo.
    pub async fn transfer_owner(
        &self,
        vehicle: &VehicleRegistration,
        new_owner: &NewOwner,
    ) -> AppResult<VehicleRegistration> {
        let mut tx = self.pool.begin().await?;

        let history = sqlx::query_as::<_, VehicleOwnershipHistory>(
            r#"
            INSERT INTO vehicle_ownership_history
                (vehicle_registration_id, owner_name, owner_surname, owner_legal_name, owner_code, transfer_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.owner_name)
        .bind(&vehicle.owner_surname)
        .bind(&vehicle.owner_legal_name)
        .bind(&vehicle.owner_code)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let updated = sqlx::query_as::<_, VehicleRegistration>(
            r#"
            UPDATE vehicle_registration
            SET owner_name = $2, owner_surname = $3, owner_legal_name = $4, owner_code = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(&new_owner.name)
        .bind(&new_owner.surname)
        .bind(&new_owner.legal_name)
        .bind(&new_owner.code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "historial {} registrado para el vehículo {}",
            history.id,
            vehicle.id
        );

        Ok(updated)
    }

    /// Soft delete: marca el registro y lo devuelve con todos sus datos
    pub async fn mark_deleted(&self, id: i64) -> AppResult<VehicleRegistration> {
        let vehicle = sqlx::query_as::<_, VehicleRegistration>(
            "UPDATE vehicle_registration SET is_deleted = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
