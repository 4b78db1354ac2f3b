use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::dto::vehicle_registration_dto::{
    TransferOwnerRequest, VehicleActionResponse, VehicleListParams,
    VehicleRegistrationDetailsResponse, VehicleRegistrationPageResponse, VehicleRegistrationRequest,
};
use crate::services::vehicle_registration_service::VehicleRegistrationService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::messages;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_vehicle))
        .route("/", get(list_vehicles))
        .route("/:vehicle_id", get(get_vehicle))
        .route("/:vehicle_id", delete(delete_vehicle))
        .route("/:vehicle_id/transfer-owner", post(transfer_owner))
}

// Un body ausente o ilegible se reporta con el mismo mensaje en los
// dos endpoints que reciben JSON
fn require_body<T>(payload: Option<Json<T>>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .ok_or_else(|| AppError::Validation(messages::REQUEST_BODY_CANNOT_BE_NULL.to_string()))
}

async fn register_vehicle(
    State(state): State<AppState>,
    payload: Option<Json<VehicleRegistrationRequest>>,
) -> Result<Json<VehicleActionResponse>, AppError> {
    let request = require_body(payload)?;
    let service = VehicleRegistrationService::new(state.pool.clone());
    let vehicle = service.register(request).await?;
    Ok(Json(VehicleActionResponse {
        message: messages::VEHICLE_REGISTERED_SUCCESSFULLY.to_string(),
        vehicle_id: vehicle.id,
    }))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Json<VehicleRegistrationDetailsResponse>, AppError> {
    let service = VehicleRegistrationService::new(state.pool.clone());
    let details = service.find_by_id(vehicle_id).await?;
    Ok(Json(details))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleListParams>,
) -> Result<Json<VehicleRegistrationPageResponse>, AppError> {
    let service = VehicleRegistrationService::new(state.pool.clone());
    let page = service
        .find_all(params.page, params.size, &params.sort_by, &params.sort_direction)
        .await?;
    Ok(Json(page))
}

async fn transfer_owner(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
    payload: Option<Json<TransferOwnerRequest>>,
) -> Result<Json<VehicleActionResponse>, AppError> {
    let request = require_body(payload)?;
    let service = VehicleRegistrationService::new(state.pool.clone());
    let vehicle = service.transfer_owner(vehicle_id, request).await?;
    Ok(Json(VehicleActionResponse {
        message: messages::VEHICLE_OWNER_TRANSFERRED.to_string(),
        vehicle_id: vehicle.id,
    }))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Json<VehicleActionResponse>, AppError> {
    let service = VehicleRegistrationService::new(state.pool.clone());
    let vehicle = service.delete(vehicle_id).await?;
    Ok(Json(VehicleActionResponse {
        message: messages::VEHICLE_DELETED.to_string(),
        vehicle_id: vehicle.id,
    }))
}
