use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use models::geo::validate_coordinates;
use service::address::{Address, AddressInput};
use service::errors::ServiceError;
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindDistanceQuery {
    /// Reference latitude in degrees, -90..=90
    pub latitude: f64,
    /// Reference longitude in degrees, -180..=180
    pub longitude: f64,
    /// Radius in kilometers; entries strictly closer than this are returned
    pub distance_radius: f64,
}

/// Keys are `i32`; any other integer names an entry that cannot exist.
fn stored_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[utoipa::path(
    post, path = "/address", tag = "address",
    request_body = crate::openapi::AddressInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AddressDoc),
        (status = 400, description = "Invalid coordinates", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<AddressInput>,
) -> Result<(StatusCode, Json<Address>), JsonApiError> {
    let created = state.addresses.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/address", tag = "address",
    responses((status = 200, description = "All entries", body = [crate::openapi::AddressDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Address>>, JsonApiError> {
    let all = state.addresses.list().await?;
    info!(count = all.len(), "list addresses");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/address/{id}", tag = "address",
    params(("id" = i64, Path, description = "Address ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AddressDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Address>, JsonApiError> {
    let key = stored_id(id).ok_or_else(|| ServiceError::not_found(id))?;
    Ok(Json(state.addresses.get(key).await?))
}

#[utoipa::path(
    put, path = "/address/{id}", tag = "address",
    params(("id" = i64, Path, description = "Address ID")),
    request_body = crate::openapi::AddressInputDoc,
    responses(
        (status = 200, description = "Updated; state is left unchanged", body = crate::openapi::AddressDoc),
        (status = 400, description = "Invalid coordinates", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<AddressInput>,
) -> Result<Json<Address>, JsonApiError> {
    let Some(key) = stored_id(id) else {
        validate_coordinates(input.latitude, input.longitude).map_err(ServiceError::from)?;
        return Err(ServiceError::not_found(id).into());
    };
    Ok(Json(state.addresses.update(key, input).await?))
}

#[utoipa::path(
    delete, path = "/address/{id}", tag = "address",
    params(("id" = i64, Path, description = "Address ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    let key = stored_id(id).ok_or_else(|| ServiceError::no_record(id))?;
    state.addresses.delete(key).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/find_distance", tag = "address",
    params(FindDistanceQuery),
    responses(
        (status = 200, description = "Entries within the radius", body = [crate::openapi::AddressDoc]),
        (status = 400, description = "Reference point out of range", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn find_distance(
    State(state): State<ServerState>,
    Query(q): Query<FindDistanceQuery>,
) -> Result<Json<Vec<Address>>, JsonApiError> {
    let found = state
        .addresses
        .find_within_radius(q.latitude, q.longitude, q.distance_radius)
        .await?;
    Ok(Json(found))
}
