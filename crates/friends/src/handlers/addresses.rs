//! Address endpoints.

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};

use crate::{
    database::Database,
    errors::AppError,
    handlers::params::{ItemQuery, ReadQuery},
    models::{Address, AddressCuDto, UserSession},
};

/// List addresses, flat or with their resident friends resolved.
#[utoipa::path(
    get,
    path = "/api/addresses/read",
    tag = "addresses",
    params(ReadQuery),
    responses(
        (status = 200, description = "List of addresses", body = Vec<Address>),
        (status = 400, description = "Malformed query parameter", body = String)
    )
)]
pub async fn read_addresses(
    Extension(db): Extension<Database>,
    Query(query): Query<ReadQuery>,
) -> Result<Json<Vec<Address>>, AppError> {
    let args = query.parse()?;
    let usr = UserSession::default();
    let addresses = db.read_addresses(&usr, &args).await?;
    Ok(Json(addresses))
}

/// Read a single address by id.
#[utoipa::path(
    get,
    path = "/api/addresses/readitem",
    tag = "addresses",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No address with that id", body = String)
    )
)]
pub async fn read_address(
    Query(_query): Query<ItemQuery>,
) -> Result<Json<Address>, AppError> {
    Err(AppError::NotImplemented)
}

/// Delete an address by id.
#[utoipa::path(
    delete,
    path = "/api/addresses/deleteitem/{id}",
    tag = "addresses",
    params(("id" = String, Path, description = "Address id")),
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn delete_address(Path(_id): Path<String>) -> Result<Json<Address>, AppError> {
    Err(AppError::NotImplemented)
}

/// Read an address as a create/update DTO.
#[utoipa::path(
    get,
    path = "/api/addresses/readitemdto",
    tag = "addresses",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No address with that id", body = String)
    )
)]
pub async fn read_address_dto(
    Query(_query): Query<ItemQuery>,
) -> Result<Json<AddressCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Update an address from a create/update DTO.
#[utoipa::path(
    put,
    path = "/api/addresses/updateitem/{id}",
    tag = "addresses",
    params(("id" = String, Path, description = "Address id")),
    request_body = AddressCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn update_address(
    Path(_id): Path<String>,
    Json(_item): Json<AddressCuDto>,
) -> Result<Json<AddressCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Create an address from a create/update DTO.
#[utoipa::path(
    post,
    path = "/api/addresses/createitem",
    tag = "addresses",
    request_body = AddressCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn create_address(
    Json(_item): Json<AddressCuDto>,
) -> Result<Json<AddressCuDto>, AppError> {
    Err(AppError::NotImplemented)
}
