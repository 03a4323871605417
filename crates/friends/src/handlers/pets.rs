//! Pet endpoints.

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};

use crate::{
    database::Database,
    errors::AppError,
    handlers::params::{ItemQuery, ReadQuery},
    models::{Pet, PetCuDto, UserSession},
};

/// List pets, flat or with the owning friend resolved.
#[utoipa::path(
    get,
    path = "/api/pets/read",
    tag = "pets",
    params(ReadQuery),
    responses(
        (status = 200, description = "List of pets", body = Vec<Pet>),
        (status = 400, description = "Malformed query parameter", body = String)
    )
)]
pub async fn read_pets(
    Extension(db): Extension<Database>,
    Query(query): Query<ReadQuery>,
) -> Result<Json<Vec<Pet>>, AppError> {
    let args = query.parse()?;
    let usr = UserSession::default();
    let pets = db.read_pets(&usr, &args).await?;
    Ok(Json(pets))
}

/// Read a single pet by id.
#[utoipa::path(
    get,
    path = "/api/pets/readitem",
    tag = "pets",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No pet with that id", body = String)
    )
)]
pub async fn read_pet(Query(_query): Query<ItemQuery>) -> Result<Json<Pet>, AppError> {
    Err(AppError::NotImplemented)
}

/// Delete a pet by id.
#[utoipa::path(
    delete,
    path = "/api/pets/deleteitem/{id}",
    tag = "pets",
    params(("id" = String, Path, description = "Pet id")),
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn delete_pet(Path(_id): Path<String>) -> Result<Json<Pet>, AppError> {
    Err(AppError::NotImplemented)
}

/// Read a pet as a create/update DTO.
#[utoipa::path(
    get,
    path = "/api/pets/readitemdto",
    tag = "pets",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No pet with that id", body = String)
    )
)]
pub async fn read_pet_dto(
    Query(_query): Query<ItemQuery>,
) -> Result<Json<PetCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Update a pet from a create/update DTO.
#[utoipa::path(
    put,
    path = "/api/pets/updateitem/{id}",
    tag = "pets",
    params(("id" = String, Path, description = "Pet id")),
    request_body = PetCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn update_pet(
    Path(_id): Path<String>,
    Json(_item): Json<PetCuDto>,
) -> Result<Json<PetCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Create a pet from a create/update DTO.
#[utoipa::path(
    post,
    path = "/api/pets/createitem",
    tag = "pets",
    request_body = PetCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn create_pet(Json(_item): Json<PetCuDto>) -> Result<Json<PetCuDto>, AppError> {
    Err(AppError::NotImplemented)
}
