//! Friend endpoints.

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};

use crate::{
    database::Database,
    errors::AppError,
    handlers::params::{ItemQuery, ReadQuery},
    models::{Friend, FriendCuDto, UserSession},
};

/// List friends, flat or with address, pets and quotes resolved.
#[utoipa::path(
    get,
    path = "/api/friends/read",
    tag = "friends",
    params(ReadQuery),
    responses(
        (status = 200, description = "List of friends", body = Vec<Friend>),
        (status = 400, description = "Malformed query parameter", body = String)
    )
)]
pub async fn read_friends(
    Extension(db): Extension<Database>,
    Query(query): Query<ReadQuery>,
) -> Result<Json<Vec<Friend>>, AppError> {
    let args = query.parse()?;
    let usr = UserSession::default();
    let friends = db.read_friends(&usr, &args).await?;
    Ok(Json(friends))
}

/// Read a single friend by id.
#[utoipa::path(
    get,
    path = "/api/friends/readitem",
    tag = "friends",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No friend with that id", body = String)
    )
)]
pub async fn read_friend(
    Query(_query): Query<ItemQuery>,
) -> Result<Json<Friend>, AppError> {
    Err(AppError::NotImplemented)
}

/// Delete a friend by id.
#[utoipa::path(
    delete,
    path = "/api/friends/deleteitem/{id}",
    tag = "friends",
    params(("id" = String, Path, description = "Friend id")),
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn delete_friend(Path(_id): Path<String>) -> Result<Json<Friend>, AppError> {
    Err(AppError::NotImplemented)
}

/// Read a friend as a create/update DTO.
#[utoipa::path(
    get,
    path = "/api/friends/readitemdto",
    tag = "friends",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No friend with that id", body = String)
    )
)]
pub async fn read_friend_dto(
    Query(_query): Query<ItemQuery>,
) -> Result<Json<FriendCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Update a friend from a create/update DTO.
#[utoipa::path(
    put,
    path = "/api/friends/updateitem/{id}",
    tag = "friends",
    params(("id" = String, Path, description = "Friend id")),
    request_body = FriendCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn update_friend(
    Path(_id): Path<String>,
    Json(_item): Json<FriendCuDto>,
) -> Result<Json<FriendCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Create a friend from a create/update DTO.
#[utoipa::path(
    post,
    path = "/api/friends/createitem",
    tag = "friends",
    request_body = FriendCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn create_friend(
    Json(_item): Json<FriendCuDto>,
) -> Result<Json<FriendCuDto>, AppError> {
    Err(AppError::NotImplemented)
}
