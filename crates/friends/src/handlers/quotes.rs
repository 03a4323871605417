//! Quote endpoints.

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};

use crate::{
    database::Database,
    errors::AppError,
    handlers::params::{ItemQuery, ReadQuery},
    models::{Quote, QuoteCuDto, UserSession},
};

/// List quotes, flat or with the friends holding them as favourites.
#[utoipa::path(
    get,
    path = "/api/quotes/read",
    tag = "quotes",
    params(ReadQuery),
    responses(
        (status = 200, description = "List of quotes", body = Vec<Quote>),
        (status = 400, description = "Malformed query parameter", body = String)
    )
)]
pub async fn read_quotes(
    Extension(db): Extension<Database>,
    Query(query): Query<ReadQuery>,
) -> Result<Json<Vec<Quote>>, AppError> {
    let args = query.parse()?;
    let usr = UserSession::default();
    let quotes = db.read_quotes(&usr, &args).await?;
    Ok(Json(quotes))
}

/// Read a single quote by id.
#[utoipa::path(
    get,
    path = "/api/quotes/readitem",
    tag = "quotes",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No quote with that id", body = String)
    )
)]
pub async fn read_quote(Query(_query): Query<ItemQuery>) -> Result<Json<Quote>, AppError> {
    Err(AppError::NotImplemented)
}

/// Delete a quote by id.
#[utoipa::path(
    delete,
    path = "/api/quotes/deleteitem/{id}",
    tag = "quotes",
    params(("id" = String, Path, description = "Quote id")),
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn delete_quote(Path(_id): Path<String>) -> Result<Json<Quote>, AppError> {
    Err(AppError::NotImplemented)
}

/// Read a quote as a create/update DTO.
#[utoipa::path(
    get,
    path = "/api/quotes/readitemdto",
    tag = "quotes",
    params(ItemQuery),
    responses(
        (status = 400, description = "Not implemented", body = String),
        (status = 404, description = "No quote with that id", body = String)
    )
)]
pub async fn read_quote_dto(
    Query(_query): Query<ItemQuery>,
) -> Result<Json<QuoteCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Update a quote from a create/update DTO.
#[utoipa::path(
    put,
    path = "/api/quotes/updateitem/{id}",
    tag = "quotes",
    params(("id" = String, Path, description = "Quote id")),
    request_body = QuoteCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn update_quote(
    Path(_id): Path<String>,
    Json(_item): Json<QuoteCuDto>,
) -> Result<Json<QuoteCuDto>, AppError> {
    Err(AppError::NotImplemented)
}

/// Create a quote from a create/update DTO.
#[utoipa::path(
    post,
    path = "/api/quotes/createitem",
    tag = "quotes",
    request_body = QuoteCuDto,
    responses(
        (status = 400, description = "Not implemented", body = String)
    )
)]
pub async fn create_quote(
    Json(_item): Json<QuoteCuDto>,
) -> Result<Json<QuoteCuDto>, AppError> {
    Err(AppError::NotImplemented)
}
