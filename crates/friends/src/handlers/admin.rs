//! Admin endpoints: info counters and seed/reset of generated sample data.
//!
//! These are expected to sit behind elevated privilege once a login service
//! exists; nothing is enforced yet.

use axum::{Extension, extract::Query, response::Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    database::Database,
    errors::AppError,
    handlers::params::{parse_bool, parse_int},
    models::{AdminInfo, Info, UserSession},
};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeedQuery {
    /// Number of friends to generate. Default "100".
    pub count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemoveSeedQuery {
    /// Which flag value to delete. Default "true".
    pub seeded: Option<String>,
}

/// Database-wide counters across seeded and unseeded rows.
#[utoipa::path(
    get,
    path = "/api/admin/info",
    tag = "admin",
    responses(
        (status = 200, description = "Current counters", body = Info)
    )
)]
pub async fn info(Extension(db): Extension<Database>) -> Result<Json<Info>, AppError> {
    let info = db.info().await?;
    Ok(Json(info))
}

/// Generate and insert randomized sample data.
#[utoipa::path(
    get,
    path = "/api/admin/seed",
    tag = "admin",
    params(SeedQuery),
    responses(
        (status = 200, description = "Counts of inserted rows", body = AdminInfo),
        (status = 400, description = "Malformed query parameter", body = String)
    )
)]
pub async fn seed(
    Extension(db): Extension<Database>,
    Query(query): Query<SeedQuery>,
) -> Result<Json<AdminInfo>, AppError> {
    let count = parse_int(query.count.as_deref().unwrap_or("100"), "count")?;
    let usr = UserSession::default();
    let admin_info = db.seed(&usr, count.max(0) as usize).await?;
    Ok(Json(admin_info))
}

/// Bulk-delete rows whose seeded flag matches.
#[utoipa::path(
    get,
    path = "/api/admin/removeseed",
    tag = "admin",
    params(RemoveSeedQuery),
    responses(
        (status = 200, description = "Counts of deleted rows", body = AdminInfo),
        (status = 400, description = "Malformed query parameter", body = String)
    )
)]
pub async fn remove_seed(
    Extension(db): Extension<Database>,
    Query(query): Query<RemoveSeedQuery>,
) -> Result<Json<AdminInfo>, AppError> {
    let seeded = parse_bool(query.seeded.as_deref().unwrap_or("true"), "seeded")?;
    let usr = UserSession::default();
    let admin_info = db.remove_seed(&usr, seeded).await?;
    Ok(Json(admin_info))
}
