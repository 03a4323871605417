pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post, put},
};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    database::Database,
    handlers::{
        create_address, create_friend, create_pet, create_quote, delete_address, delete_friend,
        delete_pet, delete_quote, health_check, info, read_address, read_address_dto,
        read_addresses, read_friend, read_friend_dto, read_friends, read_pet, read_pet_dto,
        read_pets, read_quote, read_quote_dto, read_quotes, remove_seed, seed, update_address,
        update_friend, update_pet, update_quote,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::admin::info,
        handlers::admin::seed,
        handlers::admin::remove_seed,
        handlers::friends::read_friends,
        handlers::friends::read_friend,
        handlers::friends::delete_friend,
        handlers::friends::read_friend_dto,
        handlers::friends::update_friend,
        handlers::friends::create_friend,
        handlers::addresses::read_addresses,
        handlers::addresses::read_address,
        handlers::addresses::delete_address,
        handlers::addresses::read_address_dto,
        handlers::addresses::update_address,
        handlers::addresses::create_address,
        handlers::quotes::read_quotes,
        handlers::quotes::read_quote,
        handlers::quotes::delete_quote,
        handlers::quotes::read_quote_dto,
        handlers::quotes::update_quote,
        handlers::quotes::create_quote,
        handlers::pets::read_pets,
        handlers::pets::read_pet,
        handlers::pets::delete_pet,
        handlers::pets::read_pet_dto,
        handlers::pets::update_pet,
        handlers::pets::create_pet,
    ),
    components(schemas(
        models::Friend,
        models::Address,
        models::Pet,
        models::Quote,
        models::AnimalKind,
        models::AnimalMood,
        models::FriendCuDto,
        models::AddressCuDto,
        models::PetCuDto,
        models::QuoteCuDto,
        models::UserSession,
        models::AdminInfo,
        models::DbInfo,
        models::Info,
    )),
    tags(
        (name = "friends", description = "Friend read and CRUD endpoints"),
        (name = "addresses", description = "Address read and CRUD endpoints"),
        (name = "quotes", description = "Quote read and CRUD endpoints"),
        (name = "pets", description = "Pet read and CRUD endpoints"),
        (name = "admin", description = "Seeding, reset and counters"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn create_router(pool: PgPool) -> Router {
    let db = Database::new(pool);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        // Admin routes
        .route("/api/admin/info", get(info))
        .route("/api/admin/seed", get(seed))
        .route("/api/admin/removeseed", get(remove_seed))
        // Friend routes
        .route("/api/friends/read", get(read_friends))
        .route("/api/friends/readitem", get(read_friend))
        .route("/api/friends/deleteitem/{id}", delete(delete_friend))
        .route("/api/friends/readitemdto", get(read_friend_dto))
        .route("/api/friends/updateitem/{id}", put(update_friend))
        .route("/api/friends/createitem", post(create_friend))
        // Address routes
        .route("/api/addresses/read", get(read_addresses))
        .route("/api/addresses/readitem", get(read_address))
        .route("/api/addresses/deleteitem/{id}", delete(delete_address))
        .route("/api/addresses/readitemdto", get(read_address_dto))
        .route("/api/addresses/updateitem/{id}", put(update_address))
        .route("/api/addresses/createitem", post(create_address))
        // Quote routes
        .route("/api/quotes/read", get(read_quotes))
        .route("/api/quotes/readitem", get(read_quote))
        .route("/api/quotes/deleteitem/{id}", delete(delete_quote))
        .route("/api/quotes/readitemdto", get(read_quote_dto))
        .route("/api/quotes/updateitem/{id}", put(update_quote))
        .route("/api/quotes/createitem", post(create_quote))
        // Pet routes
        .route("/api/pets/read", get(read_pets))
        .route("/api/pets/readitem", get(read_pet))
        .route("/api/pets/deleteitem/{id}", delete(delete_pet))
        .route("/api/pets/readitemdto", get(read_pet_dto))
        .route("/api/pets/updateitem/{id}", put(update_pet))
        .route("/api/pets/createitem", post(create_pet))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(db))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(pool: PgPool, port: u16) -> anyhow::Result<()> {
    let app = create_router(pool);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    println!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
