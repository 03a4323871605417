use axum::Router;
use axum::body::Body;
use axum::http::{Request, Method, HeaderValue, header};
use axum::routing::{get, post};
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;

async fn ok() -> &'static str { "ok" }

#[tokio::test]
async fn bare_post() {
    let app: Router = Router::new()
        .route("/health", get(ok))
        .route("/create", post(ok));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    println!("status = {:?}", response.status());
}

#[tokio::test]
async fn post_with_cors() {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, axum::http::Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);
    let app: Router = Router::new()
        .route("/health", get(ok))
        .route("/create", post(ok))
        .layer(cors);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    println!("status = {:?}", response.status());
}

#[tokio::test]
async fn post_with_compression() {
    let app: Router = Router::new()
        .route("/health", get(ok))
        .route("/create", post(ok))
        .layer(CompressionLayer::new());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    println!("status = {:?}", response.status());
}

#[tokio::test]
async fn post_with_setheader() {
    let app: Router = Router::new()
        .route("/health", get(ok))
        .route("/create", post(ok))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    println!("status = {:?}", response.status());
}
