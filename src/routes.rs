// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    handlers::{admin, auth, enquiry, session},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

/// Assembles the main application router.
///
/// * Signup and the test session routes are public; the session id is the handle.
/// * Admin routes sit behind bearer auth plus an admin role check.
/// * Trace and CORS apply to everything.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth_routes = Router::new().route("/login", post(auth::login));

    let session_routes = Router::new()
        .route("/{id}", get(session::get_session))
        .route("/{id}/answers", put(session::record_answer))
        .route("/{id}/submit", post(session::submit))
        .route("/{id}/result", get(session::get_result))
        .route("/{id}/retry", post(session::retry));

    let admin_routes = Router::new()
        .route("/results", get(admin::list_results))
        .route("/results/{id}", delete(admin::delete_result))
        // Layers run bottom-up: auth first, then the admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let mut router = Router::new()
        .route("/api/signup", post(session::signup))
        .route("/api/enquiries", post(enquiry::create_enquiry))
        .nest("/api/sessions", session_routes)
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(dir) = &state.config.static_dir {
        router = router.nest_service("/assets", ServeDir::new(dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
