use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::{require_admin, require_staff};
use crate::modules::bank_transfers::router::init_bank_transfers_router;
use crate::modules::contacts::router::{init_contacts_admin_router, init_contacts_router};
use crate::modules::ops::router::{init_ops_admin_router, init_ops_router};
use crate::modules::security_logs::router::{
    init_security_logs_admin_router, init_security_logs_router,
};
use crate::modules::settings::router::{init_settings_admin_router, init_settings_router};
use crate::modules::tickets::router::init_tickets_router;
use crate::modules::vehicles::router::{init_vehicles_admin_router, init_vehicles_router};
use crate::modules::warehouses::router::init_warehouses_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    let admin_guard = || middleware::from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/settings",
                    init_settings_router()
                        .merge(init_settings_admin_router().route_layer(admin_guard())),
                )
                .nest(
                    "/contacts",
                    init_contacts_router()
                        .merge(init_contacts_admin_router().route_layer(admin_guard())),
                )
                .nest("/tickets", init_tickets_router())
                .nest(
                    "/vehicles",
                    init_vehicles_router()
                        .merge(init_vehicles_admin_router().route_layer(admin_guard())),
                )
                .nest("/warehouses", init_warehouses_router())
                .nest("/bank-transfers", init_bank_transfers_router())
                .nest(
                    "/security-logs",
                    init_security_logs_router()
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            require_staff,
                        ))
                        .merge(init_security_logs_admin_router().route_layer(admin_guard())),
                )
                .nest(
                    "/ops",
                    init_ops_router().merge(init_ops_admin_router().route_layer(admin_guard())),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
