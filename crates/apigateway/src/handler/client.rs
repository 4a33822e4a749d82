use crate::{middleware::jwt, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{client::service::stats::DynClientStatsService, security::DynSecurityService},
    domain::responses::{ApiResponse, ClientSummaryResponse},
    errors::{AppErrorHttp, ServiceError},
    model::auth::AuthPrincipal,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/clients/collecteur/{collecteur_id}",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(("collecteur_id" = i64, Path, description = "Collecteur ID")),
    responses(
        (status = 200, description = "Enriched summaries for every client of the collecteur", body = ApiResponse<Vec<ClientSummaryResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Principal may not read this collecteur's portfolio"),
        (status = 404, description = "Collecteur not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_collecteur_clients(
    Extension(service): Extension<DynClientStatsService>,
    Extension(security): Extension<DynSecurityService>,
    Extension(principal): Extension<AuthPrincipal>,
    Path(collecteur_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    if !security.can_access_collecteur(collecteur_id, &principal) {
        return Err(AppErrorHttp(ServiceError::Forbidden(format!(
            "Access denied to collecteur {collecteur_id}"
        ))));
    }

    let response = service.collecteur_clients(collecteur_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/clients/{client_id}/summary",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(("client_id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Enriched client summary", body = ApiResponse<ClientSummaryResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Principal may not read this client"),
        (status = 404, description = "Client not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_client_summary(
    Extension(service): Extension<DynClientStatsService>,
    Extension(security): Extension<DynSecurityService>,
    Extension(principal): Extension<AuthPrincipal>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    // An unknown client surfaces as 404 from the access check itself.
    let allowed = security.can_access_client(client_id, &principal).await?;
    if !allowed {
        return Err(AppErrorHttp(ServiceError::Forbidden(format!(
            "Access denied to client {client_id}"
        ))));
    }

    let response = service.client_summary(client_id).await?;
    Ok(Json(response))
}

pub fn client_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/clients/collecteur/{collecteur_id}",
            get(get_collecteur_clients),
        )
        .route("/api/clients/{client_id}/summary", get(get_client_summary))
        .layer(middleware::from_fn(jwt::auth))
        .layer(Extension(app_state.di_container.client_stats.clone()))
        .layer(Extension(app_state.di_container.security.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
