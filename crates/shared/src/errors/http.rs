use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::Unauthorized(msg) => {
                warn!("🎫 Unauthorized: {msg}");
                (StatusCode::UNAUTHORIZED, msg)
            }
            ServiceError::Forbidden(msg) => {
                warn!("🚫 Access denied: {msg}");
                (StatusCode::FORBIDDEN, msg)
            }
            ServiceError::NotFound(msg) => {
                info!("🔍 Not found: {msg}");
                (StatusCode::NOT_FOUND, msg)
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    info!("🔍 Resource not found");
                    (StatusCode::NOT_FOUND, "Not found".to_string())
                }
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Repository error: {msg}");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
            ServiceError::Jwt(err) => {
                warn!("🎫 JWT error: {err}");
                (StatusCode::UNAUTHORIZED, format!("JWT error: {err}"))
            }
            ServiceError::TokenExpired => {
                warn!("⏰ Token expired");
                (
                    StatusCode::UNAUTHORIZED,
                    "Token has expired".to_string(),
                )
            }
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServiceError::Custom(msg) => {
                error!("⚙️ Service error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}
