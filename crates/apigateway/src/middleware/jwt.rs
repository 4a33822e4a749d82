use axum::{
    Extension,
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use shared::{
    abstract_trait::jwt::DynJwtService,
    errors::{AppErrorHttp, ServiceError},
};

/// Requires a valid `Authorization: Bearer <token>` header and makes the
/// verified principal available to handlers as an Extension.
pub async fn auth(
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppErrorHttp> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppErrorHttp(ServiceError::Unauthorized(
                "Missing bearer token in Authorization header".to_string(),
            ))
        })?;

    let principal = jwt.verify_token(token).map_err(AppErrorHttp)?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
