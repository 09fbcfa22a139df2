use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::Session;
use super::repository::{AccountRepository, RepositoryError};
use super::service::{AccountService, AuthError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRequest {
    #[serde(default)]
    pub mobile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpVerification {
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub otp: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Router exposing login, OTP signup and logout.
pub fn accounts_router<R>(service: Arc<AccountService<R>>) -> Router
where
    R: AccountRepository + 'static,
{
    Router::new()
        .route("/api/v1/auth/login", post(login_handler::<R>))
        .route("/api/v1/auth/otp/request", post(request_otp_handler::<R>))
        .route("/api/v1/auth/otp/verify", post(verify_otp_handler::<R>))
        .route("/api/v1/auth/logout", post(logout_handler::<R>))
        .with_state(service)
}

pub(crate) async fn login_handler<R>(
    State(service): State<Arc<AccountService<R>>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response
where
    R: AccountRepository + 'static,
{
    match service.password_login(&request.phone, &request.password, Utc::now()) {
        Ok(session) => session_response(StatusCode::OK, "Logged in successfully.", &session),
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn request_otp_handler<R>(
    State(service): State<Arc<AccountService<R>>>,
    axum::Json(request): axum::Json<OtpRequest>,
) -> Response
where
    R: AccountRepository + 'static,
{
    match service.request_otp(&request.mobile, Utc::now()) {
        Ok(dispatch) => (StatusCode::OK, axum::Json(dispatch)).into_response(),
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn verify_otp_handler<R>(
    State(service): State<Arc<AccountService<R>>>,
    axum::Json(request): axum::Json<OtpVerification>,
) -> Response
where
    R: AccountRepository + 'static,
{
    match service.verify_otp(
        &request.mobile,
        &request.otp,
        request.name.as_deref(),
        Utc::now(),
    ) {
        Ok(outcome) => {
            let status = if outcome.new_account {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, axum::Json(outcome)).into_response()
        }
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn logout_handler<R>(
    State(service): State<Arc<AccountService<R>>>,
    headers: HeaderMap,
) -> Response
where
    R: AccountRepository + 'static,
{
    let Some(token) = bearer_token(&headers) else {
        return auth_error_response(AuthError::InvalidSession);
    };
    match service.logout(token) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => auth_error_response(error),
    }
}

/// Token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn session_response(status: StatusCode, message: &str, session: &Session) -> Response {
    let payload = json!({
        "message": message,
        "token": session.token,
        "phone": session.phone,
        "issued_at": session.issued_at,
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) fn auth_error_response(error: AuthError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status(), axum::Json(payload)).into_response()
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            error if error.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::Cooldown { .. } => StatusCode::TOO_MANY_REQUESTS,
            AuthError::AccountNotFound => StatusCode::NOT_FOUND,
            AuthError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            AuthError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}
