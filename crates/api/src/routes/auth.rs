//! Registration, login, and current-user routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    middleware::AuthUser,
};
use salesbook_core::auth::{hash_password, validate_login, validate_registration, verify_password};
use salesbook_db::{UserRepository, entities::users};
use salesbook_shared::AppError;
use salesbook_shared::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo, UserProfile};

/// Public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Auth routes that need a verified token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

fn auth_response(state: &AppState, user: users::Model) -> ApiResult<AuthResponse> {
    let token = state
        .jwt_service
        .issue_token(user.id, &user.email)
        .map_err(ApiError::internal)?;

    Ok(AuthResponse {
        user: UserInfo {
            id: user.id,
            email: user.email,
            name: user.name,
        },
        token,
    })
}

/// POST /auth/register - Create an account and sign it in.
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    validate_registration(&payload).map_err(ApiError::validation)?;

    let user_repo = UserRepository::new((*state.db).clone());
    if user_repo.email_exists(&payload.email).await? {
        info!(email = %payload.email, "Registration with existing email");
        return Err(AppError::Conflict("Email já cadastrado".to_string()).into());
    }

    let password_hash = hash_password(&payload.password).map_err(ApiError::internal)?;
    let user = user_repo
        .create(&payload.email, &password_hash, payload.name.trim())
        .await?;

    info!(user_id = %user.id, "User registered");
    Ok((StatusCode::CREATED, Json(auth_response(&state, user)?)))
}

/// POST /auth/login - Exchange credentials for a token.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    validate_login(&payload).map_err(ApiError::validation)?;

    let user_repo = UserRepository::new((*state.db).clone());
    let Some(user) = user_repo.find_by_email(&payload.email).await? else {
        info!(email = %payload.email, "Login attempt for non-existent user");
        return Err(ApiError::unauthorized("Email ou senha inválidos"));
    };

    if !verify_password(&payload.password, &user.password_hash).map_err(ApiError::internal)? {
        warn!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(ApiError::unauthorized("Email ou senha inválidos"));
    }

    info!(user_id = %user.id, "User logged in");
    Ok(Json(auth_response(&state, user)?))
}

/// GET /auth/me - Profile of the token's owner.
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserProfile>> {
    let user = UserRepository::new((*state.db).clone())
        .find_by_id(auth.user_id().into_inner())
        .await?
        .ok_or_else(|| {
            warn!(email = %auth.email(), "Token owner no longer exists");
            ApiError::not_found("Usuário não encontrado")
        })?;

    Ok(Json(UserProfile {
        id: user.id,
        email: user.email,
        name: user.name,
        created_at: user.created_at.into(),
    }))
}
