use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::{
    db::DbPool,
    dto::auth::{Claims, LoginRequest, LoginResponse, MeResponse},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::User,
    response::ApiResponse,
};

const TOKEN_TTL_HOURS: i64 = 24;

pub async fn login(pool: &DbPool, payload: LoginRequest) -> AppResult<ApiResponse<LoginResponse>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(payload.email.trim().to_lowercase())
        .fetch_optional(pool)
        .await?;
    // Same error for an unknown email and a wrong password.
    let user = user.ok_or(AppError::Unauthorized)?;

    let parsed = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("stored password hash invalid: {e}")))?;
    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed)
        .map_err(|_| AppError::Unauthorized)?;

    let token = issue_token(&user)?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(ApiResponse::success("Logged in", LoginResponse { token }, None))
}

fn issue_token(user: &User) -> Result<String, AppError> {
    let exp = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role.clone(),
        exp: exp.timestamp() as usize,
    };
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.into()))
}

pub fn me(user: &AuthUser) -> ApiResponse<MeResponse> {
    ApiResponse::success(
        "OK",
        MeResponse {
            user_id: user.user_id,
            role: user.role.clone(),
        },
        None,
    )
}
