//! Login route.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// Verify a username/password pair.
///
/// Unknown users and wrong passwords both answer 401 with the same body.
///
/// # Errors
///
/// Returns 400 if either field is missing, 401 on mismatch, and 500 if the
/// store or the verifier fails.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (
        super::non_empty(body.username),
        super::non_empty(body.password),
    ) else {
        return Err(AppError::BadRequest(
            "Fields username and password are required".to_string(),
        ));
    };

    match AuthService::new(state.pool()).login(&username, &password).await {
        Ok(()) => {
            tracing::info!(username = %username, "Login succeeded");
            Ok(Json(LoginResponse { success: true }))
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %username, "Login rejected");
            Err(AppError::Unauthorized)
        }
        Err(AuthError::Repository(source)) => Err(AppError::Store {
            message: "Erro ao autenticar",
            source,
        }),
        Err(source @ AuthError::PasswordHash(_)) => Err(AppError::Verifier {
            message: "Erro ao comparar senha",
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{send, unreachable_app};

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        for body in [
            r"{}",
            r#"{"username":"TESTE"}"#,
            r#"{"password":"TESTE123"}"#,
            r#"{"username":"","password":"TESTE123"}"#,
        ] {
            let (status, json) = send(unreachable_app(), Method::POST, "/api/login", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(
                json,
                json!({ "error": "Fields username and password are required" })
            );
        }
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_json() {
        let (status, json) = send(
            unreachable_app(),
            Method::POST,
            "/api/login",
            Some("{not json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_login_unprovisionable_username_is_unauthorized_without_lookup() {
        let (status, json) = send(
            unreachable_app(),
            Method::POST,
            "/api/login",
            Some(r#"{"username":"two words","password":"TESTE123"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, json!({ "success": false, "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_login_store_failure_is_internal_error() {
        let (status, json) = send(
            unreachable_app(),
            Method::POST,
            "/api/login",
            Some(r#"{"username":"TESTE","password":"TESTE123"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Erro ao autenticar" }));
    }
}
