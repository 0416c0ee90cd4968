use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    domain::{
        error::DomainError, repositories::user_repository::UserRepository,
        services::password_service::PasswordHasher,
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};

// Request

/// json for register request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Check one payload field: present, string-typed, non-blank. Records a
/// violation in `errors` and yields the value otherwise.
fn validate_field(
    payload: &Value,
    field: &str,
    errors: &mut HashMap<String, String>,
) -> Option<String> {
    match payload.get(field) {
        None | Some(Value::Null) => {
            errors.insert(field.to_string(), "must not be blank".to_string());
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.insert(field.to_string(), "must not be blank".to_string());
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.insert(field.to_string(), "must be a string".to_string());
            None
        }
    }
}

/// Validate the raw payload into a [`RegisterRequest`]. Every field is
/// checked; violations are collected per field rather than short-circuited.
fn validate_payload(payload: &Value) -> Result<RegisterRequest, HashMap<String, String>> {
    let mut errors = HashMap::new();
    let username = validate_field(payload, "username", &mut errors);
    let password = validate_field(payload, "password", &mut errors);

    match (username, password) {
        (Some(username), Some(password)) => Ok(RegisterRequest { username, password }),
        _ => Err(errors),
    }
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router
pub fn create_user_router<
    R: UserRepository + Send + Sync + 'static + Clone,
    P: PasswordHasher + Send + Sync + 'static + Clone,
>(
    register_service: RegisterUserUsecase<R, P>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/users/register", post(register::<R, P>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<R: UserRepository, P: PasswordHasher> {
    pub register_service: Arc<RegisterUserUsecase<R, P>>,
}

// handler function

/// handler function for register
async fn register<R: UserRepository + Send + Sync, P: PasswordHasher + Send + Sync>(
    State(state): State<AppState<R, P>>,
    Json(payload): Json<Value>,
) -> Response {
    let request = match validate_payload(&payload) {
        Ok(request) => request,
        Err(errors) => {
            warn!(?errors, "rejected malformed registration payload");
            return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
        }
    };

    match state
        .register_service
        .register(request.username, request.password)
        .await
    {
        Ok(user) => {
            info!(user_id = %user.id().as_uuid(), username = %user.username(), "user registered");
            (StatusCode::CREATED, "User registered successfully").into_response()
        }
        Err(DomainError::DuplicateUsername { username }) => {
            warn!(%username, "registration rejected: duplicate username");
            (
                StatusCode::BAD_REQUEST,
                "User registration failed: Username already exists",
            )
                .into_response()
        }
        Err(err) => {
            error!(error = %err, "registration failed unexpectedly");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to register user").into_response()
        }
    }
}
