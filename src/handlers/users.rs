// src/handlers/users.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        results::{CreateUserResponse, UpdateResult},
        user::{MemberProfile, User, UserRole},
    },
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@email.com")]
    pub email: String,

    #[schema(example = "Maria da Silva")]
    pub display_name: Option<String>,

    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,

    // Papel inicial; 'user' quando ausente
    pub role: Option<UserRole>,
}

// POST /users
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 200, description = "Usuário criado; insertedId nulo quando o e-mail já existe", body = CreateUserResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Checagem amigável; a corrida com outro insert é coberta pelo índice único
    if app_state
        .user_repo
        .find_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Ok(Json(CreateUserResponse {
            message: Some("usuário já existe".to_string()),
            inserted_id: None,
        }));
    }

    let created = app_state
        .user_repo
        .create(
            &payload.email,
            payload.display_name.as_deref(),
            payload.photo_url.as_deref(),
            payload.role.unwrap_or(UserRole::User),
        )
        .await?;

    let response = match created {
        Some(user) => CreateUserResponse {
            message: None,
            inserted_id: Some(user.id),
        },
        None => CreateUserResponse {
            message: Some("usuário já existe".to_string()),
            inserted_id: None,
        },
    };

    Ok(Json(response))
}

// GET /users/{email}
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "E-mail do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado, ou null", body = User)
    )
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.user_repo.find_by_email(&email).await?;
    Ok(Json(user))
}

// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses((status = 200, description = "Todos os usuários", body = Vec<User>))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list_all().await?;
    Ok(Json(users))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    pub display_name: Option<String>,

    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,

    pub role: Option<UserRole>,
}

// PATCH /users/update/{email}
#[utoipa::path(
    patch,
    path = "/users/update/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "E-mail do usuário")),
    request_body = UpdateUserPayload,
    responses((status = 200, description = "Resultado da atualização", body = UpdateResult))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .user_repo
        .update_profile(
            &email,
            payload.display_name.as_deref(),
            payload.photo_url.as_deref(),
            payload.role,
        )
        .await?;

    Ok(Json(UpdateResult {
        matched_count: rows,
        modified_count: rows,
    }))
}

// GET /memberProfile/{email}
#[utoipa::path(
    get,
    path = "/memberProfile/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "E-mail do membro")),
    responses(
        (status = 200, description = "Perfil do membro", body = MemberProfile),
        (status = 404, description = "O usuário não tem acordo aceito")
    )
)]
pub async fn member_profile(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state
        .user_repo
        .member_profile(&email)
        .await?
        .ok_or(AppError::ProfileNotFound)?;
    Ok(Json(profile))
}
