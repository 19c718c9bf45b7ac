use axum::Json;
use shared::{
    api::payloads::CreateUser,
    model::{NewUser, User, ValidateModel},
    types::Uuid,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, AppError};

/// `POST /api/users`. Duplicate usernames are accepted; each call mints a
/// fresh id
#[instrument]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    Json(payload): Json<CreateUser>,
) -> Result<Json<User>, AppError> {
    payload.validate().map_err(AppError::validation)?;

    let user = conn
        .interact(move |conn| {
            Ok::<_, AppError>(User::create(
                conn,
                NewUser::new(Uuid::new_v4(), payload.username),
            )?)
        })
        .await??;

    Ok(Json(user))
}

/// `GET /api/users`. Order is whatever the store returns
#[instrument]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<User>>, AppError> {
    let users = conn
        .interact(|conn| Ok::<_, AppError>(User::fetch_all(conn)?))
        .await??;

    Ok(Json(users))
}
