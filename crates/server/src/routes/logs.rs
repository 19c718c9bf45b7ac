use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{
    api::payloads::{LogsQuery, LogsResponse},
    model::{ExerciseLog, User},
    types::Uuid,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, AppError};

/// `GET /api/users/:id/logs?from&to&limit`. Bounds are inclusive and
/// independent; `limit` goes straight through to the fetch-size cap
#[instrument]
pub async fn get_logs(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<LogsResponse>, AppError> {
    let user_id = Uuid::parse(&id).map_err(|_| AppError::user_not_found())?;
    let LogsQuery { from, to, limit } = query;

    let response = conn
        .interact(move |conn| {
            let user = User::fetch_by_id(conn, &user_id)?.ok_or_else(AppError::user_not_found)?;

            let logs = ExerciseLog::fetch_for_user(conn, &user.id, from, to, limit)?;

            Ok::<_, AppError>(LogsResponse::new(user, logs, from, to))
        })
        .await??;

    Ok(Json(response))
}
