use axum::{extract::Path, Json};
use chrono::Utc;
use shared::{
    api::payloads::{CreateExercise, ExerciseResponse},
    model::{ExerciseLog, NewExerciseLog, User, ValidateModel},
    types::Uuid,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, AppError};

/// `POST /api/users/:id/exercises`
#[instrument]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    Json(payload): Json<CreateExercise>,
) -> Result<Json<ExerciseResponse>, AppError> {
    payload.validate().map_err(AppError::validation)?;

    let user_id = Uuid::parse(&id).map_err(|_| AppError::user_not_found())?;

    let CreateExercise {
        description,
        duration,
        date,
    } = payload;
    // validate() guarantees duration is present
    let duration = duration.unwrap_or_default();
    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    let response = conn
        .interact(move |conn| {
            // The user must resolve before anything is written; a failed lookup
            // is a hard stop, never an orphaned log row
            let user = User::fetch_by_id(conn, &user_id)?.ok_or_else(AppError::user_not_found)?;

            let log = ExerciseLog::create(
                conn,
                NewExerciseLog::new(Uuid::new_v4(), user.id, description, duration, date),
            )?;

            Ok::<_, AppError>(ExerciseResponse::new(user, log))
        })
        .await??;

    Ok(Json(response))
}
