use axum::{
    routing::{get, post},
    Router,
};
use shared::api::Object;

use crate::AppState;

mod users;
pub use users::*;

mod exercises;
pub use exercises::*;

mod logs;
pub use logs::*;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(Object::Users.path(), post(create_user).get(list_users))
        .route(Object::UserExercises.path(), post(add_exercise))
        .route(Object::UserLogs.path(), get(get_logs))
        .with_state(state)
}
