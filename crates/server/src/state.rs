use axum::extract::FromRef;
use deadpool_sqlite::Pool;

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
}

impl FromRef<AppState> for Pool {
    fn from_ref(state: &AppState) -> Self {
        // pool uses an Arc internally so clone is cheap
        state.pool.clone()
    }
}
