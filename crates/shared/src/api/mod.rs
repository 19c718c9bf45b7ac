use const_format::concatcp;

pub mod error;
pub mod payloads;

pub const API_BASE_PATH: &str = "/api/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:id/logs"),
        }
    }
}
