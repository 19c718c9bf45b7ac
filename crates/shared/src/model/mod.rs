mod user;
pub use user::*;

mod exercise_log;
pub use exercise_log::*;

use crate::api::error::ValidationError;

pub trait ValidateModel {
    fn validate(&self) -> Result<(), ValidationError>;
}
