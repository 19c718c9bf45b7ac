pub mod db;

mod errors;
pub use errors::*;

mod cli;
pub use cli::*;

mod state;
pub use state::*;

pub mod routes;
