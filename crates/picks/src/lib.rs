//! Core types for Paddock Picks, a season-long fantasy racing game where each
//! player picks one driver per race weekend.
//!
//! The crate holds the entity models, the request and response shapes used
//! by the API, the `{data}`/`{error}` envelope, and the points schedule.

pub mod errors;
pub mod models;
pub mod scoring;
pub mod types;

pub use errors::AppError;
pub use types::ApiResponse;
