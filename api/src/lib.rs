pub mod auth;
pub mod config;
pub mod data;
pub mod dto;
pub mod errors;
pub mod listings;
pub mod models;
pub mod query;
pub mod quiz;
pub mod rate_limit;
pub mod routes;
pub mod sessions;
pub mod states;

pub use routes::router;
pub use states::AppState;
