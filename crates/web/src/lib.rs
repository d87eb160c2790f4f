pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod features;
pub mod middleware;

pub use app::{AppState, build_router};
