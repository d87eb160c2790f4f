pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

mod database;

pub use database::Database;
