pub mod athletes;
pub mod auth;
pub mod health;
pub mod meets;
pub mod results;
