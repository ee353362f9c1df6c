pub mod error;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod routes;
