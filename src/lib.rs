pub mod config;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod render;
pub mod session;
pub mod templates_structs;
