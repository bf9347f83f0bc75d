pub mod auth;
pub mod client;
pub mod service;
pub mod setup;
