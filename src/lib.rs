// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod executor;
pub mod generator;
pub mod language;
pub mod models;
pub mod session;
pub mod validator;
