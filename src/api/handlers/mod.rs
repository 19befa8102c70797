// src/api/handlers/mod.rs
mod health;
mod languages;
mod sessions;

pub use health::health_check;
pub use languages::get_languages;
pub use sessions::{
    change_settings, create_session, delete_session, get_session, randomize_problem,
    start_problem, submit_code, update_code, update_settings,
};
