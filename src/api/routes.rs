// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/languages", web::get().to(handlers::get_languages))
            .service(
                web::scope("/sessions")
                    .route("", web::post().to(handlers::create_session))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(handlers::get_session))
                            .route(web::delete().to(handlers::delete_session))
                    )
                    .route("/{id}/settings", web::put().to(handlers::update_settings))
                    .route("/{id}/settings/edit", web::post().to(handlers::change_settings))
                    .route("/{id}/code", web::put().to(handlers::update_code))
                    .route("/{id}/start", web::post().to(handlers::start_problem))
                    .route("/{id}/randomize", web::post().to(handlers::randomize_problem))
                    .route("/{id}/submit", web::post().to(handlers::submit_code))
            )
    );
}
