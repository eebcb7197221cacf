//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod schedule;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            .route("/schedule", web::post().to(schedule::generate))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/posted", web::post().to(posts::mark_posted)),
            ),
    );
}
