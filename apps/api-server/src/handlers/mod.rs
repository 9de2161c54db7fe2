//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
///
/// `/posts/create` must be registered before `/posts/{id}` so the form
/// route is not captured by the id matcher.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check));
    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(posts::index))
            .route("", web::post().to(posts::store))
            .route("/create", web::get().to(posts::create))
            .route("/{id}", web::get().to(posts::show))
            .route("/{id}/edit", web::get().to(posts::edit))
            .route("/{id}", web::put().to(posts::update))
            .route("/{id}", web::patch().to(posts::update))
            .route("/{id}", web::delete().to(posts::destroy)),
    );
}
