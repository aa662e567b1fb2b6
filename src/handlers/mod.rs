pub mod api_v1;
pub mod slide_handlers;

use actix_web::web;

/// Register every page, form and API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(actix_files::Files::new("/static", "./static"))
        .route("/", web::get().to(slide_handlers::index))
        .route("/generate", web::post().to(slide_handlers::generate))
        .route("/select/variant", web::post().to(slide_handlers::select_variant))
        .route("/select/style", web::post().to(slide_handlers::select_style))
        .route("/reset", web::post().to(slide_handlers::reset))
        .service(web::scope("/api/v1").configure(api_v1::configure))
        .default_service(web::to(slide_handlers::not_found));
}
