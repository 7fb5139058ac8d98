//! HTTP route modules
//!
//! All API routes live under `/api`; `/health` is registered at the root by
//! the server.

mod context;
pub mod generation;
pub mod library;
pub mod translation;

pub use context::{ClientInfo, GenerationLogContext, TranslationLogContext};

use actix_web::web;

/// Register the `/api` scope
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/generate", web::post().to(generation::generate_music))
            .route("/translate", web::post().to(translation::translate_prompt))
            .route("/library", web::get().to(library::get_library)),
    );
}
