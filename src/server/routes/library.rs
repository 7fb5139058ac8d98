//! Clip library endpoint

use crate::core::library::{LibraryEntry, list_library};
use crate::server::state::AppState;
use crate::utils::error::{BeatFlowError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

/// Body of `GET /api/library`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryResponse {
    pub files: Vec<LibraryEntry>,
}

/// `GET /api/library`
pub async fn get_library(state: web::Data<AppState>) -> Result<HttpResponse> {
    let dir = state.config.storage.dir.clone();
    let files = web::block(move || list_library(&dir))
        .await
        .map_err(|e| BeatFlowError::internal(format!("Library scan failed: {}", e)))?;

    Ok(HttpResponse::Ok().json(LibraryResponse { files }))
}
