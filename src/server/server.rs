//! HTTP server core implementation

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{BeatFlowError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpRequest, HttpServer as ActixHttpServer,
    error::JsonPayloadError,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the production backends
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        config.storage.ensure_dir().map_err(|e| {
            BeatFlowError::config(format!(
                "Cannot create storage directory {}: {}",
                config.storage.dir.display(),
                e
            ))
        })?;

        let state = AppState::new(config.clone())?;
        Ok(Self::with_state(state))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = build_cors(&state.config.server.cors);
        let json_config = web::JsonConfig::default()
            .limit(state.config.server.max_body_size)
            .content_type_required(false)
            .error_handler(json_error_handler);

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "BeatFlow")))
            .wrap(RequestIdMiddleware)
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| BeatFlowError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| BeatFlowError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Reject an unreadable JSON body, logging who sent it
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let client = routes::ClientInfo::from_request(req);
    warn!(
        request_id = %client.request_id,
        remote_addr = %client.remote_addr,
        user_agent = %client.user_agent,
        error = %err,
        "Rejected request with invalid JSON body"
    );
    BeatFlowError::invalid_json(err.to_string()).into()
}

fn build_cors(cors_config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();
    if !cors_config.enabled {
        return cors;
    }

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors.expose_headers(["x-request-id"])
        .max_age(cors_config.max_age as usize)
}
