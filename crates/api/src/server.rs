//! Server configuration and startup.

use crate::error::{ApiError, ApiResult};
use crate::routes::create_router;
use crate::state::AppState;
use defi_yield_data::{StaticCatalog, load_json_catalog};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON catalog to serve instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Allow any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            catalog_path: None,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    pub const HOST_VAR: &'static str = "YIELD_API_HOST";
    pub const PORT_VAR: &'static str = "YIELD_API_PORT";
    pub const CATALOG_VAR: &'static str = "YIELD_CATALOG_PATH";
    pub const CORS_VAR: &'static str = "YIELD_API_CORS";

    /// Reads overrides from the environment on top of [`ServerConfig::default`].
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] for an unparsable port or CORS flag.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup(Self::HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(Self::PORT_VAR) {
            config.port = port
                .parse()
                .map_err(|_| ApiError::Config(format!("{} must be a port, got '{port}'", Self::PORT_VAR)))?;
        }
        if let Some(path) = lookup(Self::CATALOG_VAR).filter(|p| !p.is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup(Self::CORS_VAR) {
            config.cors_permissive = parse_flag(&flag).ok_or_else(|| {
                ApiError::Config(format!("{} must be true or false, got '{flag}'", Self::CORS_VAR))
            })?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> ApiResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ApiError::Config(format!("invalid bind address {}:{}: {e}", self.host, self.port)))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// The HTTP server.
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Builds the server with the catalog named by the config, or the
    /// built-in catalog when none is set.
    pub async fn from_config(config: ServerConfig) -> ApiResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => load_json_catalog(path).await?,
            None => StaticCatalog::builtin(),
        };
        Ok(Self::new(config, AppState::new(catalog)))
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Binds and serves until the process is stopped.
    pub async fn run(self) -> ApiResult<()> {
        let addr = self.config.socket_addr()?;
        let app = create_router(self.state, self.config.cors_permissive);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "Yield API listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
