use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// When set, CORS is restricted to this origin; otherwise permissive.
    pub cors_allowed_origin: Option<String>,
}

/// Paging defaults applied to every listing endpoint
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListingConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            },
            server: ServerConfig::from_env()?,
            listing: ListingConfig {
                default_page_size: env::var("DEFAULT_PAGE_SIZE")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid DEFAULT_PAGE_SIZE".to_string())
                    })?,
                max_page_size: env::var("MAX_PAGE_SIZE")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid MAX_PAGE_SIZE".to_string()))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.listing.default_page_size == 0 {
            return Err(AppError::Configuration(
                "Default page size must be greater than 0".to_string(),
            ));
        }

        if self.listing.max_page_size < self.listing.default_page_size {
            return Err(AppError::Configuration(
                "Max page size must not be smaller than the default page size".to_string(),
            ));
        }

        Ok(())
    }
}
