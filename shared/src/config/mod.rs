//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `seed` - Seed accounts loaded into the credential store at startup
//! - `server` - HTTP server binding configuration

pub mod seed;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use seed::{SeedConfig, SeedUser};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Seed account configuration
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            seed: SeedConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8089");
        assert_eq!(config.seed.users.len(), 3);
    }
}
