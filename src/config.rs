//! Runtime configuration for the dashboard server

use std::path::PathBuf;

/// Default CSV file, matching the export name of the roster
pub const DEFAULT_DATA_PATH: &str = "social_influencers_with_categories.csv";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// CSV file holding the influencer roster
    pub data_path: PathBuf,
}

impl ServerConfig {
    /// `address:port` string accepted by the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8050,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}
