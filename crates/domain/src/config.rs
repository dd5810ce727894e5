//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelConfig,
    pub server: ServerConfig,
    pub request_log: RequestLogConfig,
}

/// Model artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized model artifact
    pub path: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Request audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestLogConfig {
    /// Path to the append-only request log file
    pub path: String,
}

impl ServerConfig {
    /// Socket address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig { path: "language_model.json".to_string() },
            server: ServerConfig { host: "127.0.0.1".to_string(), port: 8080 },
            request_log: RequestLogConfig { path: "langsight_requests.log".to_string() },
        }
    }
}
