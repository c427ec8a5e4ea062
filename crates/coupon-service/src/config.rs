//! Service configuration.

use coupon_core::DEFAULT_CODE_LENGTH;

/// Which storage backend the service runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local storage; contents are lost on restart.
    Memory,
    /// `RocksDB` under `data_dir` (requires the `rocksdb-backend` feature).
    RocksDb,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "rocksdb" => Some(Self::RocksDb),
            _ => None,
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Path to `RocksDB` data directory (default: "/data/coupon").
    pub data_dir: String,

    /// Storage backend (default: memory).
    pub storage: StorageBackend,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Length of generated coupon codes.
    pub code_length: usize,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let storage = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Unknown STORAGE_BACKEND, using memory");
                StorageBackend::Memory
            }),
            Err(_) => defaults.storage,
        };

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            data_dir: std::env::var("DATA_DIR").unwrap_or(defaults.data_dir),
            storage,
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: env_number("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: env_number("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or(defaults.request_timeout_seconds),
            code_length: env_number("COUPON_CODE_LENGTH").unwrap_or(defaults.code_length),
        }
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            data_dir: "/data/coupon".into(),
            storage: StorageBackend::Memory,
            cors_origins: vec!["*".into()],
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 30,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}
