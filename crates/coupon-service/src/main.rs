//! Coupon Service - HTTP API for coupon issuance
//!
//! This is the main entry point for the coupon service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coupon_service::{create_router, AppState, ServiceConfig, StorageBackend};
use coupon_store::{MemoryStore, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,coupon=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Coupon Service");

    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        storage = ?config.storage,
        data_dir = %config.data_dir,
        code_length = config.code_length,
        "Service configuration loaded"
    );

    if config.code_length == 0 {
        return Err("COUPON_CODE_LENGTH must be greater than zero".into());
    }

    let store = open_store(&config)?;
    let state = AppState::new(store, config.clone());

    let app = create_router(state);

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn open_store(config: &ServiceConfig) -> Result<Arc<dyn Store>, Box<dyn std::error::Error>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; coupons are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::RocksDb => open_rocks(&config.data_dir),
    }
}

#[cfg(feature = "rocksdb-backend")]
fn open_rocks(path: &str) -> Result<Arc<dyn Store>, Box<dyn std::error::Error>> {
    tracing::info!(path = %path, "Opening RocksDB store");
    Ok(Arc::new(coupon_store::RocksStore::open(path)?))
}

#[cfg(not(feature = "rocksdb-backend"))]
fn open_rocks(_path: &str) -> Result<Arc<dyn Store>, Box<dyn std::error::Error>> {
    Err("STORAGE_BACKEND=rocksdb requires the rocksdb-backend feature".into())
}
