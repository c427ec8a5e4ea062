//! Application state.

use std::sync::Arc;

use coupon_core::{CodeGenerator, RandomCodeGenerator};
use coupon_store::Store;

use crate::config::ServiceConfig;
use crate::issuance::CouponIssuer;

/// The issuer as shared by handlers, over type-erased collaborators.
pub type SharedIssuer = CouponIssuer<Arc<dyn Store>, Arc<dyn CodeGenerator>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The issuance engine.
    pub issuer: Arc<SharedIssuer>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create application state with the random code generator.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        let generator = Arc::new(RandomCodeGenerator::new(config.code_length));
        Self::with_generator(store, generator, config)
    }

    /// Create application state with a specific code generator.
    #[must_use]
    pub fn with_generator(
        store: Arc<dyn Store>,
        generator: Arc<dyn CodeGenerator>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            issuer: Arc::new(CouponIssuer::new(store, generator)),
            config,
        }
    }
}
