use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenVerifier;
use crate::database::{Catalog, PgStorage, Storage};

/// Shared handler state: the access layer, the reference catalog and the
/// current-user resolver.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub catalog: Arc<dyn Catalog>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn Storage>,
        catalog: Arc<dyn Catalog>,
        verifier: TokenVerifier,
    ) -> Self {
        Self {
            storage,
            catalog,
            verifier: Arc::new(verifier),
        }
    }

    /// Both seams served by one PostgreSQL pool
    pub fn postgres(pool: PgPool, verifier: TokenVerifier) -> Self {
        let store = Arc::new(PgStorage::new(pool));
        Self::new(store.clone(), store, verifier)
    }
}
