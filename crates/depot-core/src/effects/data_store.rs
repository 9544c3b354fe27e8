use crate::{BootstrapConfig, DataStoreMode, DepotError, Identity, Profile};
use async_trait::async_trait;
use std::sync::Arc;

/// Identity-scoped business data access.
///
/// Only profile lookup is consumed by the session core; page-level CRUD
/// lives with the page implementations.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Identity this store is bound to
    fn identity(&self) -> &Identity;

    /// Backend selection this store was created with
    fn mode(&self) -> DataStoreMode;

    /// Fetch the current user's profile
    async fn get_profile(&self) -> Result<Profile, DepotError>;
}

/// Synchronous data store construction.
pub trait DataStoreFactory: Send + Sync {
    /// Build a store bound to `identity`
    fn create_data_store(
        &self,
        config: &BootstrapConfig,
        mode: DataStoreMode,
        identity: &Identity,
    ) -> Result<Arc<dyn DataStore>, DepotError>;
}
