use crate::{Bootstrap, DepotError};
use async_trait::async_trait;

/// Startup configuration source.
///
/// One call is made per app launch. Any transport or parse problem is
/// reported as an error; the core turns it into a full-screen failure.
#[async_trait]
pub trait BootstrapEffects: Send + Sync {
    /// Resolve server configuration and the identity the host already holds
    async fn bootstrap(&self) -> Result<Bootstrap, DepotError>;
}
