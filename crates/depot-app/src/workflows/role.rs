//! Role resolution with degrade-to-default.

use depot_core::effects::DataStore;
use depot_core::Role;

/// Resolve the profile role. Any failure yields [`Role::User`].
pub(crate) async fn resolve_role(store: &dyn DataStore) -> Role {
    match store.get_profile().await.and_then(|profile| profile.role()) {
        Ok(role) => role,
        Err(err) => {
            tracing::warn!(
                user = %store.identity().id,
                error = %err,
                "Failed to get user profile, falling back to default role"
            );
            Role::default()
        }
    }
}
