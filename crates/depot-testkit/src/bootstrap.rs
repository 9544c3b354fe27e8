use async_trait::async_trait;
use depot_core::effects::BootstrapEffects;
use depot_core::{Bootstrap, BootstrapConfig, DepotError, Identity};
use parking_lot::Mutex;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Configuration returned by default
pub fn test_config() -> BootstrapConfig {
    BootstrapConfig {
        app_name: "depot-test".to_string(),
        api_base: "http://localhost:0".to_string(),
        features: BTreeMap::new(),
    }
}

/// Bootstrap provider with scripted results.
///
/// Queued results are consumed first, one per call; after that every call
/// returns the standing result.
pub struct MockBootstrap {
    queued: Mutex<VecDeque<Result<Bootstrap, DepotError>>>,
    standing: Mutex<Result<Bootstrap, DepotError>>,
    calls: AtomicUsize,
}

impl MockBootstrap {
    /// Succeed with [`test_config`] and `user`
    pub fn with_user(user: Option<Identity>) -> Self {
        Self::new(Ok(Bootstrap {
            config: test_config(),
            user,
        }))
    }

    /// Standing result for every call
    pub fn new(result: Result<Bootstrap, DepotError>) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            standing: Mutex::new(result),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the standing result
    pub fn set(&self, result: Result<Bootstrap, DepotError>) {
        *self.standing.lock() = result;
    }

    /// Queue a one-shot result ahead of the standing one
    pub fn push(&self, result: Result<Bootstrap, DepotError>) {
        self.queued.lock().push_back(result);
    }

    /// Number of bootstrap calls made
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BootstrapEffects for MockBootstrap {
    async fn bootstrap(&self) -> Result<Bootstrap, DepotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.queued.lock().pop_front() {
            return result;
        }
        self.standing.lock().clone()
    }
}
