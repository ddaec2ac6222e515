use super::session::Store;
use crate::error::{ZooError, ZooResult};
use crate::logging::log_info;

/// Session scope the [`Store`] is provisioned into.
///
/// Built once at the composition root and handed to the app; every screen
/// reaches the store through it. Using an unprovisioned scope is a
/// programming error and fails fast with [`ZooError::StoreNotProvided`]
/// naming the consumer.
#[derive(Debug, Default)]
pub struct StoreScope {
    store: Option<Store>,
}

impl StoreScope {
    /// A scope with no store yet.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Install the session store. Only one provision per session.
    pub fn provision(&mut self, store: Store) -> ZooResult<()> {
        if self.store.is_some() {
            return Err(ZooError::StoreAlreadyProvided);
        }
        log_info("App store provisioned");
        self.store = Some(store);
        Ok(())
    }

    pub fn is_provisioned(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self, consumer: &str) -> ZooResult<&Store> {
        self.store
            .as_ref()
            .ok_or_else(|| ZooError::StoreNotProvided(consumer.to_string()))
    }

    pub fn store_mut(&mut self, consumer: &str) -> ZooResult<&mut Store> {
        self.store
            .as_mut()
            .ok_or_else(|| ZooError::StoreNotProvided(consumer.to_string()))
    }
}
