use crate::cache::cache::Cache;
use crate::memory_store::memory_store::{SerializedMemoryStore, TypedMemoryStore};
use crate::memory_store::StoreEngine;
use crate::stash::store::Stash;
use crate::timer::{self, SystemTimer};
use serde_derive::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StashConfig {
    pub engine: StoreEngine,
}

impl StashConfig {
    pub fn new(engine: StoreEngine) -> StashConfig {
        StashConfig { engine }
    }
}

pub struct StashBuilder {}

impl StashBuilder {
    pub fn from_config(
        config: &StashConfig,
        timer: Arc<dyn timer::Timer + Send + Sync>,
    ) -> Arc<dyn Cache + Send + Sync> {
        info!("Using {}", config.engine.as_str());
        match config.engine {
            StoreEngine::Typed => Arc::new(TypedMemoryStore::new(timer)),
            StoreEngine::Serialized => Arc::new(SerializedMemoryStore::new(timer)),
        }
    }

    /// Stash running on the system clock
    pub fn build(config: &StashConfig) -> Stash {
        Stash::new(Self::from_config(config, Arc::new(SystemTimer::new())))
    }
}
