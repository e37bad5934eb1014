use crate::cache::cache::Cache;
use crate::memory_store::memory_store::{SerializedMemoryStore, TypedMemoryStore};
use crate::stash::store::Stash;
use crate::timer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 2023-11-14T22:13:20Z, in milliseconds
pub const MOCK_START_TIME: u64 = 1_700_000_000_000;

pub struct MockSystemTimer {
    pub current_time: AtomicU64,
}

pub trait SetableTimer: timer::Timer {
    fn set(&self, time: u64);
    fn add_millis(&self, millis: u64);
    fn add_seconds(&self, seconds: u64) {
        self.add_millis(seconds * 1_000)
    }
}

impl MockSystemTimer {
    pub fn new() -> Self {
        MockSystemTimer {
            current_time: AtomicU64::new(MOCK_START_TIME),
        }
    }
}

impl Default for MockSystemTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl timer::Timer for MockSystemTimer {
    fn timestamp(&self) -> u64 {
        self.current_time.load(Ordering::Acquire)
    }
}

impl SetableTimer for MockSystemTimer {
    fn set(&self, time: u64) {
        self.current_time.store(time, Ordering::Release)
    }

    fn add_millis(&self, millis: u64) {
        self.current_time.fetch_add(millis, Ordering::Release);
    }
}

pub struct MockServer {
    pub timer: Arc<MockSystemTimer>,
    pub storage: Stash,
}

impl MockServer {
    pub fn new(store: Arc<dyn Cache + Send + Sync>, timer: Arc<MockSystemTimer>) -> Self {
        MockServer {
            timer,
            storage: Stash::new(store),
        }
    }
}

pub fn create_typed_server() -> MockServer {
    let timer = Arc::new(MockSystemTimer::new());
    MockServer::new(Arc::new(TypedMemoryStore::new(timer.clone())), timer)
}

pub fn create_serialized_server() -> MockServer {
    let timer = Arc::new(MockSystemTimer::new());
    MockServer::new(Arc::new(SerializedMemoryStore::new(timer.clone())), timer)
}
