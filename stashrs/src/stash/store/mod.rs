use crate::cache::cache::{
    Cache, CasToken, DeltaResult, Item as CacheItem, KeyType as CacheKeyType,
    SetStatus as CacheSetStatus, TtlType,
};
use crate::cache::error::{CacheError, Result};
use crate::cache::value::Value;
use std::sync::Arc;

pub type Item = CacheItem;
pub type SetStatus = CacheSetStatus;
pub type KeyType = CacheKeyType;

/**
 * Implements memcached style commands
 * on top of an engine agnostic store
 */
#[derive(Clone)]
pub struct Stash {
    store: Arc<dyn Cache + Send + Sync>,
}

impl Stash {
    pub fn new(store: Arc<dyn Cache + Send + Sync>) -> Stash {
        Stash { store }
    }

    pub fn get(&self, key: &str) -> Option<Item> {
        self.store.get(key)
    }

    pub fn set(&self, key: impl Into<KeyType>, value: impl Into<Value>, ttl: TtlType) -> SetStatus {
        self.store.set(key.into(), value.into(), ttl)
    }

    pub fn add(
        &self,
        key: impl Into<KeyType>,
        value: impl Into<Value>,
        ttl: TtlType,
    ) -> Result<SetStatus> {
        self.store.add(key.into(), value.into(), ttl)
    }

    pub fn update(&self, key: &str, value: impl Into<Value>, ttl: TtlType) -> Result<SetStatus> {
        self.store.update(key, value.into(), ttl)
    }

    pub fn cas(
        &self,
        key: impl Into<KeyType>,
        value: impl Into<Value>,
        ttl: TtlType,
        token: Option<CasToken>,
    ) -> Result<SetStatus> {
        self.store.cas(key.into(), value.into(), ttl, token)
    }

    pub fn append(&self, key: &str, operand: impl Into<Value>, ttl: TtlType) -> Result<SetStatus> {
        self.store.append(key, operand.into(), ttl)
    }

    pub fn prepend(
        &self,
        key: &str,
        operand: impl Into<Value>,
        ttl: TtlType,
    ) -> Result<SetStatus> {
        self.store.prepend(key, operand.into(), ttl)
    }

    pub fn increment(&self, key: &str, delta: i64) -> Result<DeltaResult> {
        self.store.incr_decr(key, delta)
    }

    pub fn decrement(&self, key: &str, delta: i64) -> Result<DeltaResult> {
        let delta = delta.checked_neg().ok_or(CacheError::ArithOnNonNumeric)?;
        self.store.incr_decr(key, delta)
    }

    pub fn delete(&self, key: &str) -> bool {
        self.store.delete(key)
    }

    pub fn flush(&self) {
        self.store.flush()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn keys(&self) -> Vec<KeyType> {
        self.store.keys()
    }
}

#[cfg(test)]
mod delete_tests;
