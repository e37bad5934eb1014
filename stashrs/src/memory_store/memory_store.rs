use crate::cache::cache::{
    Cache, CasToken, DeltaResult, Item, KeyType, Record, SetStatus, TtlType,
};
use crate::cache::coercion::Position;
use crate::cache::error::{CacheError, Result};
use crate::cache::value::Value;
use crate::memory_store::codec::{SerializedCodec, TypedCodec, ValueCodec};
use crate::memory_store::shared_store_state::SharedStoreState;
use crate::timer;

use parking_lot::Mutex;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

type Storage<S> = HashMap<KeyType, Record<S>>;

pub type TypedMemoryStore = MemoryStore<TypedCodec>;
pub type SerializedMemoryStore = MemoryStore<SerializedCodec>;

/// Key value store guarded by a single lock.
///
/// Every public operation takes the lock exactly once and works on the
/// locked map through the `*_locked` helpers, so compound operations
/// (replace, cas, incr) are atomic without a reentrant mutex.
pub struct MemoryStore<C: ValueCodec> {
    memory: Mutex<Storage<C::Stored>>,
    store_state: SharedStoreState,
    codec: PhantomData<fn() -> C>,
}

impl<C: ValueCodec> MemoryStore<C> {
    pub fn new(timer: Arc<dyn timer::Timer + Send + Sync>) -> MemoryStore<C> {
        MemoryStore {
            memory: Mutex::new(HashMap::new()),
            store_state: SharedStoreState::new(timer),
            codec: PhantomData,
        }
    }

    // Looks up a record, dropping it first if it has expired.
    fn live_record<'m>(
        &self,
        memory: &'m mut Storage<C::Stored>,
        key: &str,
    ) -> Option<&'m mut Record<C::Stored>> {
        let expired = self.store_state.check_if_expired(memory.get(key)?);
        if expired {
            memory.remove(key);
            return None;
        }
        memory.get_mut(key)
    }

    fn insert_locked(
        &self,
        memory: &mut Storage<C::Stored>,
        key: KeyType,
        value: C::Stored,
        expires: Option<u64>,
    ) -> SetStatus {
        let previous = memory.get(&key).map(|record| record.cas);
        let cas = self.store_state.next_cas(previous);
        memory.insert(key, Record::new(value, expires, cas));
        SetStatus { cas }
    }

    fn replace_locked(
        &self,
        record: &mut Record<C::Stored>,
        value: C::Stored,
        expires: Option<u64>,
    ) -> SetStatus {
        let cas = self.store_state.next_cas(Some(record.cas));
        *record = Record::new(value, expires, cas);
        SetStatus { cas }
    }

    fn append_prepend_common(
        &self,
        key: &str,
        operand: Value,
        ttl: TtlType,
        position: Position,
    ) -> Result<SetStatus> {
        let mut memory = self.memory.lock();
        let record = self
            .live_record(&mut memory, key)
            .ok_or(CacheError::NotFound)?;
        let value = C::concat(&record.value, &operand, position)?;
        let expires = match ttl {
            0 => record.expires,
            ttl => self.store_state.expires(ttl),
        };
        Ok(self.replace_locked(record, value, expires))
    }
}

impl<C: ValueCodec> Cache for MemoryStore<C> {
    fn get(&self, key: &str) -> Option<Item> {
        let mut memory = self.memory.lock();
        self.live_record(&mut memory, key).map(|record| Item {
            value: C::decode(&record.value),
            cas: record.cas,
        })
    }

    fn set(&self, key: KeyType, value: Value, ttl: TtlType) -> SetStatus {
        let expires = self.store_state.expires(ttl);
        let mut memory = self.memory.lock();
        self.insert_locked(&mut memory, key, C::encode(value), expires)
    }

    fn add(&self, key: KeyType, value: Value, ttl: TtlType) -> Result<SetStatus> {
        let expires = self.store_state.expires(ttl);
        let mut memory = self.memory.lock();
        if self.live_record(&mut memory, &key).is_some() {
            return Err(CacheError::KeyExists);
        }
        Ok(self.insert_locked(&mut memory, key, C::encode(value), expires))
    }

    fn update(&self, key: &str, value: Value, ttl: TtlType) -> Result<SetStatus> {
        let expires = self.store_state.expires(ttl);
        let mut memory = self.memory.lock();
        match self.live_record(&mut memory, key) {
            Some(record) => Ok(self.replace_locked(record, C::encode(value), expires)),
            None => Err(CacheError::NotFound),
        }
    }

    fn cas(
        &self,
        key: KeyType,
        value: Value,
        ttl: TtlType,
        token: Option<CasToken>,
    ) -> Result<SetStatus> {
        let expires = self.store_state.expires(ttl);
        let mut memory = self.memory.lock();
        if let Some(record) = self.live_record(&mut memory, &key) {
            return match token {
                Some(token) if token != record.cas => Err(CacheError::KeyExists),
                _ => Ok(self.replace_locked(record, C::encode(value), expires)),
            };
        }
        Ok(self.insert_locked(&mut memory, key, C::encode(value), expires))
    }

    fn append(&self, key: &str, operand: Value, ttl: TtlType) -> Result<SetStatus> {
        self.append_prepend_common(key, operand, ttl, Position::Append)
    }

    fn prepend(&self, key: &str, operand: Value, ttl: TtlType) -> Result<SetStatus> {
        self.append_prepend_common(key, operand, ttl, Position::Prepend)
    }

    fn incr_decr(&self, key: &str, delta: i64) -> Result<DeltaResult> {
        let mut memory = self.memory.lock();
        let record = self
            .live_record(&mut memory, key)
            .ok_or(CacheError::NotFound)?;
        let result = C::apply_delta(&record.value, delta)?;
        let expires = record.expires;
        let status = self.replace_locked(record, result.stored, expires);
        Ok(DeltaResult {
            cas: status.cas,
            value: result.number,
        })
    }

    fn delete(&self, key: &str) -> bool {
        let mut memory = self.memory.lock();
        match memory.remove(key) {
            Some(record) => !self.store_state.check_if_expired(&record),
            None => false,
        }
    }

    fn flush(&self) {
        self.memory.lock().clear();
    }

    fn len(&self) -> usize {
        self.memory.lock().len()
    }

    fn keys(&self) -> Vec<KeyType> {
        self.memory.lock().keys().cloned().collect()
    }
}
