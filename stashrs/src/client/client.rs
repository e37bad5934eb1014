use super::config::ClientConfig;
use super::error::{ClientError, ClientResult, KeyError};
use super::key;
use crate::cache::cache::{CasToken, TtlType};
use crate::cache::error::{CacheError, Result as CacheResult};
use crate::cache::value::Value;
use crate::stash::store::{SetStatus, Stash};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasOutcome {
    Stored,
    /// the key changed since its token was fetched
    Stale,
}

/// memcached style client working on a [`Stash`] instead of a server.
///
/// Several clients may share one stash; each keeps its own CAS token cache.
/// Multi-key operations are not atomic as a whole.
pub struct Client {
    stash: Stash,
    config: ClientConfig,
    cas_cache: Mutex<HashMap<String, CasToken>>,
}

impl Client {
    pub fn new(stash: Stash) -> Client {
        Client::with_config(stash, ClientConfig::default())
    }

    pub fn with_config(stash: Stash, config: ClientConfig) -> Client {
        Client {
            stash,
            config,
            cas_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn check_key(&self, key: &str, extra_len: usize) -> Result<(), KeyError> {
        if !self.config.check_keys {
            return Ok(());
        }
        key::check_key(key, extra_len, self.config.server_max_key_length)
    }

    pub fn set(&self, key: &str, value: impl Into<Value>, ttl: TtlType) -> ClientResult<bool> {
        self.check_key(key, 0)?;
        let value = value.into();
        if !self.fits(key, &value) {
            return Ok(false);
        }
        self.stash.set(key, value, ttl);
        Ok(true)
    }

    /// Stores the value only if the key does not exist yet
    pub fn add(&self, key: &str, value: impl Into<Value>, ttl: TtlType) -> ClientResult<bool> {
        self.check_key(key, 0)?;
        let value = value.into();
        if !self.fits(key, &value) {
            return Ok(false);
        }
        self.stored(key, self.stash.add(key, value, ttl))
    }

    /// Stores the value only if the key already exists
    pub fn replace(&self, key: &str, value: impl Into<Value>, ttl: TtlType) -> ClientResult<bool> {
        self.check_key(key, 0)?;
        let value = value.into();
        if !self.fits(key, &value) {
            return Ok(false);
        }
        self.stored(key, self.stash.update(key, value, ttl))
    }

    /// Appends to an existing value. Numbers are extended digit by digit,
    /// so appending `34` to `12` gives `1234`.
    pub fn append(&self, key: &str, value: impl Into<Value>, ttl: TtlType) -> ClientResult<bool> {
        self.check_key(key, 0)?;
        let value = value.into();
        if !self.fits(key, &value) {
            return Ok(false);
        }
        self.stored(key, self.stash.append(key, value, ttl))
    }

    pub fn prepend(&self, key: &str, value: impl Into<Value>, ttl: TtlType) -> ClientResult<bool> {
        self.check_key(key, 0)?;
        let value = value.into();
        if !self.fits(key, &value) {
            return Ok(false);
        }
        self.stored(key, self.stash.prepend(key, value, ttl))
    }

    /// Stores the value unless the key changed since this client last read it.
    /// Without a cached token this behaves like `set`.
    pub fn cas(
        &self,
        key: &str,
        value: impl Into<Value>,
        ttl: TtlType,
    ) -> ClientResult<CasOutcome> {
        self.check_key(key, 0)?;
        let token = self.cas_cache.lock().get(key).copied();
        match self.stash.cas(key, value, ttl, token) {
            Ok(_) => Ok(CasOutcome::Stored),
            Err(CacheError::KeyExists) => Ok(CasOutcome::Stale),
            Err(err) => Err(err.into()),
        }
    }

    pub fn get(&self, key: &str) -> ClientResult<Option<Value>> {
        self.check_key(key, 0)?;
        Ok(self.fetch(key))
    }

    pub fn gets(&self, key: &str) -> ClientResult<Option<Value>> {
        self.get(key)
    }

    /// Looks up several keys; the result is keyed without the prefix and
    /// leaves out keys that are missing.
    pub fn get_multi<I, S>(&self, keys: I, key_prefix: &str) -> ClientResult<HashMap<String, Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = HashMap::new();
        for key in keys {
            let key = key.as_ref();
            let full_key = format!("{}{}", key_prefix, key);
            self.check_key(&full_key, 0)?;
            if let Some(value) = self.fetch(&full_key) {
                results.insert(key.to_owned(), value);
            }
        }
        Ok(results)
    }

    /// Stores several values and returns the keys (without prefix) that
    /// could not be stored.
    pub fn set_multi<I, K, V>(&self, mapping: I, ttl: TtlType, key_prefix: &str) -> Vec<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut failures = Vec::new();
        for (key, value) in mapping {
            let key = key.as_ref();
            let full_key = format!("{}{}", key_prefix, key);
            match self.set(&full_key, value, ttl) {
                Ok(true) => {}
                Ok(false) => failures.push(key.to_owned()),
                Err(err) => {
                    self.debuglog(&format!("set_multi skipped {}: {}", full_key, err));
                    failures.push(key.to_owned());
                }
            }
        }
        failures
    }

    pub fn delete(&self, key: &str) -> ClientResult<bool> {
        self.check_key(key, 0)?;
        Ok(self.stash.delete(key))
    }

    pub fn delete_multi<I, S>(&self, keys: I, key_prefix: &str) -> ClientResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.delete(&format!("{}{}", key_prefix, key.as_ref()))?;
        }
        Ok(())
    }

    /// Returns the new value, or None if there was nothing to increment
    pub fn incr(&self, key: &str, delta: i64) -> ClientResult<Option<i64>> {
        self.check_key(key, 0)?;
        counter(self.stash.increment(key, delta).map(|result| result.value))
    }

    pub fn decr(&self, key: &str, delta: i64) -> ClientResult<Option<i64>> {
        self.check_key(key, 0)?;
        counter(self.stash.decrement(key, delta).map(|result| result.value))
    }

    /// Removes every value from the stash, including values without expiration
    pub fn flush_all(&self) {
        self.debuglog("flush_all");
        self.stash.flush();
    }

    pub fn reset_cas(&self) {
        self.cas_cache.lock().clear();
    }

    pub fn debuglog(&self, message: &str) {
        if self.config.debug {
            debug!("stash client: {}", message);
        }
    }

    fn fetch(&self, key: &str) -> Option<Value> {
        let item = self.stash.get(key)?;
        if self.config.cache_cas {
            self.cas_cache.lock().insert(key.to_owned(), item.cas);
        }
        Some(item.value)
    }

    // Misses and conflicts read as "not stored", type errors reach the caller.
    fn stored(&self, key: &str, result: CacheResult<SetStatus>) -> ClientResult<bool> {
        match result {
            Ok(_) => Ok(true),
            Err(err) => {
                self.debuglog(&format!("{} not stored: {} ({:#04x})", key, err, err.code()));
                if err.is_miss() || err == CacheError::KeyExists {
                    Ok(false)
                } else {
                    Err(ClientError::Cache(err))
                }
            }
        }
    }

    fn fits(&self, key: &str, value: &Value) -> bool {
        let max = self.config.max_value_length();
        let fits = max == 0 || (value.encoded_len() as u64) <= max;
        if !fits {
            self.debuglog(&format!("value for {} is larger than {} bytes", key, max));
        }
        fits
    }
}

fn counter(result: CacheResult<i64>) -> ClientResult<Option<i64>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(CacheError::NotFound) => Ok(None),
        Err(err) => Err(ClientError::Cache(err)),
    }
}
