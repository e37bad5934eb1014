use super::error::Result;
use super::value::Value;
use std::fmt;

/// Cache key type
pub type KeyType = String;

/// Expiration parameter in seconds: 0 never expires, values above
/// [`MAX_RELATIVE_TTL`] are absolute Unix timestamps, anything else is
/// relative to now.
pub type TtlType = u64;

/// Largest ttl still read as a number of seconds from now (30 days).
pub const MAX_RELATIVE_TTL: TtlType = 60 * 60 * 24 * 30;

/// Version stamp of a record, replaced on every successful mutation.
/// Only meaningful when compared with the token of the same key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CasToken(u128);

impl CasToken {
    pub(crate) fn random() -> CasToken {
        CasToken(rand::random::<u128>())
    }

    pub fn from_u128(value: u128) -> CasToken {
        CasToken(value)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }
}

impl fmt::Debug for CasToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CasToken({:032x})", self.0)
    }
}

impl fmt::Display for CasToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Value and meta data stored in cache.
/// `expires` is an absolute time in milliseconds since the Unix epoch.
#[derive(Clone, Debug)]
pub struct Record<S> {
    pub(crate) value: S,
    pub(crate) expires: Option<u64>,
    pub(crate) cas: CasToken,
}

impl<S> Record<S> {
    pub fn new(value: S, expires: Option<u64>, cas: CasToken) -> Record<S> {
        Record {
            value,
            expires,
            cas,
        }
    }
}

/// Decoded copy of a record handed out to callers
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub value: Value,
    pub cas: CasToken,
}

/// Result of a successful store operation,
/// cas is the token now attached to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStatus {
    pub cas: CasToken,
}

pub type DeltaResultValueType = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaResult {
    pub cas: CasToken,
    pub value: DeltaResultValueType,
}

// An abstraction over an expiring key <=> value store
pub trait Cache {
    /// Returns a copy of the value associated with a key.
    /// An expired record is removed and reported as missing.
    fn get(&self, key: &str) -> Option<Item>;

    /// Stores a value unconditionally, replacing any existing record.
    fn set(&self, key: KeyType, value: Value, ttl: TtlType) -> SetStatus;

    /// Stores a value only if the key does not exist yet.
    /// If the key exists, the operation fails with KeyExists error.
    fn add(&self, key: KeyType, value: Value, ttl: TtlType) -> Result<SetStatus>;

    /// Replaces the value of an existing key.
    /// If the key does not exist, the operation fails with NotFound error.
    fn update(&self, key: &str, value: Value, ttl: TtlType) -> Result<SetStatus>;

    /// Stores a value if `token` still matches the token of the key.
    ///
    /// - a missing key or a `None` token behaves like `set`
    /// - a token that does not match fails with KeyExists error
    fn cas(
        &self,
        key: KeyType,
        value: Value,
        ttl: TtlType,
        token: Option<CasToken>,
    ) -> Result<SetStatus>;

    /// Appends the operand to the existing value for the given key.
    /// The key must already exist in the cache, otherwise the operation fails with NotFound error.
    /// A ttl of 0 keeps the current expiration.
    fn append(&self, key: &str, operand: Value, ttl: TtlType) -> Result<SetStatus>;

    /// Prepends the operand to the existing value for the given key.
    /// The key must already exist in the cache, otherwise the operation fails with NotFound error.
    /// A ttl of 0 keeps the current expiration.
    fn prepend(&self, key: &str, operand: Value, ttl: TtlType) -> Result<SetStatus>;

    /// Adds `delta` to a numeric value, keeping the current expiration.
    /// Missing or empty values fail with NotFound, values that are not
    /// integers fail with ArithOnNonNumeric.
    fn incr_decr(&self, key: &str, delta: i64) -> Result<DeltaResult>;

    /// Removes a key, returns true if a live record was removed
    fn delete(&self, key: &str) -> bool;

    /// Removes all values from a store
    fn flush(&self);

    /// Number of records, including expired records nobody touched yet
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the stored keys
    fn keys(&self) -> Vec<KeyType>;
}
