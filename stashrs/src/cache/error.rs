use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("Not found")]
    NotFound = 0x01,
    #[error("Key exists")]
    KeyExists = 0x02,
    #[error("Item not stored")]
    ItemNotStored = 0x05,
    #[error("Incr/Decr/Append on non numeric value")]
    ArithOnNonNumeric = 0x06,
}

impl CacheError {
    pub fn to_static_string(&self) -> &'static str {
        static NOT_FOUND: &str = "Not found";
        static KEY_EXISTS: &str = "Key exists";

        match self {
            CacheError::NotFound => NOT_FOUND,
            CacheError::KeyExists => KEY_EXISTS,
            CacheError::ItemNotStored => "Item not stored",
            CacheError::ArithOnNonNumeric => "Incr/Decr/Append on non numeric value",
        }
    }

    /// Outcomes where nothing was changed and nothing went wrong:
    /// a missing key or an append target that cannot be extended.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::NotFound | CacheError::ItemNotStored)
    }

    pub fn code(&self) -> u16 {
        *self as u16
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
