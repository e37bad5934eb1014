use crate::cache::error::CacheError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Key is empty")]
    Empty,
    #[error("Key length is > {max}")]
    TooLong { length: usize, max: usize },
    #[error("Control characters not allowed")]
    ControlCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
