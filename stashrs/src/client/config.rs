use super::key::SERVER_MAX_KEY_LENGTH;
use byte_unit::Byte;
use serde_derive::{Deserialize, Serialize};

pub const SERVER_MAX_VALUE_LENGTH: u64 = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 0 disables the key length check
    pub server_max_key_length: usize,
    /// 0 disables the value size check
    pub server_max_value_length: Byte,
    pub check_keys: bool,
    /// remember tokens seen by get so that cas can use them
    pub cache_cas: bool,
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_max_key_length: SERVER_MAX_KEY_LENGTH,
            server_max_value_length: Byte::from_u64(SERVER_MAX_VALUE_LENGTH),
            check_keys: true,
            cache_cas: false,
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn with_cache_cas(mut self, cache_cas: bool) -> Self {
        self.cache_cas = cache_cas;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn max_value_length(&self) -> u64 {
        self.server_max_value_length.as_u64()
    }
}
