use serde_derive::{Deserialize, Serialize};

pub mod codec;
#[allow(clippy::module_inception)]
pub mod memory_store;
pub mod shared_store_state;

#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreEngine {
    /// values kept with their original type
    #[default]
    Typed,
    /// values kept as bytes and parsed on every read
    Serialized,
}

impl StoreEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreEngine::Typed => "Typed backend",
            StoreEngine::Serialized => "Serialized backend",
        }
    }
}
