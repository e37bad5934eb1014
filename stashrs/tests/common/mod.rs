#![allow(dead_code)]
use rand::distr::Alphanumeric;
use rand::Rng;
use stashrs::client::client::Client;
use stashrs::memory_store::StoreEngine;
use stashrs::stash::builder::{StashBuilder, StashConfig};
use stashrs::stash::store::Stash;
use std::time::{SystemTime, UNIX_EPOCH};

pub const ENGINES: [StoreEngine; 2] = [StoreEngine::Typed, StoreEngine::Serialized];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn create_stash(engine: StoreEngine) -> Stash {
    init_logger();
    StashBuilder::build(&StashConfig::new(engine))
}

pub fn create_client(engine: StoreEngine) -> Client {
    Client::new(create_stash(engine))
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub struct KeyValue {
    pub key: String,
    pub value: String,
}

pub fn generate_random_with_max_size(
    count: usize,
    key_max_size: usize,
    value_max_size: usize,
) -> Vec<KeyValue> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| KeyValue {
            key: random_string(rng.random_range(1..=key_max_size)),
            value: random_string(rng.random_range(1..=value_max_size)),
        })
        .collect()
}
