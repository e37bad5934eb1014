//! In-process cache with the semantics of a memcached client and server
//! pair, for programs that want the memcached API without running a
//! memcached process.
//!
//! ```
//! use stashrs::client::client::Client;
//! use stashrs::stash::builder::{StashBuilder, StashConfig};
//!
//! let client = Client::new(StashBuilder::build(&StashConfig::default()));
//! assert_eq!(client.set("spam", "eggs", 300), Ok(true));
//! assert_eq!(client.get("spam").unwrap().unwrap().to_string(), "eggs");
//! ```

#[macro_use]
extern crate log;

pub mod cache;
pub mod client;
pub mod memory_store;
pub mod stash;
pub mod timer;

#[cfg(test)]
mod mock;
