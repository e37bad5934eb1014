use crate::cache::cache::{CasToken, Record, TtlType, MAX_RELATIVE_TTL};
use crate::timer::Timer;
use std::sync::Arc;

const MILLIS_PER_SECOND: u64 = 1_000;

/// Clock and CAS bookkeeping shared by the store engines
pub struct SharedStoreState {
    timer: Arc<dyn Timer + Send + Sync>,
}

impl SharedStoreState {
    pub fn new(timer: Arc<dyn Timer + Send + Sync>) -> SharedStoreState {
        SharedStoreState { timer }
    }

    pub fn timestamp(&self) -> u64 {
        self.timer.timestamp()
    }

    /// Absolute expiration for a memcached style ttl
    pub fn expires(&self, ttl: TtlType) -> Option<u64> {
        match ttl {
            0 => None,
            ttl if ttl > MAX_RELATIVE_TTL => Some(ttl.saturating_mul(MILLIS_PER_SECOND)),
            ttl => Some(
                self.timestamp()
                    .saturating_add(ttl.saturating_mul(MILLIS_PER_SECOND)),
            ),
        }
    }

    /// Generates a token that differs from the one it replaces
    pub fn next_cas(&self, previous: Option<CasToken>) -> CasToken {
        loop {
            let cas = CasToken::random();
            if Some(cas) != previous {
                return cas;
            }
        }
    }

    pub fn check_if_expired<S>(&self, record: &Record<S>) -> bool {
        match record.expires {
            None => false,
            Some(expires) => expires <= self.timestamp(),
        }
    }
}
