use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time, in milliseconds since the Unix epoch
pub trait Timer {
    fn timestamp(&self) -> u64;
}

#[derive(Default)]
pub struct SystemTimer {}

impl SystemTimer {
    pub fn new() -> Self {
        debug!("Creating system timer");
        SystemTimer {}
    }
}

impl Timer for SystemTimer {
    fn timestamp(&self) -> u64 {
        // a clock set before 1970 reads as the epoch itself
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}
