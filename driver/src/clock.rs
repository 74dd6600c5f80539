use kernel::interface::clock::Clock;
use time::{OffsetDateTime, UtcOffset};

use crate::config::DriverConfig;

/// Wall clock shifted to the offset that decides which calendar day it is.
#[derive(Debug, Clone)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(*config.utc_offset())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(UtcOffset::UTC)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}
