//! What to do when another process is compiling

use std::time::Duration;

pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Sleep `retry_interval` after each lock timeout and try again
    Block { retry_interval: Duration },
    /// Serve raw sources for this request
    Bail,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        WaitPolicy::Block {
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

impl WaitPolicy {
    /// Policy for `compression.block_during_compression`
    pub fn from_blocking(block: bool, retry_interval: Duration) -> Self {
        if block {
            WaitPolicy::Block { retry_interval }
        } else {
            WaitPolicy::Bail
        }
    }
}
