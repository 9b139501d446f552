use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration for a [`CandidateRanker`](crate::CandidateRanker)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankerConfig {
    /// Score columns concurrently on the rayon pool and sort cells in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

impl RankerConfig {
    pub fn sequential() -> Self {
        Self { parallel: false }
    }
}

/// Cooperative cancellation, checked before each column is scored
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
