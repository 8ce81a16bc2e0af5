use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::{EngineError, EngineResult};

/// Shared flag used to abort an evaluation from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
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

/// Limits checked by the match iterator before every search attempt.
#[derive(Debug, Clone, Default)]
pub struct MatchGuard {
    budget: Option<(Duration, Instant)>,
    cancel: Option<CancelToken>,
}

impl MatchGuard {
    /// A guard that never trips.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Starts the budget clock now.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = Some((budget, Instant::now() + budget));
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn check(&self) -> EngineResult<()> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(EngineError::Cancelled);
        }

        if let Some((budget, deadline)) = self.budget
            && Instant::now() >= deadline
        {
            return Err(EngineError::MatchTimeout { budget });
        }

        Ok(())
    }
}
