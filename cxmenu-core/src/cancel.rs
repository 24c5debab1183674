use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

/// Cancellation handle passed to loaders and actions.
///
/// A child token reports cancelled when its own flag is set, when its
/// deadline has passed, or when any ancestor has been cancelled. Cancelling a
/// child never affects the parent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
    parent: Option<Arc<CancelToken>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        if self.flag.load(Ordering::Relaxed) {
            return true;
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return true;
        }
        self.parent.as_ref().is_some_and(|p| p.is_cancelled())
    }

    pub fn child(&self) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: None,
            parent: Some(Arc::new(self.clone())),
        }
    }

    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            ..self.child()
        }
    }

    /// Earliest deadline along the ancestor chain
    pub fn deadline(&self) -> Option<Instant> {
        let inherited = self.parent.as_ref().and_then(|p| p.deadline());
        match (self.deadline, inherited) {
            (Some(own), Some(parent)) => Some(own.min(parent)),
            (own, parent) => own.or(parent),
        }
    }

    /// Time left before the deadline, `None` when unbounded
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline()
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Whether the deadline (not an explicit cancel) is what ended this token
    pub fn is_timed_out(&self) -> bool {
        self.deadline().is_some_and(|d| Instant::now() >= d)
    }
}
