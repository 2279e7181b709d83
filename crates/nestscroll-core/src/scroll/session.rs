//! L4 Atomic Layer: Scroll sessions
//!
//! A session is the shared cancellation handle for one scroll request.
//! Every task dispatched by the request holds a clone; aborting any clone
//! aborts them all.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::options::ScrollOptions;

#[derive(Debug, Clone)]
pub struct ScrollSession {
    id: u64,
    aborted: Arc<AtomicBool>,
    options: Arc<ScrollOptions>,
}

impl ScrollSession {
    pub fn new(id: u64, options: ScrollOptions) -> Self {
        Self {
            id,
            aborted: Arc::new(AtomicBool::new(false)),
            options: Arc::new(options),
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Options this session was started with
    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Flag the session; pending work stops at its next check
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_is_shared_between_clones() {
        let session = ScrollSession::new(1, ScrollOptions::default());
        let captured = session.clone();
        assert!(!captured.is_aborted());

        session.abort();
        assert!(captured.is_aborted());
        assert_eq!(captured.id(), 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let first = ScrollSession::new(1, ScrollOptions::default());
        let second = ScrollSession::new(2, ScrollOptions::default());
        first.abort();
        assert!(!second.is_aborted());
    }
}
