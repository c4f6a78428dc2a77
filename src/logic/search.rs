//! Opponent search timer. There is no pairing: the search simply ends after a fixed delay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Cancellable "searching for opponent" flag.
///
/// `start` spawns a task on the current tokio runtime that clears the flag after the given
/// duration. The task is aborted by `cancel`, by a new `start`, and when the timer is dropped.
#[derive(Debug, Default)]
pub struct SearchTimer {
    searching: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl SearchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_searching(&self) -> bool {
        self.searching.load(Ordering::SeqCst)
    }

    /// Begin a search lasting `duration`. Must be called from within a tokio runtime.
    pub fn start(&mut self, duration: Duration) {
        self.abort_task();
        let searching = Arc::new(AtomicBool::new(true));
        self.searching = Arc::clone(&searching);
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            searching.store(false, Ordering::SeqCst);
            log::debug!("Opponent search finished after {:?}", duration);
        }));
    }

    /// Stop a running search. No-op when idle.
    pub fn cancel(&mut self) {
        if self.is_searching() {
            log::debug!("Opponent search cancelled");
        }
        self.abort_task();
        self.searching.store(false, Ordering::SeqCst);
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for SearchTimer {
    fn drop(&mut self) {
        self.abort_task();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dropped_timer_never_clears_its_flag() {
        let mut timer = SearchTimer::new();
        timer.start(Duration::from_millis(20));
        let searching = Arc::clone(&timer.searching);
        drop(timer);
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(searching.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn live_timer_clears_its_flag() {
        let mut timer = SearchTimer::new();
        timer.start(Duration::from_millis(20));
        let searching = Arc::clone(&timer.searching);
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!searching.load(Ordering::SeqCst));
    }
}
