use std::sync::{Arc, Mutex};

type Cleanup = Box<dyn FnOnce() + Send + Sync>;

/// Once-only cleanup handle for a subscription (interval, event listener).
///
/// The cleanup runs on the first call to [`Disposer::dispose`], or when the
/// last clone is dropped if it was never disposed. Further calls are no-ops.
#[derive(Clone)]
pub struct Disposer {
    label: &'static str,
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl Disposer {
    pub fn new(label: &'static str, cleanup: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            label,
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        }
    }

    /// Returns true if this call ran the cleanup.
    pub fn dispose(&self) -> bool {
        let cleanup = match self.cleanup.lock() {
            Ok(mut guard) => guard.take(),
            // a panic inside a previous cleanup already consumed it
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match cleanup {
            Some(f) => {
                log::debug!("disposing {}", self.label);
                f();
                true
            }
            None => false,
        }
    }

    pub fn is_disposed(&self) -> bool {
        match self.cleanup.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("label", &self.label)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        if Arc::strong_count(&self.cleanup) == 1 {
            self.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(label: &'static str) -> (Disposer, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let disposer = Disposer::new(label, move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (disposer, count)
    }

    #[test]
    fn test_dispose_runs_once() {
        let (disposer, count) = counting("interval");
        assert!(!disposer.is_disposed());
        assert!(disposer.dispose());
        assert!(!disposer.dispose());
        assert!(disposer.is_disposed());
        drop(disposer);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_disposes() {
        let (disposer, count) = counting("listener");
        drop(disposer);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_cleanup() {
        let (disposer, count) = counting("shared");
        let other = disposer.clone();
        drop(disposer);
        // a live clone keeps the subscription alive
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(other.dispose());
        assert!(!other.dispose());
        drop(other);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
