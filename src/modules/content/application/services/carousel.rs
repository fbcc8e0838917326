//! Profile image rotation.
//!
//! A background task advances the display index modulo the image count every
//! `period`. The task is torn down and re-armed whenever the image list
//! changes size, and aborted when the rotor is dropped so no timer outlives
//! its page.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_secs(3);

pub struct CarouselRotor {
    index: AtomicUsize,
    period: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl CarouselRotor {
    pub fn new(period: Duration) -> Self {
        Self {
            index: AtomicUsize::new(0),
            period,
            task: Mutex::new(None),
        }
    }

    pub fn index(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }

    /// One timer tick: wrap around the current image count.
    fn advance(&self, count: usize) {
        if count == 0 {
            return;
        }
        let next = (self.index.load(Ordering::Relaxed) + 1) % count;
        self.index.store(next, Ordering::Relaxed);
    }

    /// Cancel any running timer and start over for `count` images.
    ///
    /// Rotation only runs with at least two images; the index is clamped so
    /// a shrunken list never leaves it out of range. Must be called from a
    /// tokio runtime when `count > 1`.
    pub fn restart(self: &std::sync::Arc<Self>, count: usize) {
        let mut task = self.task.lock();
        if let Some(handle) = task.take() {
            handle.abort();
        }

        if count == 0 {
            self.index.store(0, Ordering::Relaxed);
            return;
        }
        if self.index.load(Ordering::Relaxed) >= count {
            self.index.store(0, Ordering::Relaxed);
        }
        if count < 2 {
            return;
        }

        let rotor = std::sync::Arc::clone(self);
        let period = self.period;
        *task = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                rotor.advance(count);
            }
        }));
    }

    /// Teardown; idempotent.
    pub fn shutdown(&self) {
        if let Some(handle) = self.task.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for CarouselRotor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
