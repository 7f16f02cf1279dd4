use folio_contracts::scroll_lock::ScrollLock;

/// Holds the document scroll lock; unlocks on drop.
#[derive(Debug)]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        tracing::trace!(target: "folio::lightbox", "scroll locked");
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
        tracing::trace!(target: "folio::lightbox", "scroll unlocked");
    }
}
