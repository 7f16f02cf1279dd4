//! Document-level scroll locking while a fullscreen viewer is open.

/// Host capability that freezes page scrolling behind an overlay.
///
/// `lock` and `unlock` are always called in pairs by the engines; a host
/// that nests overlays is responsible for its own reference counting.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Scroll lock for hosts without a scrollable document.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScrollLock;

impl ScrollLock for NoopScrollLock {
    fn lock(&self) {}
    fn unlock(&self) {}
}

impl<T: ScrollLock + ?Sized> ScrollLock for std::rc::Rc<T> {
    fn lock(&self) {
        (**self).lock()
    }

    fn unlock(&self) {
        (**self).unlock()
    }
}
