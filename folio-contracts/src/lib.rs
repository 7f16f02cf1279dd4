//! Trait surfaces that describe how the Folio engines talk to their host.
//!
//! The engines never touch pixels, URLs, or the document directly. Everything
//! that leaves the state machines goes through one of these capabilities so
//! that a browser binding, a native toolkit, and a test harness can all plug
//! in their own implementation.

pub mod render;
pub mod scroll_lock;

/// Frequently used contract types.
pub mod prelude {
    pub use super::render::{
        Completion, CropMode, ImageRenderer, LoadStatus, RenderError,
        RenderKey, RenderRequest, Rendered, Surface,
    };
    pub use super::scroll_lock::{NoopScrollLock, ScrollLock};
}
