//! Fullscreen lightbox viewer.
//!
//! Same split as the carousel: a snapshot, a pure transition function, and
//! a runtime ([`LightboxViewer`]) that owns the renderer and the scroll
//! lock.

pub mod focus;
pub mod messages;
pub mod scroll_guard;
pub mod state;
pub mod update;
pub mod viewer;
pub mod zoom;

pub use focus::{FocusTrap, LightboxControl};
pub use messages::{LightboxCommand, LightboxEvent};
pub use scroll_guard::ScrollLockGuard;
pub use state::{LightboxContext, LightboxPhase, LightboxState};
pub use update::{LightboxStep, update};
pub use viewer::LightboxViewer;
pub use zoom::ZoomPan;
