//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod slide;
pub mod viewport;

// Intentionally curated re-exports for downstream consumers.
pub use config::{
    CarouselConfig, MinimizeControl, Orientation, ResponsiveItemCounts,
    TransitionKind,
};
pub use error::{ModelError, Result as ModelResult};
pub use geometry::{Point, Rect, Vector};
pub use input::{ElementId, Key, KeyPress, Modifiers, NavigationSource};
pub use slide::{ImageSource, SlideImage};
pub use viewport::{Breakpoints, ViewportClass};
