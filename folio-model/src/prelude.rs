//! Frequently used model types for engine and UI crates.

pub use crate::config::{
    CarouselConfig, MinimizeControl, Orientation, ResponsiveItemCounts,
    TransitionKind,
};
pub use crate::geometry::{Point, Rect, Vector};
pub use crate::input::{ElementId, Key, KeyPress, Modifiers, NavigationSource};
pub use crate::slide::{ImageSource, SlideImage};
pub use crate::viewport::{Breakpoints, ViewportClass};
