//! Carousel engine.
//!
//! The structure separates the snapshot ([`state`]), the pure transition
//! function ([`update`]), the runtime that executes its commands
//! ([`engine`]), and the borrowed render snapshot ([`view`]).

pub mod engine;
pub mod messages;
pub mod minimize;
pub mod responsive;
pub mod state;
pub mod update;
pub mod view;

pub use engine::CarouselEngine;
pub use messages::{CarouselEvent, Command};
pub use minimize::MinimizeState;
pub use responsive::Layout;
pub use state::{CarouselContext, CarouselState};
pub use update::{Step, update};
pub use view::{CarouselView, Display, Dots, Fallback, NavButtons, SlideView};
