//! # Folio Core
//!
//! Headless interaction engines for an image carousel and its fullscreen
//! lightbox.
//!
//! ## Overview
//!
//! - **Carousel**: slide index, transition lock, responsive item count,
//!   minimize/restore, keyboard and swipe input ([`carousel`])
//! - **Autoplay**: repeating advance with a debounced quiet period after
//!   user interaction ([`autoplay`])
//! - **Lazy loading**: intersection-driven load eligibility with a thumbnail
//!   to full-resolution retry ([`lazy_load`])
//! - **Lightbox**: zoom, pan, focus trap and scroll lock ([`lightbox`])
//! - **Gallery**: keeps a carousel and a lightbox on the same index
//!   ([`gallery`])
//!
//! Engines are synchronous state machines. Each input goes through a pure
//! `update` function that returns the next snapshot plus commands; the
//! engine runtime executes those commands against its [`time::Clock`],
//! [`timers::TimerQueue`] and image renderer.
//!
//! ## Feature Flags
//!
//! - `driver` (default): tokio-based event loop in [`driver`]
//!
//! ## Example
//!
//! ```no_run
//! use folio_core::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let images = vec![
//!     SlideImage::new("harbor", "Boats at dusk")?.with_caption("Harbor"),
//!     SlideImage::new("ridge", "Snow on the ridge")?,
//! ];
//! let mut carousel = CarouselEngine::new(
//!     images,
//!     CarouselConfig::default().with_autoplay(4_000),
//!     PlainUrlRenderer::new(),
//!     SystemClock,
//! )?;
//! for notification in carousel.go_to_next() {
//!     println!("{notification:?}");
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod autoplay;
pub mod carousel;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod lazy_load;
pub mod lightbox;
pub mod notification;
pub mod render;
pub mod time;
pub mod timers;

#[cfg(feature = "driver")]
#[cfg_attr(docsrs, doc(cfg(feature = "driver")))]
pub mod driver;

pub mod prelude;

pub use error::{CoreError, Result};
pub use notification::Notification;
