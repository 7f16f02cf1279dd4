//! Shared configuration library for Folio.
//!
//! This crate centralizes the compiled defaults for every engine, the
//! settings loader (env then file then defaults), and the soft validation
//! rules that explain how a configuration will be clamped.

pub mod constants;
pub mod error;
pub mod settings;
pub mod tuning;
pub mod validation;

pub use error::ConfigError;
pub use settings::{CarouselSettings, SettingsSource};
pub use tuning::{
    AutoplayTuning, BoxSize, EngineTuning, GestureTuning, LazyLoadTuning,
    RenderSizes, ZoomTuning,
};
pub use validation::{ConfigWarning, ConfigWarnings, validate};
