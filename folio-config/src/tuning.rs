//! Runtime tuning for engine behavior.
//!
//! Fields deserialize with compiled defaults from [`crate::constants`], so a
//! settings file only needs to name the values it changes.

use folio_model::Breakpoints;
use serde::{Deserialize, Serialize};

use crate::constants::{autoplay, gesture, lazy, render, zoom};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GestureTuning {
    pub swipe_threshold_px: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            swipe_threshold_px: gesture::SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AutoplayTuning {
    pub resume_delay_ms: u64,
}

impl Default for AutoplayTuning {
    fn default() -> Self {
        Self {
            resume_delay_ms: autoplay::RESUME_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LazyLoadTuning {
    pub intersection_threshold: f32,
    pub root_margin_px: f32,
    pub initial_lookahead: usize,
}

impl Default for LazyLoadTuning {
    fn default() -> Self {
        Self {
            intersection_threshold: lazy::INTERSECTION_THRESHOLD,
            root_margin_px: lazy::ROOT_MARGIN_PX,
            initial_lookahead: lazy::INITIAL_LOOKAHEAD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ZoomTuning {
    pub min_factor: f32,
    pub max_factor: f32,
    pub wheel_step: f32,
    pub double_click_factor: f32,
}

impl Default for ZoomTuning {
    fn default() -> Self {
        Self {
            min_factor: zoom::MIN_FACTOR,
            max_factor: zoom::MAX_FACTOR,
            wheel_step: zoom::WHEEL_STEP,
            double_click_factor: zoom::DOUBLE_CLICK_FACTOR,
        }
    }
}

impl ZoomTuning {
    pub fn clamp(&self, factor: f32) -> f32 {
        factor.clamp(self.min_factor, self.max_factor)
    }
}

/// Width and height of a render box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoxSize {
    pub width: u32,
    pub height: u32,
}

impl BoxSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSizes {
    pub slide: BoxSize,
    pub thumbnail: BoxSize,
    pub lightbox: BoxSize,
}

impl Default for RenderSizes {
    fn default() -> Self {
        Self {
            slide: BoxSize::new(render::SLIDE_WIDTH, render::SLIDE_HEIGHT),
            thumbnail: BoxSize::new(
                render::THUMBNAIL_WIDTH,
                render::THUMBNAIL_HEIGHT,
            ),
            lightbox: BoxSize::new(
                render::LIGHTBOX_WIDTH,
                render::LIGHTBOX_HEIGHT,
            ),
        }
    }
}

/// All engine tunables in one place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineTuning {
    pub gesture: GestureTuning,
    pub autoplay: AutoplayTuning,
    pub lazy: LazyLoadTuning,
    pub zoom: ZoomTuning,
    pub render: RenderSizes,
    pub breakpoints: Breakpoints,
}

impl EngineTuning {
    /// Reject tunings that cannot be clamped into something meaningful.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(self.zoom.min_factor > 0.0
            && self.zoom.min_factor <= self.zoom.max_factor)
        {
            return Err(ConfigError::ZoomRange {
                min: self.zoom.min_factor,
                max: self.zoom.max_factor,
            });
        }
        for (name, size) in [
            ("slide", self.render.slide),
            ("thumbnail", self.render.thumbnail),
            ("lightbox", self.render.lightbox),
        ] {
            if size.width == 0 || size.height == 0 {
                return Err(ConfigError::ZeroRenderBox(name));
            }
        }
        if self.breakpoints.medium_min > self.breakpoints.large_min {
            return Err(ConfigError::Breakpoints {
                medium_min: self.breakpoints.medium_min,
                large_min: self.breakpoints.large_min,
            });
        }
        Ok(())
    }
}
