//! Compiled defaults for engine behavior.
//!
//! Every value here can be overridden through [`crate::EngineTuning`]; tuning
//! should start here so all carousels stay consistent.

/// Touch swipe recognition.
pub mod gesture {
    /// Minimum travel along the carousel axis (px) for a touch to count as a
    /// swipe. Travel of exactly this distance does nothing.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
}

/// Autoplay cadence.
pub mod autoplay {
    /// Quiet period after a user interaction before autoplay resumes (ms).
    pub const RESUME_DELAY_MS: u64 = 2_000;
    /// Interval used when the configured one is zero (ms).
    pub const FALLBACK_INTERVAL_MS: u64 = 5_000;
}

/// Viewport intersection driven lazy loading.
pub mod lazy {
    /// Fraction of a slide that must intersect the viewport.
    pub const INTERSECTION_THRESHOLD: f32 = 0.1;
    /// Look-ahead margin added around the carousel viewport (px).
    pub const ROOT_MARGIN_PX: f32 = 50.0;
    /// Indices eligible on mount beyond the visible items.
    pub const INITIAL_LOOKAHEAD: usize = 1;
}

/// Lightbox zoom and pan.
pub mod zoom {
    pub const MIN_FACTOR: f32 = 1.0;
    pub const MAX_FACTOR: f32 = 5.0;
    /// Zoom change per wheel tick.
    pub const WHEEL_STEP: f32 = 0.1;
    /// Zoom applied by a double click on an unzoomed image.
    pub const DOUBLE_CLICK_FACTOR: f32 = 2.0;
}

/// Render box sizes requested from the image renderer.
pub mod render {
    pub const SLIDE_WIDTH: u32 = 1200;
    pub const SLIDE_HEIGHT: u32 = 800;
    pub const THUMBNAIL_WIDTH: u32 = 400;
    pub const THUMBNAIL_HEIGHT: u32 = 300;
    pub const LIGHTBOX_WIDTH: u32 = 2400;
    pub const LIGHTBOX_HEIGHT: u32 = 1600;
}
