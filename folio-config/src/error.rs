use thiserror::Error;

/// Tunings that are rejected outright instead of being clamped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("zoom range {min}..={max} is empty or non-positive")]
    ZoomRange { min: f32, max: f32 },

    #[error("render box `{0}` has a zero dimension")]
    ZeroRenderBox(&'static str),

    #[error(
        "medium breakpoint {medium_min} is above large breakpoint {large_min}"
    )]
    Breakpoints { medium_min: f32, large_min: f32 },
}
