//! Frequently used engine types.

pub use crate::autoplay::AutoplayPhase;
pub use crate::carousel::{
    CarouselEngine, CarouselEvent, CarouselState, CarouselView, Display,
    Fallback,
};
pub use crate::error::CoreError;
pub use crate::gallery::Gallery;
pub use crate::lazy_load::LoadPhase;
pub use crate::lightbox::{
    LightboxControl, LightboxEvent, LightboxPhase, LightboxViewer,
};
pub use crate::notification::Notification;
pub use crate::render::{CdnRenderer, MemoryRenderer, Outcome, PlainUrlRenderer};
pub use crate::time::{Clock, ManualClock, SystemClock};
#[cfg(feature = "driver")]
pub use crate::time::TokioClock;

pub use folio_config::{CarouselSettings, EngineTuning};
pub use folio_contracts::prelude::*;
pub use folio_model::prelude::*;
