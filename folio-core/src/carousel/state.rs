//! Carousel snapshot and the immutable context it is evaluated against.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use folio_config::EngineTuning;
use folio_config::constants::autoplay::FALLBACK_INTERVAL_MS;
use folio_model::{CarouselConfig, SlideImage, ViewportClass};

use super::minimize::MinimizeState;
use super::responsive::Layout;
use crate::autoplay::{AutoplayPhase, AutoplayScheduler};
use crate::gesture::GestureRecognizer;
use crate::lazy_load::{LazyLoadTracker, LoadPhase, ObserverState};

/// Everything that stays fixed for the lifetime of one carousel.
#[derive(Debug, Clone)]
pub struct CarouselContext {
    images: Arc<[SlideImage]>,
    config: CarouselConfig,
    tuning: EngineTuning,
}

impl CarouselContext {
    pub fn new(
        images: impl Into<Arc<[SlideImage]>>,
        config: CarouselConfig,
        tuning: EngineTuning,
    ) -> Self {
        Self {
            images: images.into(),
            config,
            tuning,
        }
    }

    pub fn images(&self) -> &Arc<[SlideImage]> {
        &self.images
    }

    pub fn image(&self, index: usize) -> Option<&SlideImage> {
        self.images.get(index)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn tuning(&self) -> &EngineTuning {
        &self.tuning
    }

    pub fn layout(&self, class: ViewportClass) -> Layout {
        Layout::resolve(&self.config, class, self.len())
    }

    /// Autoplay period with a zero interval replaced by the fallback.
    pub fn autoplay_interval(&self) -> Duration {
        match self.config.autoplay_interval_ms {
            0 => Duration::from_millis(FALLBACK_INTERVAL_MS),
            ms => Duration::from_millis(ms),
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.config.transition_duration_ms)
    }
}

/// Snapshot of one carousel. Produced only by [`super::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub(super) current_index: usize,
    pub(super) is_transitioning: bool,
    pub(super) viewport: ViewportClass,
    pub(super) layout: Layout,
    pub(super) minimize: MinimizeState,
    pub(super) autoplay: AutoplayScheduler,
    pub(super) gesture: GestureRecognizer,
    pub(super) lazy: LazyLoadTracker,
    pub(super) announcement: Option<String>,
}

impl CarouselState {
    /// State at mount, before the start event. Laid out for the default
    /// viewport class until the host reports its width; slides a wider
    /// layout reveals become eligible then.
    pub fn initial(ctx: &CarouselContext) -> Self {
        let viewport = ViewportClass::default();
        let layout = ctx.layout(viewport);
        let tuning = ctx.tuning();
        Self {
            current_index: 0,
            is_transitioning: false,
            viewport,
            layout,
            minimize: MinimizeState::Expanded,
            autoplay: AutoplayScheduler::new(
                ctx.config().autoplay && layout.can_navigate(),
                ctx.autoplay_interval(),
                Duration::from_millis(tuning.autoplay.resume_delay_ms),
            ),
            gesture: GestureRecognizer::new(
                ctx.config().orientation,
                tuning.gesture.swipe_threshold_px,
            ),
            lazy: LazyLoadTracker::new(ctx.len(), layout.items, tuning.lazy),
            announcement: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn effective_items_to_show(&self) -> usize {
        self.layout.items
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn total_slides(&self) -> usize {
        self.layout.total_slides()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.layout.visible_indices(self.current_index)
    }

    pub fn can_go_next(&self) -> bool {
        self.accepts_navigation()
            && self.layout.next_index(self.current_index).is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        self.accepts_navigation()
            && self.layout.previous_index(self.current_index).is_some()
    }

    /// Navigation input is ignored while minimized, mid-transition, or with
    /// fewer than two images.
    pub fn accepts_navigation(&self) -> bool {
        !self.minimize.is_minimized()
            && !self.is_transitioning
            && self.layout.can_navigate()
    }

    pub fn is_minimized(&self) -> bool {
        self.minimize.is_minimized()
    }

    pub fn saved_index_before_minimize(&self) -> Option<usize> {
        self.minimize.saved_index()
    }

    pub fn autoplay_phase(&self) -> AutoplayPhase {
        self.autoplay.phase()
    }

    pub fn observer(&self) -> ObserverState {
        self.lazy.observer()
    }

    pub fn load_phase(&self, index: usize) -> LoadPhase {
        self.lazy.phase(index)
    }

    pub fn is_eligible(&self, index: usize) -> bool {
        self.lazy.is_eligible(index)
    }

    pub fn eligible_indices(&self) -> &BTreeSet<usize> {
        self.lazy.eligible()
    }

    pub fn loaded_indices(&self) -> BTreeSet<usize> {
        self.lazy.loaded_indices()
    }

    pub fn loading_indices(&self) -> BTreeSet<usize> {
        self.lazy.loading_indices()
    }

    pub fn error_indices(&self) -> BTreeSet<usize> {
        self.lazy.error_indices()
    }

    /// Last announcement produced by a navigation.
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }
}
