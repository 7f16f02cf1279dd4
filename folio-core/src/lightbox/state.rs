use std::sync::Arc;

use folio_config::EngineTuning;
use folio_model::{ElementId, SlideImage, Vector};

use super::focus::{FocusTrap, LightboxControl};
use super::zoom::ZoomPan;

/// Load progress of the open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxPhase {
    #[default]
    Closed,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone)]
pub struct LightboxContext {
    images: Arc<[SlideImage]>,
    tuning: EngineTuning,
}

impl LightboxContext {
    pub fn new(
        images: impl Into<Arc<[SlideImage]>>,
        tuning: EngineTuning,
    ) -> Self {
        Self {
            images: images.into(),
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

    pub fn tuning(&self) -> &EngineTuning {
        &self.tuning
    }
}

/// Snapshot of the fullscreen viewer. The lightbox never loops.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxState {
    pub(super) phase: LightboxPhase,
    pub(super) active_index: usize,
    pub(super) len: usize,
    pub(super) zoom: ZoomPan,
    pub(super) focus: FocusTrap,
    pub(super) return_focus: Option<ElementId>,
}

impl LightboxState {
    pub fn closed(ctx: &LightboxContext) -> Self {
        Self {
            phase: LightboxPhase::Closed,
            active_index: 0,
            len: ctx.len(),
            zoom: ZoomPan::new(ctx.tuning().zoom),
            focus: FocusTrap::new(),
            return_focus: None,
        }
    }

    pub fn phase(&self) -> LightboxPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != LightboxPhase::Closed
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LightboxPhase::Loading
    }

    pub fn has_error(&self) -> bool {
        self.phase == LightboxPhase::Errored
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom.factor()
    }

    pub fn pan_offset(&self) -> Vector {
        self.zoom.pan()
    }

    pub fn is_dragging(&self) -> bool {
        self.zoom.is_dragging()
    }

    pub fn can_go_previous(&self) -> bool {
        self.is_open() && self.active_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.is_open() && self.active_index + 1 < self.len
    }

    pub fn focused_control(&self) -> Option<LightboxControl> {
        self.focus.focused()
    }

    pub fn focusable_controls(&self) -> &[LightboxControl] {
        self.focus.controls()
    }

    pub fn return_focus(&self) -> Option<&ElementId> {
        self.return_focus.as_ref()
    }
}
