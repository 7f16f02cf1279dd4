use std::collections::VecDeque;
use std::sync::Arc;

use folio_config::EngineTuning;
use folio_contracts::render::{
    Completion, CropMode, ImageRenderer, LoadStatus, RenderKey, RenderRequest,
};
use folio_contracts::scroll_lock::ScrollLock;
use folio_model::{ElementId, ImageSource, KeyPress, SlideImage};

use super::messages::{LightboxCommand, LightboxEvent};
use super::scroll_guard::ScrollLockGuard;
use super::state::{LightboxContext, LightboxState};
use super::update::{LightboxStep, update};
use crate::error::{CoreError, Result};
use crate::notification::Notification;

/// Fullscreen viewer runtime.
///
/// Holds the scroll lock while open; the lock is released on close, before
/// a re-open, and when the viewer is dropped.
pub struct LightboxViewer<R: ImageRenderer, L: ScrollLock + Clone> {
    context: LightboxContext,
    state: LightboxState,
    renderer: R,
    scroll_lock: L,
    guard: Option<ScrollLockGuard<L>>,
    element: Option<R::Element>,
}

impl<R: ImageRenderer, L: ScrollLock + Clone> LightboxViewer<R, L> {
    pub fn new(
        images: impl Into<Arc<[SlideImage]>>,
        tuning: EngineTuning,
        renderer: R,
        scroll_lock: L,
    ) -> Self {
        let context = LightboxContext::new(images, tuning);
        let state = LightboxState::closed(&context);
        Self {
            context,
            state,
            renderer,
            scroll_lock,
            guard: None,
            element: None,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn context(&self) -> &LightboxContext {
        &self.context
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn holds_scroll_lock(&self) -> bool {
        self.guard.is_some()
    }

    /// Element for the active image, once rendered.
    pub fn element(&self) -> Option<&R::Element> {
        self.element.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn open(
        &mut self,
        index: usize,
        return_focus: Option<ElementId>,
    ) -> Result<Vec<Notification>> {
        let len = self.context.len();
        if len == 0 {
            return Err(CoreError::NoImages);
        }
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }
        Ok(self.dispatch(LightboxEvent::Open {
            index,
            return_focus,
        }))
    }

    pub fn close(&mut self) -> Vec<Notification> {
        self.dispatch(LightboxEvent::Close)
    }

    pub fn next(&mut self) -> Vec<Notification> {
        self.dispatch(LightboxEvent::Next)
    }

    pub fn previous(&mut self) -> Vec<Notification> {
        self.dispatch(LightboxEvent::Previous)
    }

    pub fn go_to(&mut self, index: usize) -> Vec<Notification> {
        self.dispatch(LightboxEvent::GoTo(index))
    }

    pub fn key(&mut self, press: KeyPress) -> Vec<Notification> {
        self.dispatch(LightboxEvent::Key(press))
    }

    pub fn retry(&mut self) -> Vec<Notification> {
        self.dispatch(LightboxEvent::Retry)
    }

    /// Follow an index change made elsewhere (the paired carousel).
    pub fn notify_index_changed(&mut self, index: usize) -> Vec<Notification> {
        self.dispatch(LightboxEvent::IndexSynced(index))
    }

    pub fn image_loaded(&mut self, index: usize) -> Vec<Notification> {
        self.dispatch(LightboxEvent::ImageLoaded(index))
    }

    pub fn image_failed(&mut self, index: usize) -> Vec<Notification> {
        self.dispatch(LightboxEvent::ImageFailed(index))
    }

    pub fn dispatch(&mut self, event: LightboxEvent) -> Vec<Notification> {
        let mut queue = VecDeque::from([event]);
        let mut notifications = Vec::new();
        while let Some(event) = queue.pop_front() {
            let LightboxStep { state, commands } =
                update(&self.state, &self.context, event);
            self.state = state;
            for command in commands {
                match command {
                    LightboxCommand::AcquireScrollLock => {
                        self.guard = None;
                        self.guard = Some(ScrollLockGuard::acquire(
                            self.scroll_lock.clone(),
                        ));
                    }
                    LightboxCommand::ReleaseScrollLock => {
                        self.guard = None;
                        self.element = None;
                    }
                    LightboxCommand::Render(index) => {
                        queue.extend(self.render(index));
                    }
                    LightboxCommand::Notify(notification) => {
                        notifications.push(notification)
                    }
                }
            }
        }
        notifications
    }

    fn render(&mut self, index: usize) -> Option<LightboxEvent> {
        let image = self.context.image(index)?;
        let size = self.context.tuning().render.lightbox;
        let request = RenderRequest {
            key: RenderKey::lightbox(index),
            image_identifier: image.identifier(ImageSource::Full).to_owned(),
            width: size.width,
            height: size.height,
            crop: CropMode::Fit,
        };
        match self.renderer.render(&request) {
            Ok(rendered) => {
                self.element = Some(rendered.element);
                match rendered.completion {
                    Completion::Pending => None,
                    Completion::Ready(LoadStatus::Loaded) => {
                        Some(LightboxEvent::ImageLoaded(index))
                    }
                    Completion::Ready(LoadStatus::Failed) => {
                        Some(LightboxEvent::ImageFailed(index))
                    }
                }
            }
            Err(err) => {
                tracing::warn!(
                    target: "folio::lightbox",
                    key = %request.key,
                    error = %err,
                    "renderer rejected request"
                );
                self.element = None;
                Some(LightboxEvent::ImageFailed(index))
            }
        }
    }
}

impl<R: ImageRenderer, L: ScrollLock + Clone> std::fmt::Debug
    for LightboxViewer<R, L>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightboxViewer")
            .field("state", &self.state)
            .field("scroll_locked", &self.guard.is_some())
            .finish()
    }
}
