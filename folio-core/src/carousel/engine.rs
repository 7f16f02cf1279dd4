//! Runtime that owns a carousel snapshot and executes its commands.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Instant;

use folio_config::{CarouselSettings, EngineTuning, validate};
use folio_contracts::render::{
    Completion, CropMode, ImageRenderer, LoadStatus, RenderKey, RenderRequest,
};
use folio_model::{CarouselConfig, ImageSource, NavigationSource, SlideImage};

use super::messages::{CarouselEvent, Command};
use super::state::{CarouselContext, CarouselState};
use super::update::{Step, update};
use super::view::{self, CarouselView};
use crate::autoplay::TimerCommand;
use crate::error::Result;
use crate::notification::Notification;
use crate::time::Clock;
use crate::timers::{TimerKind, TimerQueue};

/// A mounted carousel.
///
/// Every input goes through [`CarouselEngine::dispatch`]; timers fire when
/// the host calls [`CarouselEngine::advance`] at or after
/// [`CarouselEngine::next_deadline`]. Dropping the engine releases its
/// timers and disconnects the intersection observer. A torn down engine
/// ignores every further input.
pub struct CarouselEngine<R: ImageRenderer, C: Clock> {
    context: CarouselContext,
    state: CarouselState,
    timers: TimerQueue,
    renderer: R,
    clock: C,
    elements: HashMap<usize, R::Element>,
    torn_down: bool,
}

impl<R: ImageRenderer, C: Clock> CarouselEngine<R, C> {
    pub fn new(
        images: impl Into<Arc<[SlideImage]>>,
        config: CarouselConfig,
        renderer: R,
        clock: C,
    ) -> Result<Self> {
        Self::with_tuning(
            images,
            config,
            EngineTuning::default(),
            renderer,
            clock,
        )
    }

    pub fn from_settings(
        images: impl Into<Arc<[SlideImage]>>,
        settings: &CarouselSettings,
        renderer: R,
        clock: C,
    ) -> Result<Self> {
        Self::with_tuning(
            images,
            settings.carousel.clone(),
            settings.tuning,
            renderer,
            clock,
        )
    }

    pub fn with_tuning(
        images: impl Into<Arc<[SlideImage]>>,
        config: CarouselConfig,
        tuning: EngineTuning,
        renderer: R,
        clock: C,
    ) -> Result<Self> {
        tuning.check()?;
        let context = CarouselContext::new(images, config, tuning);
        validate(context.config(), context.len()).log();

        let state = CarouselState::initial(&context);
        let mut engine = Self {
            context,
            state,
            timers: TimerQueue::new(),
            renderer,
            clock,
            elements: HashMap::new(),
            torn_down: false,
        };
        tracing::debug!(
            target: "folio::carousel",
            images = engine.context.len(),
            items = engine.state.effective_items_to_show(),
            "carousel mounted"
        );
        engine.dispatch(CarouselEvent::Start);
        Ok(engine)
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn context(&self) -> &CarouselContext {
        &self.context
    }

    pub fn images(&self) -> &Arc<[SlideImage]> {
        self.context.images()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn element(&self, index: usize) -> Option<&R::Element> {
        self.elements.get(&index)
    }

    pub fn view(&self) -> CarouselView<'_, R::Element> {
        view::build(&self.context, &self.state, &self.elements)
    }

    pub fn is_timer_scheduled(&self, kind: TimerKind) -> bool {
        self.timers.is_scheduled(kind)
    }

    /// Earliest instant at which [`Self::advance`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Apply one input event at the clock's current time.
    pub fn dispatch(&mut self, event: CarouselEvent) -> Vec<Notification> {
        if self.torn_down {
            tracing::trace!(
                target: "folio::carousel",
                ?event,
                "ignoring event after teardown"
            );
            return Vec::new();
        }
        let now = self.clock.now();
        self.dispatch_at(now, event)
    }

    /// Fire every timer due by now, each at its own deadline.
    pub fn advance(&mut self) -> Vec<Notification> {
        if self.torn_down {
            return Vec::new();
        }
        let now = self.clock.now();
        let mut notifications = Vec::new();
        while let Some((kind, due)) = self.timers.pop_due(now) {
            tracing::trace!(target: "folio::carousel", ?kind, "timer fired");
            let fired = self.dispatch_at(due, CarouselEvent::Timer(kind));
            notifications.extend(fired);
        }
        notifications
    }

    fn dispatch_at(
        &mut self,
        now: Instant,
        event: CarouselEvent,
    ) -> Vec<Notification> {
        let mut queue = VecDeque::from([event]);
        let mut notifications = Vec::new();
        while let Some(event) = queue.pop_front() {
            let Step { state, commands } =
                update(&self.state, &self.context, event);
            self.state = state;
            for command in commands {
                match command {
                    Command::Timer(timer) => self.apply_timer(now, timer),
                    Command::Render { index, source } => {
                        queue.extend(self.render(index, source));
                    }
                    Command::Notify(notification) => {
                        notifications.push(notification)
                    }
                }
            }
        }
        notifications
    }

    fn apply_timer(&mut self, now: Instant, command: TimerCommand) {
        match command {
            TimerCommand::Cancel(kind) => {
                self.timers.cancel(kind);
            }
            TimerCommand::Once(kind, after) => {
                self.timers.schedule(kind, now, after);
            }
            TimerCommand::Repeating(kind, period) => {
                self.timers.schedule_repeating(kind, now, period);
            }
        }
    }

    /// Hand one attempt to the renderer. Synchronous completions come back
    /// as follow-up events.
    fn render(
        &mut self,
        index: usize,
        source: ImageSource,
    ) -> Option<CarouselEvent> {
        let image = self.context.image(index)?;
        let sizes = self.context.tuning().render;
        let size = match source {
            ImageSource::Thumbnail => sizes.thumbnail,
            ImageSource::Full => sizes.slide,
        };
        let request = RenderRequest {
            key: RenderKey::carousel(index, source),
            image_identifier: image.identifier(source).to_owned(),
            width: size.width,
            height: size.height,
            crop: CropMode::Fill,
        };

        match self.renderer.render(&request) {
            Ok(rendered) => {
                self.elements.insert(index, rendered.element);
                match rendered.completion {
                    Completion::Pending => None,
                    Completion::Ready(LoadStatus::Loaded) => {
                        Some(CarouselEvent::ImageLoaded { index, source })
                    }
                    Completion::Ready(LoadStatus::Failed) => {
                        Some(CarouselEvent::ImageFailed { index, source })
                    }
                }
            }
            Err(err) => {
                tracing::warn!(
                    target: "folio::carousel",
                    key = %request.key,
                    error = %err,
                    "renderer rejected request"
                );
                Some(CarouselEvent::ImageFailed { index, source })
            }
        }
    }

    pub fn go_to_next(&mut self) -> Vec<Notification> {
        self.dispatch(CarouselEvent::Next(NavigationSource::Button))
    }

    pub fn go_to_previous(&mut self) -> Vec<Notification> {
        self.dispatch(CarouselEvent::Previous(NavigationSource::Button))
    }

    pub fn go_to_slide(&mut self, index: usize) -> Vec<Notification> {
        self.dispatch(CarouselEvent::GoTo(index, NavigationSource::Dot))
    }

    /// Follow an index change made elsewhere (the paired lightbox).
    pub fn notify_index_changed(&mut self, index: usize) -> Vec<Notification> {
        self.dispatch(CarouselEvent::IndexSynced(index))
    }

    /// Host `onLoad` callback.
    pub fn image_loaded(
        &mut self,
        index: usize,
        source: ImageSource,
    ) -> Vec<Notification> {
        self.dispatch(CarouselEvent::ImageLoaded { index, source })
    }

    /// Host `onError` callback.
    pub fn image_failed(
        &mut self,
        index: usize,
        source: ImageSource,
    ) -> Vec<Notification> {
        self.dispatch(CarouselEvent::ImageFailed { index, source })
    }

    pub fn resize(&mut self, width: f32) -> Vec<Notification> {
        self.dispatch(CarouselEvent::ViewportResized { width })
    }

    pub fn toggle_minimize(&mut self) -> Vec<Notification> {
        self.dispatch(CarouselEvent::ToggleMinimize)
    }

    pub fn set_minimized(&mut self, minimized: bool) -> Vec<Notification> {
        self.dispatch(CarouselEvent::SetMinimized(minimized))
    }

    /// Release timers and the observer. Also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        let now = self.clock.now();
        self.dispatch_at(now, CarouselEvent::Teardown);
        self.torn_down = true;
        self.timers.clear();
        tracing::debug!(target: "folio::carousel", "carousel torn down");
    }
}

impl<R: ImageRenderer, C: Clock> Drop for CarouselEngine<R, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<R: ImageRenderer, C: Clock> std::fmt::Debug for CarouselEngine<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .field("rendered", &self.elements.len())
            .finish()
    }
}
