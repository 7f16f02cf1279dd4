//! A carousel and its lightbox, kept on the same index.
//!
//! Each side reports its own navigation as [`Notification::Navigated`]; the
//! gallery forwards it to the other side as a sync, which never produces a
//! `Navigated` of its own, so the link cannot ping-pong.

use std::sync::Arc;

use folio_config::EngineTuning;
use folio_contracts::render::ImageRenderer;
use folio_contracts::scroll_lock::ScrollLock;
use folio_model::{CarouselConfig, ElementId, SlideImage};

use crate::carousel::{CarouselEngine, CarouselEvent};
use crate::error::Result;
use crate::lightbox::{LightboxEvent, LightboxViewer};
use crate::notification::Notification;
use crate::time::Clock;

pub struct Gallery<R, C, L>
where
    R: ImageRenderer + Clone,
    C: Clock,
    L: ScrollLock + Clone,
{
    carousel: CarouselEngine<R, C>,
    lightbox: LightboxViewer<R, L>,
}

impl<R, C, L> Gallery<R, C, L>
where
    R: ImageRenderer + Clone,
    C: Clock,
    L: ScrollLock + Clone,
{
    pub fn new(
        images: impl Into<Arc<[SlideImage]>>,
        config: CarouselConfig,
        tuning: EngineTuning,
        renderer: R,
        clock: C,
        scroll_lock: L,
    ) -> Result<Self> {
        let images: Arc<[SlideImage]> = images.into();
        let lightbox = LightboxViewer::new(
            Arc::clone(&images),
            tuning,
            renderer.clone(),
            scroll_lock,
        );
        let carousel = CarouselEngine::with_tuning(
            images,
            config,
            tuning,
            renderer,
            clock,
        )?;
        Ok(Self { carousel, lightbox })
    }

    pub fn carousel(&self) -> &CarouselEngine<R, C> {
        &self.carousel
    }

    pub fn lightbox(&self) -> &LightboxViewer<R, L> {
        &self.lightbox
    }

    pub fn dispatch_carousel(
        &mut self,
        event: CarouselEvent,
    ) -> Vec<Notification> {
        let notifications = self.carousel.dispatch(event);
        self.forward_to_lightbox(notifications)
    }

    pub fn dispatch_lightbox(
        &mut self,
        event: LightboxEvent,
    ) -> Vec<Notification> {
        let notifications = self.lightbox.dispatch(event);
        self.forward_to_carousel(notifications)
    }

    /// Fire due carousel timers.
    pub fn advance(&mut self) -> Vec<Notification> {
        let notifications = self.carousel.advance();
        self.forward_to_lightbox(notifications)
    }

    /// Open fullscreen at `index` and move the carousel there too.
    pub fn open_lightbox(
        &mut self,
        index: usize,
        return_focus: Option<ElementId>,
    ) -> Result<Vec<Notification>> {
        let mut notifications = self.lightbox.open(index, return_focus)?;
        notifications.extend(self.carousel.notify_index_changed(index));
        Ok(notifications)
    }

    pub fn close_lightbox(&mut self) -> Vec<Notification> {
        self.lightbox.close()
    }

    fn forward_to_lightbox(
        &mut self,
        notifications: Vec<Notification>,
    ) -> Vec<Notification> {
        let mut out = Vec::with_capacity(notifications.len());
        for notification in notifications {
            if let Some(index) = notification.navigated_index()
                && self.lightbox.is_open()
            {
                out.extend(self.lightbox.notify_index_changed(index));
            }
            out.push(notification);
        }
        out
    }

    fn forward_to_carousel(
        &mut self,
        notifications: Vec<Notification>,
    ) -> Vec<Notification> {
        let mut out = Vec::with_capacity(notifications.len());
        for notification in notifications {
            if let Some(index) = notification.navigated_index() {
                out.extend(self.carousel.notify_index_changed(index));
            }
            out.push(notification);
        }
        out
    }
}
