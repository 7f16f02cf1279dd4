#![allow(dead_code)]

use std::sync::Once;

use folio_core::carousel::CarouselEngine;
use folio_core::render::MemoryRenderer;
use folio_core::time::ManualClock;
use folio_model::{CarouselConfig, SlideImage};

pub type TestCarousel = CarouselEngine<MemoryRenderer, ManualClock>;

/// Install a test subscriber once. Set `RUST_LOG=folio=trace` to see the
/// engines' transitions.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

pub fn images(count: usize) -> Vec<SlideImage> {
    (0..count)
        .map(|i| {
            SlideImage::new(format!("photo-{i}"), format!("Photo {i}"))
                .expect("valid slide")
        })
        .collect()
}

/// Slides with thumbnail URLs `thumb-{i}.jpg` and full URLs `full-{i}.jpg`.
pub fn images_with_thumbnails(count: usize) -> Vec<SlideImage> {
    (0..count)
        .map(|i| {
            SlideImage::new(format!("photo-{i}"), format!("Photo {i}"))
                .expect("valid slide")
                .with_thumbnail_url(format!("thumb-{i}.jpg"))
                .with_full_url(format!("full-{i}.jpg"))
        })
        .collect()
}

pub struct Harness {
    pub engine: TestCarousel,
    pub clock: ManualClock,
    pub renderer: MemoryRenderer,
}

impl Harness {
    pub fn new(images: Vec<SlideImage>, config: CarouselConfig) -> Self {
        Self::with_renderer(images, config, MemoryRenderer::new())
    }

    pub fn with_renderer(
        images: Vec<SlideImage>,
        config: CarouselConfig,
        renderer: MemoryRenderer,
    ) -> Self {
        init_tracing();
        let clock = ManualClock::new();
        let engine =
            CarouselEngine::new(images, config, renderer.clone(), clock.clone())
                .expect("engine builds");
        Self {
            engine,
            clock,
            renderer,
        }
    }

    /// Move time forward and fire whatever became due.
    pub fn advance_ms(&mut self, ms: u64) -> Vec<folio_core::Notification> {
        self.clock.advance_ms(ms);
        self.engine.advance()
    }

    pub fn index(&self) -> usize {
        self.engine.current_index()
    }
}

/// Config without transition lock so consecutive navigations apply.
pub fn instant(config: CarouselConfig) -> CarouselConfig {
    CarouselConfig {
        transition_duration_ms: 0,
        ..config
    }
}
