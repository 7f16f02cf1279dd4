#![cfg(feature = "driver")]

mod support;

use std::time::Duration;

use folio_core::Notification;
use folio_core::carousel::{CarouselEngine, CarouselEvent};
use folio_core::driver;
use folio_core::render::MemoryRenderer;
use folio_core::time::TokioClock;
use folio_model::{CarouselConfig, NavigationSource};
use support::images;
use tokio::sync::mpsc;

type Engine = CarouselEngine<MemoryRenderer, TokioClock>;

fn engine(config: CarouselConfig) -> Engine {
    support::init_tracing();
    CarouselEngine::new(images(4), config, MemoryRenderer::new(), TokioClock)
        .expect("engine builds")
}

fn channel_sink() -> (
    impl FnMut(Notification) + Send + 'static,
    mpsc::UnboundedReceiver<Notification>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        move |note| {
            let _ = tx.send(note);
        },
        rx,
    )
}

#[tokio::test(start_paused = true)]
async fn autoplay_fires_on_tokio_time() {
    let (sink, mut notes) = channel_sink();
    let start = tokio::time::Instant::now();
    let config = CarouselConfig::default().with_autoplay(1000);
    let (_tx, _handle) = driver::spawn(engine(config), sink);

    let first = notes.recv().await.expect("notification");
    assert_eq!(first, Notification::Navigated(1));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(1100), "{elapsed:?}");

    let announce = notes.recv().await.expect("notification");
    assert!(matches!(announce, Notification::Announce(_)));
    assert_eq!(
        notes.recv().await.expect("notification"),
        Notification::Navigated(2)
    );
}

#[tokio::test(start_paused = true)]
async fn input_events_are_dispatched_in_order() {
    let (sink, mut notes) = channel_sink();
    let (tx, handle) = driver::spawn(engine(CarouselConfig::default()), sink);

    tx.send(CarouselEvent::GoTo(2, NavigationSource::Dot))
        .expect("driver running");
    assert_eq!(
        notes.recv().await.expect("notification"),
        Notification::Navigated(2)
    );
    assert_eq!(
        notes.recv().await.expect("notification"),
        Notification::Announce("Image 3 of 4: Photo 2".into())
    );

    // Still transitioning: ignored until the lock times out.
    tx.send(CarouselEvent::Next(NavigationSource::Button))
        .expect("driver running");
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(notes.try_recv().is_err());

    tx.send(CarouselEvent::Next(NavigationSource::Button))
        .expect("driver running");
    assert_eq!(
        notes.recv().await.expect("notification"),
        Notification::Navigated(3)
    );

    drop(tx);
    handle.await.expect("driver exits cleanly");
}
