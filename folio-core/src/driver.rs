//! Single-task async driver.
//!
//! Owns one [`CarouselEngine`], reads inputs from one unbounded channel and
//! sleeps until the engine's next timer deadline in between. The loop ends
//! once every sender has been dropped; the engine is dropped with it, which
//! releases its timers and observer.

use std::time::Instant;

use folio_contracts::render::ImageRenderer;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::carousel::{CarouselEngine, CarouselEvent};
use crate::notification::Notification;
use crate::time::Clock;

/// Sender half handed to whatever produces input events.
pub type EventSender = mpsc::UnboundedSender<CarouselEvent>;

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline))
                .await
        }
        None => std::future::pending().await,
    }
}

/// Drive `engine` until the channel closes, passing every notification to
/// `sink`.
///
/// The engine should be built with [`crate::time::TokioClock`] so its
/// deadlines line up with tokio's (possibly paused) clock.
pub async fn run<R, C, S>(
    mut engine: CarouselEngine<R, C>,
    mut inbox: mpsc::UnboundedReceiver<CarouselEvent>,
    mut sink: S,
) where
    R: ImageRenderer,
    C: Clock,
    S: FnMut(Notification),
{
    tracing::debug!(target: "folio::driver", "driver started");
    loop {
        let deadline = engine.next_deadline();
        tokio::select! {
            event = inbox.recv() => match event {
                Some(event) => {
                    engine.dispatch(event).into_iter().for_each(&mut sink);
                }
                None => break,
            },
            _ = sleep_until(deadline) => {
                engine.advance().into_iter().for_each(&mut sink);
            }
        }
    }
    tracing::debug!(
        target: "folio::driver",
        "input channel closed; driver stopped"
    );
}

/// Spawn [`run`] on the current runtime.
pub fn spawn<R, C, S>(
    engine: CarouselEngine<R, C>,
    sink: S,
) -> (EventSender, JoinHandle<()>)
where
    R: ImageRenderer + Send + 'static,
    R::Element: Send,
    C: Clock + Send + 'static,
    S: FnMut(Notification) + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(run(engine, rx, sink));
    (tx, handle)
}
