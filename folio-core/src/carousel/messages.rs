//! Inputs and outputs of the carousel transition function.

use folio_model::{ImageSource, KeyPress, NavigationSource, Point, Rect};

use crate::autoplay::TimerCommand;
use crate::notification::Notification;
use crate::timers::TimerKind;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// Engine mounted: arm autoplay and request the initial loads.
    Start,
    /// Engine torn down: drop timers and stop observing.
    Teardown,

    // Navigation
    Next(NavigationSource),
    Previous(NavigationSource),
    GoTo(usize, NavigationSource),
    /// Index changed by the paired lightbox. Never echoed back.
    IndexSynced(usize),
    /// A slide was clicked or activated from the keyboard.
    Activate(usize),
    Key(KeyPress),

    // Touch and pointer
    TouchStart(Point),
    TouchMove(Point),
    TouchEnd,
    TouchCancel,
    PointerEnter,
    PointerLeave,

    // Layout and visibility
    ViewportResized { width: f32 },
    Intersection { index: usize, ratio: f32 },
    IntersectionGeometry { index: usize, slide: Rect, viewport: Rect },
    ObserverUnsupported,

    // Image loading
    ImageLoaded { index: usize, source: ImageSource },
    ImageFailed { index: usize, source: ImageSource },

    // Minimize
    ToggleMinimize,
    SetMinimized(bool),

    Timer(TimerKind),
}

/// Side effects requested by the transition function.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Timer(TimerCommand),
    Render { index: usize, source: ImageSource },
    Notify(Notification),
}

impl From<TimerCommand> for Command {
    fn from(cmd: TimerCommand) -> Self {
        Command::Timer(cmd)
    }
}

impl From<Notification> for Command {
    fn from(notification: Notification) -> Self {
        Command::Notify(notification)
    }
}
