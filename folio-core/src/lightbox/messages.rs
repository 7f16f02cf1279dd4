use folio_model::{ElementId, KeyPress, Modifiers, Point};

use super::focus::LightboxControl;
use crate::notification::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxEvent {
    /// Open at `index`, remembering where focus should return on close.
    Open {
        index: usize,
        return_focus: Option<ElementId>,
    },
    Close,

    Next,
    Previous,
    GoTo(usize),
    /// Index changed by the paired carousel. Never echoed back.
    IndexSynced(usize),

    Key(KeyPress),
    /// A control was clicked.
    Activate(LightboxControl),

    Wheel { delta_y: f32, modifiers: Modifiers },
    PinchStart(Point, Point),
    PinchMove(Point, Point),
    PinchEnd,
    /// Pointer drag or single-finger touch drag.
    DragStart(Point),
    DragMove(Point),
    DragEnd,
    DoubleClick,

    ImageLoaded(usize),
    ImageFailed(usize),
    Retry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxCommand {
    AcquireScrollLock,
    ReleaseScrollLock,
    Render(usize),
    Notify(Notification),
}

impl From<Notification> for LightboxCommand {
    fn from(notification: Notification) -> Self {
        LightboxCommand::Notify(notification)
    }
}
