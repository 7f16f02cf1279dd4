//! Outbound messages from the engines to their host.

use folio_model::ElementId;

/// Something the host should react to. Engines return these from every
/// dispatch; nothing is delivered behind the caller's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The active index changed through navigation on this surface.
    Navigated(usize),
    /// Text for an assistive-technology live region.
    Announce(String),
    /// The carousel asks its owner to toggle the minimized flag.
    MinimizeRequested,
    /// A slide was activated and should open fullscreen.
    LightboxRequested(usize),
    /// Move focus back to the element recorded when the lightbox opened.
    RestoreFocus(ElementId),
}

impl Notification {
    pub fn navigated_index(&self) -> Option<usize> {
        match self {
            Notification::Navigated(index) => Some(*index),
            _ => None,
        }
    }
}
