//! Focus trap for the lightbox controls
//!
//! Tab and Shift+Tab cycle strictly within the controls that are currently
//! actionable. The set is rebuilt whenever navigation bounds or the error
//! state change; the focused control survives a rebuild when it is still
//! present, otherwise focus falls back to the first control.

/// Focusable lightbox control, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightboxControl {
    Close,
    Previous,
    Next,
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusTrap {
    controls: Vec<LightboxControl>,
    focused: Option<usize>,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the focusable set.
    pub fn rebuild(
        &mut self,
        can_previous: bool,
        can_next: bool,
        errored: bool,
    ) {
        let previous = self.focused();
        self.controls = [
            Some(LightboxControl::Close),
            can_previous.then_some(LightboxControl::Previous),
            can_next.then_some(LightboxControl::Next),
            errored.then_some(LightboxControl::Retry),
        ]
        .into_iter()
        .flatten()
        .collect();

        self.focused = previous
            .and_then(|control| {
                self.controls.iter().position(|c| *c == control)
            })
            .or(if self.controls.is_empty() { None } else { Some(0) });
    }

    /// Focus the first control, as on open.
    pub fn focus_first(&mut self) {
        self.focused = if self.controls.is_empty() { None } else { Some(0) };
    }

    pub fn clear(&mut self) {
        self.controls.clear();
        self.focused = None;
    }

    pub fn controls(&self) -> &[LightboxControl] {
        &self.controls
    }

    pub fn focused(&self) -> Option<LightboxControl> {
        self.focused.and_then(|i| self.controls.get(i).copied())
    }

    /// Tab.
    pub fn focus_next(&mut self) -> Option<LightboxControl> {
        let len = self.controls.len();
        if len == 0 {
            return None;
        }
        self.focused = Some(self.focused.map_or(0, |i| (i + 1) % len));
        self.focused()
    }

    /// Shift+Tab.
    pub fn focus_previous(&mut self) -> Option<LightboxControl> {
        let len = self.controls.len();
        if len == 0 {
            return None;
        }
        self.focused =
            Some(self.focused.map_or(len - 1, |i| (i + len - 1) % len));
        self.focused()
    }
}
