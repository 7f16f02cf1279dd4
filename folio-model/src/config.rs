use crate::viewport::ViewportClass;

/// Axis along which slides are laid out and swiped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Visual transition between slides. Slide mode shows several items side by
/// side, fade mode shows exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransitionKind {
    #[default]
    Slide,
    Fade,
}

/// Who owns the minimized flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MinimizeControl {
    /// The engine flips its own state on toggle.
    #[default]
    Internal,
    /// The embedding page owns the flag; toggles only emit a request.
    External,
}

/// Per viewport class overrides for the number of items shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResponsiveItemCounts {
    pub small: Option<usize>,
    pub medium: Option<usize>,
    pub large: Option<usize>,
}

impl ResponsiveItemCounts {
    /// Resolve the configured count for `class`.
    ///
    /// Missing entries fall back toward smaller classes: large checks
    /// large, medium, small; medium checks medium, small; small checks only
    /// small. `None` means the caller's default applies.
    pub fn resolve(&self, class: ViewportClass) -> Option<usize> {
        match class {
            ViewportClass::Small => self.small,
            ViewportClass::Medium => self.medium.or(self.small),
            ViewportClass::Large => {
                self.large.or(self.medium).or(self.small)
            }
        }
    }
}

/// Static configuration for a carousel instance, supplied once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    /// Default number of simultaneously visible slides. Values below 1 are
    /// treated as 1.
    pub items_to_show: usize,
    pub responsive: ResponsiveItemCounts,
    pub orientation: Orientation,
    pub transition: TransitionKind,
    pub transition_duration_ms: u64,
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    pub show_nav_buttons: bool,
    pub show_dot_indicators: bool,
    /// Static image shown when the carousel has no slides.
    pub fallback_image: Option<String>,
    pub minimize: MinimizeControl,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: 5_000,
            items_to_show: 1,
            responsive: ResponsiveItemCounts::default(),
            orientation: Orientation::Horizontal,
            transition: TransitionKind::Slide,
            transition_duration_ms: 500,
            looping: true,
            show_nav_buttons: true,
            show_dot_indicators: true,
            fallback_image: None,
            minimize: MinimizeControl::Internal,
        }
    }
}

impl CarouselConfig {
    /// Defaults for a single-image hero slideshow with autoplay.
    pub fn hero() -> Self {
        Self {
            autoplay: true,
            transition: TransitionKind::Fade,
            ..Self::default()
        }
    }

    /// Defaults for a multi-item project strip.
    pub fn strip() -> Self {
        Self {
            items_to_show: 3,
            responsive: ResponsiveItemCounts {
                small: Some(1),
                medium: Some(2),
                large: Some(3),
            },
            looping: false,
            ..Self::default()
        }
    }

    pub fn with_autoplay(mut self, interval_ms: u64) -> Self {
        self.autoplay = true;
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_items_to_show(mut self, items: usize) -> Self {
        self.items_to_show = items;
        self
    }

    pub fn with_transition(
        mut self,
        kind: TransitionKind,
        duration_ms: u64,
    ) -> Self {
        self.transition = kind;
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_minimize(mut self, control: MinimizeControl) -> Self {
        self.minimize = control;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_counts_fall_back_to_smaller_classes() {
        let counts = ResponsiveItemCounts {
            small: Some(1),
            medium: None,
            large: None,
        };
        assert_eq!(counts.resolve(ViewportClass::Small), Some(1));
        assert_eq!(counts.resolve(ViewportClass::Medium), Some(1));
        assert_eq!(counts.resolve(ViewportClass::Large), Some(1));

        let counts = ResponsiveItemCounts {
            small: None,
            medium: Some(2),
            large: None,
        };
        assert_eq!(counts.resolve(ViewportClass::Small), None);
        assert_eq!(counts.resolve(ViewportClass::Large), Some(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: CarouselConfig = serde_json::from_str(
            r#"{ "autoplay": true, "loop": false, "transition": "fade" }"#,
        )
        .unwrap();
        assert!(cfg.autoplay);
        assert!(!cfg.looping);
        assert_eq!(cfg.transition, TransitionKind::Fade);
        assert_eq!(cfg.autoplay_interval_ms, 5_000);
    }
}
