/// Coarse viewport size classes used for responsive item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewportClass {
    Small,
    #[default]
    Medium,
    Large,
}

/// Width thresholds (logical pixels) separating viewport classes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    /// Widths below this are `Small`.
    pub medium_min: f32,
    /// Widths at or above this are `Large`.
    pub large_min: f32,
}

impl Breakpoints {
    pub const DEFAULT: Self = Self {
        medium_min: 768.0,
        large_min: 1024.0,
    };

    pub fn classify(&self, width: f32) -> ViewportClass {
        if width < self.medium_min {
            ViewportClass::Small
        } else if width < self.large_min {
            ViewportClass::Medium
        } else {
            ViewportClass::Large
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ViewportClass {
    /// Classify a width with the default breakpoints.
    pub fn from_width(width: f32) -> Self {
        Breakpoints::DEFAULT.classify(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_half_open_ranges() {
        assert_eq!(ViewportClass::from_width(320.0), ViewportClass::Small);
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Small);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(1023.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Large);
    }
}
