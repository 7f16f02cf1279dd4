//! Index arithmetic for a carousel of a given size and item count.

use folio_model::{CarouselConfig, TransitionKind, ViewportClass};

/// The navigable shape of a carousel at one viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub len: usize,
    /// Effective items shown at once, always in `1..=max(len, 1)`.
    pub items: usize,
    pub looping: bool,
    pub transition: TransitionKind,
}

/// Items shown at once for `class`, clamped into `[1, len]` (1 when empty).
pub fn effective_items(
    config: &CarouselConfig,
    class: ViewportClass,
    len: usize,
) -> usize {
    let configured = config
        .responsive
        .resolve(class)
        .unwrap_or(config.items_to_show);
    configured.clamp(1, len.max(1))
}

impl Layout {
    pub fn resolve(
        config: &CarouselConfig,
        class: ViewportClass,
        len: usize,
    ) -> Self {
        Self {
            len,
            items: effective_items(config, class, len),
            looping: config.looping,
            transition: config.transition,
        }
    }

    /// Navigation and autoplay need at least two images.
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    /// Largest index reachable by navigation.
    ///
    /// Non-looping slide carousels stop once the last page is fully visible;
    /// fade carousels always reach the last image.
    pub fn max_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        match (self.looping, self.transition) {
            (true, _) | (false, TransitionKind::Fade) => self.len - 1,
            (false, TransitionKind::Slide) => self.len - self.items,
        }
    }

    /// Number of dot indicators.
    pub fn total_slides(&self) -> usize {
        if self.looping {
            self.len
        } else {
            (self.len + 1).saturating_sub(self.items).max(1)
        }
    }

    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.max_index())
    }

    /// Target of a "next" step from `current`, or `None` when it would not
    /// move.
    pub fn next_index(&self, current: usize) -> Option<usize> {
        if !self.can_navigate() {
            return None;
        }
        let target = if self.looping {
            (current + 1) % self.len
        } else {
            (current + 1).min(self.max_index())
        };
        (target != current).then_some(target)
    }

    pub fn previous_index(&self, current: usize) -> Option<usize> {
        if !self.can_navigate() {
            return None;
        }
        let target = if self.looping {
            (current + self.len - 1) % self.len
        } else {
            current.saturating_sub(1)
        };
        (target != current).then_some(target)
    }

    /// Indices rendered simultaneously when `current` is active.
    pub fn visible_indices(&self, current: usize) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        if self.transition == TransitionKind::Fade {
            return vec![current.min(self.len - 1)];
        }
        (0..self.items)
            .map(|offset| current + offset)
            .map(|i| if self.looping { i % self.len } else { i })
            .filter(|&i| i < self.len)
            .collect()
    }
}
