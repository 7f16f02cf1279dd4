//! Viewport-driven load eligibility and per-slide load progress.
//!
//! Eligibility is monotonic: once a slide may load it never goes back. Load
//! progress runs `Idle -> Loading -> Loaded | Errored`, with one retry from
//! a failed thumbnail to the full-resolution source.

use std::collections::BTreeSet;

use folio_config::LazyLoadTuning;
use folio_model::{ImageSource, Rect};

/// Load progress of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading(ImageSource),
    Loaded(ImageSource),
    Errored,
}

/// What to do after an attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Retry with the full-resolution source.
    RetryFull,
    /// Give up; the slide shows its inline fallback.
    Errored,
    /// The failure belongs to an attempt that is no longer current.
    Stale,
}

/// Whether the host can report viewport intersections at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverState {
    Connected,
    Unsupported,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LazyLoadTracker {
    tuning: LazyLoadTuning,
    observer: ObserverState,
    eligible: BTreeSet<usize>,
    phases: Vec<LoadPhase>,
}

impl LazyLoadTracker {
    /// Build the tracker for `len` slides with `visible` items on screen.
    ///
    /// The visible items plus `initial_lookahead` more are eligible before
    /// any intersection is reported.
    pub fn new(len: usize, visible: usize, tuning: LazyLoadTuning) -> Self {
        let initial = (visible + tuning.initial_lookahead).min(len);
        Self {
            eligible: (0..initial).collect(),
            phases: vec![LoadPhase::Idle; len],
            observer: ObserverState::Connected,
            tuning,
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn observer(&self) -> ObserverState {
        self.observer
    }

    pub fn is_eligible(&self, index: usize) -> bool {
        self.eligible.contains(&index)
    }

    pub fn eligible(&self) -> &BTreeSet<usize> {
        &self.eligible
    }

    pub fn phase(&self, index: usize) -> LoadPhase {
        self.phases.get(index).copied().unwrap_or_default()
    }

    /// Eligible slides that have not started loading yet.
    pub fn pending_loads(&self) -> Vec<usize> {
        self.eligible
            .iter()
            .copied()
            .filter(|&i| self.phase(i) == LoadPhase::Idle)
            .collect()
    }

    /// Record an intersection ratio reported by the host observer. Returns
    /// the index when this report made it eligible.
    pub fn observe(&mut self, index: usize, ratio: f32) -> Option<usize> {
        if self.observer != ObserverState::Connected || index >= self.len() {
            return None;
        }
        if ratio >= self.tuning.intersection_threshold
            && self.eligible.insert(index)
        {
            tracing::trace!(
                target: "folio::lazy",
                index,
                ratio,
                "slide became eligible"
            );
            return Some(index);
        }
        None
    }

    /// Intersection ratio of `slide` inside `viewport` grown by the
    /// look-ahead margin.
    pub fn intersection_ratio(&self, slide: &Rect, viewport: &Rect) -> f32 {
        let area = slide.area();
        if area <= 0.0 {
            return 0.0;
        }
        viewport
            .expand(self.tuning.root_margin_px)
            .intersection(slide)
            .map(|hit| hit.area() / area)
            .unwrap_or(0.0)
    }

    /// Geometry flavoured [`Self::observe`].
    pub fn observe_geometry(
        &mut self,
        index: usize,
        slide: &Rect,
        viewport: &Rect,
    ) -> Option<usize> {
        let ratio = self.intersection_ratio(slide, viewport);
        self.observe(index, ratio)
    }

    /// Make `indices` eligible, e.g. after a resize put more slides on
    /// screen. Returns true when anything new became eligible.
    pub fn reveal(
        &mut self,
        indices: impl IntoIterator<Item = usize>,
    ) -> bool {
        if self.observer == ObserverState::Disconnected {
            return false;
        }
        let len = self.len();
        let mut grew = false;
        for index in indices.into_iter().filter(|&i| i < len) {
            grew |= self.eligible.insert(index);
        }
        grew
    }

    /// The host cannot observe intersections: every slide becomes eligible.
    /// Returns the newly eligible indices.
    pub fn mark_unsupported(&mut self) -> Vec<usize> {
        if self.observer == ObserverState::Disconnected {
            return Vec::new();
        }
        self.observer = ObserverState::Unsupported;
        let newly: Vec<usize> = (0..self.len())
            .filter(|i| !self.eligible.contains(i))
            .collect();
        self.eligible.extend(newly.iter().copied());
        newly
    }

    /// Stop accepting intersection reports.
    pub fn disconnect(&mut self) {
        if self.observer != ObserverState::Disconnected {
            tracing::trace!(target: "folio::lazy", "observer disconnected");
        }
        self.observer = ObserverState::Disconnected;
    }

    pub fn begin_load(&mut self, index: usize, source: ImageSource) {
        if let Some(phase) = self.phases.get_mut(index) {
            *phase = LoadPhase::Loading(source);
        }
    }

    /// Returns false for completions of attempts that are not current.
    pub fn finish_load(&mut self, index: usize, source: ImageSource) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) if *phase == LoadPhase::Loading(source) => {
                *phase = LoadPhase::Loaded(source);
                true
            }
            _ => false,
        }
    }

    pub fn fail_load(
        &mut self,
        index: usize,
        source: ImageSource,
    ) -> FailureOutcome {
        let Some(phase) = self.phases.get_mut(index) else {
            return FailureOutcome::Stale;
        };
        if *phase != LoadPhase::Loading(source) {
            return FailureOutcome::Stale;
        }
        match source {
            ImageSource::Thumbnail => FailureOutcome::RetryFull,
            ImageSource::Full => {
                *phase = LoadPhase::Errored;
                FailureOutcome::Errored
            }
        }
    }

    fn indices_where(
        &self,
        pred: impl Fn(LoadPhase) -> bool,
    ) -> BTreeSet<usize> {
        self.phases
            .iter()
            .enumerate()
            .filter(|(_, p)| pred(**p))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn loaded_indices(&self) -> BTreeSet<usize> {
        self.indices_where(|p| matches!(p, LoadPhase::Loaded(_)))
    }

    pub fn loading_indices(&self) -> BTreeSet<usize> {
        self.indices_where(|p| matches!(p, LoadPhase::Loading(_)))
    }

    pub fn error_indices(&self) -> BTreeSet<usize> {
        self.indices_where(|p| p == LoadPhase::Errored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(len: usize, visible: usize) -> LazyLoadTracker {
        LazyLoadTracker::new(len, visible, LazyLoadTuning::default())
    }

    #[test]
    fn initial_set_is_visible_plus_one() {
        assert_eq!(tracker(10, 3).eligible().len(), 4);
        assert_eq!(tracker(3, 3).eligible().len(), 3);
        assert_eq!(tracker(1, 1).eligible().len(), 1);
        assert!(tracker(0, 1).eligible().is_empty());
    }

    #[test]
    fn eligibility_needs_ten_percent() {
        let mut t = tracker(10, 1);
        assert_eq!(t.observe(5, 0.09), None);
        assert!(!t.is_eligible(5));
        assert_eq!(t.observe(5, 0.1), Some(5));
        // Monotonic and reported once.
        assert_eq!(t.observe(5, 0.0), None);
        assert!(t.is_eligible(5));
    }

    #[test]
    fn margin_counts_toward_intersection() {
        let mut t = tracker(10, 1);
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        // Starts 30px right of the viewport: only the 50px margin reaches it.
        let slide = Rect::new(830.0, 0.0, 100.0, 600.0);
        assert!(t.intersection_ratio(&slide, &viewport) >= 0.1);
        assert_eq!(t.observe_geometry(4, &slide, &viewport), Some(4));

        let far = Rect::new(900.0, 0.0, 100.0, 600.0);
        assert_eq!(t.observe_geometry(6, &far, &viewport), None);
    }

    #[test]
    fn unsupported_observer_makes_everything_eligible() {
        let mut t = tracker(5, 1);
        let newly = t.mark_unsupported();
        assert_eq!(newly, vec![2, 3, 4]);
        assert_eq!(t.eligible().len(), 5);
        assert_eq!(t.observe(4, 1.0), None);
    }

    #[test]
    fn disconnected_observer_ignores_reports() {
        let mut t = tracker(5, 1);
        t.disconnect();
        assert_eq!(t.observe(3, 1.0), None);
        assert!(t.mark_unsupported().is_empty());
    }

    #[test]
    fn reveal_only_grows_the_set() {
        let mut t = tracker(6, 1);
        assert!(!t.reveal(0..2));
        assert!(t.reveal(0..4));
        assert_eq!(t.eligible().len(), 4);
        // Out of range indices are dropped.
        assert!(!t.reveal([9]));
        t.disconnect();
        assert!(!t.reveal(0..6));
        assert_eq!(t.eligible().len(), 4);
    }

    #[test]
    fn thumbnail_failure_retries_full_once() {
        let mut t = tracker(3, 1);
        t.begin_load(0, ImageSource::Thumbnail);
        assert_eq!(
            t.fail_load(0, ImageSource::Thumbnail),
            FailureOutcome::RetryFull
        );
        t.begin_load(0, ImageSource::Full);
        assert_eq!(t.fail_load(0, ImageSource::Full), FailureOutcome::Errored);
        assert_eq!(t.error_indices().into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn stale_completions_are_ignored() {
        let mut t = tracker(3, 1);
        t.begin_load(1, ImageSource::Full);
        assert!(!t.finish_load(1, ImageSource::Thumbnail));
        assert_eq!(
            t.fail_load(1, ImageSource::Thumbnail),
            FailureOutcome::Stale
        );
        assert!(t.finish_load(1, ImageSource::Full));
        assert_eq!(t.phase(1), LoadPhase::Loaded(ImageSource::Full));
        assert!(t.loading_indices().is_empty());
        assert_eq!(t.loaded_indices().len(), 1);
    }
}
