//! Touch swipe recognition along the carousel axis.

use folio_model::{Orientation, Point};

/// A recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Previous,
}

/// Converts a touch start/move/end sequence into at most one [`Swipe`].
#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecognizer {
    orientation: Orientation,
    threshold: f32,
    start: Option<f32>,
    end: Option<f32>,
}

impl GestureRecognizer {
    pub fn new(orientation: Orientation, threshold: f32) -> Self {
        Self {
            orientation,
            threshold: threshold.abs(),
            start: None,
            end: None,
        }
    }

    fn axis(&self, point: Point) -> f32 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn touch_start(&mut self, point: Point) {
        let coord = self.axis(point);
        self.start = Some(coord);
        self.end = Some(coord);
    }

    pub fn touch_move(&mut self, point: Point) {
        if self.start.is_some() {
            self.end = Some(self.axis(point));
        }
    }

    /// Finish the gesture. Tracking state resets whatever the outcome.
    ///
    /// `distance = start - end`: dragging content toward the start of the
    /// axis (left or up) advances, the opposite direction goes back.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let start = self.start.take();
        let end = self.end.take();
        let distance = start? - end?;
        if distance > self.threshold {
            Some(Swipe::Next)
        } else if distance < -self.threshold {
            Some(Swipe::Previous)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> GestureRecognizer {
        GestureRecognizer::new(Orientation::Horizontal, 50.0)
    }

    #[test]
    fn leftward_swipe_past_threshold_is_next() {
        let mut g = horizontal();
        g.touch_start(Point::new(200.0, 10.0));
        g.touch_move(Point::new(145.0, 80.0));
        assert_eq!(g.touch_end(), Some(Swipe::Next));
        assert!(!g.is_tracking());
    }

    #[test]
    fn short_swipe_does_nothing() {
        let mut g = horizontal();
        g.touch_start(Point::new(200.0, 0.0));
        g.touch_move(Point::new(160.0, 0.0));
        assert_eq!(g.touch_end(), None);
    }

    #[test]
    fn exact_threshold_does_nothing() {
        let mut g = horizontal();
        g.touch_start(Point::new(100.0, 0.0));
        g.touch_move(Point::new(150.0, 0.0));
        assert_eq!(g.touch_end(), None);
    }

    #[test]
    fn rightward_swipe_is_previous() {
        let mut g = horizontal();
        g.touch_start(Point::new(100.0, 0.0));
        g.touch_move(Point::new(180.0, 0.0));
        assert_eq!(g.touch_end(), Some(Swipe::Previous));
    }

    #[test]
    fn vertical_orientation_reads_y_axis() {
        let mut g = GestureRecognizer::new(Orientation::Vertical, 50.0);
        g.touch_start(Point::new(0.0, 300.0));
        g.touch_move(Point::new(400.0, 240.0));
        assert_eq!(g.touch_end(), Some(Swipe::Next));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut g = horizontal();
        g.touch_move(Point::new(10.0, 0.0));
        assert_eq!(g.touch_end(), None);
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut g = horizontal();
        g.touch_start(Point::new(10.0, 0.0));
        assert_eq!(g.touch_end(), None);
    }
}
