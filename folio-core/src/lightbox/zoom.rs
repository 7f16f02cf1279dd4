//! Zoom and pan of the fullscreen image.

use folio_config::ZoomTuning;
use folio_model::{Modifiers, Point, Vector};

/// Factors this close to the minimum snap onto it, so stepping back down by
/// wheel ticks lands exactly on 1.
const SNAP_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pinch {
    initial_distance: f32,
    initial_zoom: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomPan {
    tuning: ZoomTuning,
    factor: f32,
    pan: Vector,
    pinch: Option<Pinch>,
    drag_origin: Option<Point>,
}

impl ZoomPan {
    pub fn new(tuning: ZoomTuning) -> Self {
        Self {
            factor: tuning.min_factor,
            tuning,
            pan: Vector::ZERO,
            pinch: None,
            drag_origin: None,
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn pan(&self) -> Vector {
        self.pan
    }

    pub fn is_zoomed(&self) -> bool {
        self.factor > self.tuning.min_factor
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Back to the unzoomed, centred image.
    pub fn reset(&mut self) {
        self.factor = self.tuning.min_factor;
        self.pan = Vector::ZERO;
        self.pinch = None;
        self.drag_origin = None;
    }

    fn set_factor(&mut self, factor: f32) -> bool {
        let mut clamped = self.tuning.clamp(factor);
        if (clamped - self.tuning.min_factor).abs() < SNAP_EPSILON {
            clamped = self.tuning.min_factor;
        }
        let changed = clamped != self.factor;
        self.factor = clamped;
        if !self.is_zoomed() {
            self.pan = Vector::ZERO;
            self.drag_origin = None;
        }
        changed
    }

    /// Wheel tick. Scrolling up (negative `delta_y`) zooms in. Without a zoom
    /// modifier the wheel scrolls normally and nothing changes.
    pub fn wheel(&mut self, delta_y: f32, modifiers: Modifiers) -> bool {
        if !modifiers.is_zoom_modifier() || delta_y == 0.0 {
            return false;
        }
        let step = if delta_y < 0.0 {
            self.tuning.wheel_step
        } else {
            -self.tuning.wheel_step
        };
        self.set_factor(self.factor + step)
    }

    pub fn pinch_start(&mut self, a: Point, b: Point) {
        let distance = a.distance(b);
        if distance <= 0.0 {
            return;
        }
        self.drag_origin = None;
        self.pinch = Some(Pinch {
            initial_distance: distance,
            initial_zoom: self.factor,
        });
    }

    pub fn pinch_move(&mut self, a: Point, b: Point) -> bool {
        let Some(pinch) = self.pinch else {
            return false;
        };
        let ratio = a.distance(b) / pinch.initial_distance;
        self.set_factor(pinch.initial_zoom * ratio)
    }

    pub fn pinch_end(&mut self) {
        self.pinch = None;
    }

    /// Begin a drag. Only a zoomed image can be panned.
    pub fn drag_start(&mut self, at: Point) -> bool {
        if !self.is_zoomed() || self.pinch.is_some() {
            return false;
        }
        self.drag_origin = Some(at);
        true
    }

    pub fn drag_move(&mut self, to: Point) -> bool {
        let Some(origin) = self.drag_origin else {
            return false;
        };
        let delta = to.delta_from(origin);
        self.pan = self.pan + delta;
        self.drag_origin = Some(to);
        !delta.is_zero()
    }

    pub fn drag_end(&mut self) {
        self.drag_origin = None;
    }

    /// Toggle between unzoomed and the double-click factor.
    pub fn toggle(&mut self) {
        if self.is_zoomed() {
            self.reset();
        } else {
            self.set_factor(self.tuning.double_click_factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoom() -> ZoomPan {
        ZoomPan::new(ZoomTuning::default())
    }

    #[test]
    fn wheel_needs_modifier() {
        let mut z = zoom();
        assert!(!z.wheel(-1.0, Modifiers::NONE));
        assert!(z.wheel(-1.0, Modifiers::CTRL));
        assert!((z.factor() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn wheel_clamps_at_both_ends() {
        let mut z = zoom();
        for _ in 0..100 {
            z.wheel(-1.0, Modifiers::CTRL);
        }
        assert_eq!(z.factor(), 5.0);
        for _ in 0..100 {
            z.wheel(1.0, Modifiers::CTRL);
        }
        assert_eq!(z.factor(), 1.0);
    }

    #[test]
    fn returning_to_one_resets_pan_exactly() {
        let mut z = zoom();
        for _ in 0..3 {
            z.wheel(-1.0, Modifiers::CTRL);
        }
        assert!(z.drag_start(Point::new(10.0, 10.0)));
        z.drag_move(Point::new(40.0, -5.0));
        assert_eq!(z.pan(), Vector::new(30.0, -15.0));
        for _ in 0..3 {
            z.wheel(1.0, Modifiers::CTRL);
        }
        assert_eq!(z.factor(), 1.0);
        assert_eq!(z.pan(), Vector::ZERO);
        assert!(!z.is_dragging());
    }

    #[test]
    fn pinch_scales_from_initial_zoom() {
        let mut z = zoom();
        z.pinch_start(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        z.pinch_move(Point::new(0.0, 0.0), Point::new(250.0, 0.0));
        assert!((z.factor() - 2.5).abs() < 1e-6);
        z.pinch_move(Point::new(0.0, 0.0), Point::new(900.0, 0.0));
        assert_eq!(z.factor(), 5.0);
        z.pinch_end();
        assert!(!z.pinch_move(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
    }

    #[test]
    fn unzoomed_image_cannot_pan() {
        let mut z = zoom();
        assert!(!z.drag_start(Point::new(0.0, 0.0)));
        assert!(!z.drag_move(Point::new(50.0, 50.0)));
        assert_eq!(z.pan(), Vector::ZERO);
    }

    #[test]
    fn double_click_toggles() {
        let mut z = zoom();
        z.toggle();
        assert_eq!(z.factor(), 2.0);
        z.toggle();
        assert_eq!(z.factor(), 1.0);
    }
}
