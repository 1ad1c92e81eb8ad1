/// Movement beyond this (on either axis) turns a press into a drag.
pub const TAP_SLOP_PX: f64 = 5.0;
/// Horizontal travel past this commits the gesture as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 30.0;
pub const DRAG_ROTATION_PER_PX: f64 = 0.1;
pub const EXIT_DISTANCE_FACTOR: f64 = 1.5;
pub const EXIT_ROTATION_DEG: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    Tap,
    Commit(SwipeDirection),
    SnapBack,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragGesture {
    start_x: f64,
    start_y: f64,
    dx: f64,
    dy: f64,
    moved: bool,
    active: bool,
}

impl DragGesture {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start_x = x;
        self.start_y = y;
        self.dx = 0.0;
        self.dy = 0.0;
        self.moved = false;
        self.active = true;
    }

    pub fn movement(&mut self, x: f64, y: f64) {
        if !self.active {
            return;
        }
        self.dx = x - self.start_x;
        self.dy = y - self.start_y;
        if self.dx.abs().max(self.dy.abs()) > TAP_SLOP_PX {
            self.moved = true;
        }
    }

    /// Single exit point for every gesture; resets the tracker whatever the
    /// outcome. Abandoned pointers end up here too, there is no separate
    /// cancel path.
    pub fn finish(&mut self) -> GestureOutcome {
        let outcome = if !self.active {
            GestureOutcome::SnapBack
        } else if !self.moved && self.dx.abs() < TAP_SLOP_PX {
            GestureOutcome::Tap
        } else if self.dx.abs() > SWIPE_THRESHOLD_PX {
            if self.dx > 0.0 {
                GestureOutcome::Commit(SwipeDirection::Right)
            } else {
                GestureOutcome::Commit(SwipeDirection::Left)
            }
        } else {
            GestureOutcome::SnapBack
        };
        *self = DragGesture::default();
        outcome
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    pub fn rotation(&self) -> f64 {
        self.dx * DRAG_ROTATION_PER_PX
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

pub fn exit_offset(dx: f64, viewport_width: f64) -> f64 {
    let direction = if dx >= 0.0 { 1.0 } else { -1.0 };
    direction * viewport_width * EXIT_DISTANCE_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(moves: &[(f64, f64)]) -> GestureOutcome {
        let mut gesture = DragGesture::default();
        gesture.begin(100.0, 100.0);
        for (x, y) in moves {
            gesture.movement(*x, *y);
        }
        gesture.finish()
    }

    #[test]
    fn wide_right_drag_commits_right() {
        assert_eq!(
            run(&[(120.0, 100.0), (150.0, 102.0)]),
            GestureOutcome::Commit(SwipeDirection::Right)
        );
    }

    #[test]
    fn wide_left_drag_commits_left() {
        assert_eq!(
            run(&[(50.0, 100.0)]),
            GestureOutcome::Commit(SwipeDirection::Left)
        );
    }

    #[test]
    fn short_drag_snaps_back() {
        assert_eq!(run(&[(110.0, 100.0)]), GestureOutcome::SnapBack);
    }

    #[test]
    fn still_press_is_a_tap() {
        assert_eq!(run(&[(102.0, 101.0)]), GestureOutcome::Tap);
    }

    #[test]
    fn vertical_drag_is_not_a_tap() {
        // moved once dy passes the slop, but |dx| never reaches the swipe
        // threshold, so the card snaps back instead of tapping
        assert_eq!(run(&[(100.0, 160.0)]), GestureOutcome::SnapBack);
    }

    #[test]
    fn wiggle_back_to_center_is_not_a_tap() {
        assert_eq!(
            run(&[(120.0, 100.0), (101.0, 100.0)]),
            GestureOutcome::SnapBack
        );
    }

    #[test]
    fn finish_resets_state() {
        let mut gesture = DragGesture::default();
        gesture.begin(0.0, 0.0);
        gesture.movement(50.0, 0.0);
        let _ = gesture.finish();
        assert!(!gesture.is_active());
        assert_eq!(gesture.offset(), (0.0, 0.0));
        assert_eq!(gesture.finish(), GestureOutcome::SnapBack);
    }

    #[test]
    fn rotation_tracks_horizontal_delta() {
        let mut gesture = DragGesture::default();
        gesture.begin(0.0, 0.0);
        gesture.movement(40.0, 10.0);
        assert!((gesture.rotation() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn exit_offset_follows_drag_sign() {
        assert_eq!(exit_offset(42.0, 1000.0), 1500.0);
        assert_eq!(exit_offset(-42.0, 1000.0), -1500.0);
    }
}
