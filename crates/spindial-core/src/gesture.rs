//! Pointer gesture interpretation: drag deltas vs. a discrete item click.
//!
//! A session exists from pointer-down to pointer-up/cancel and only follows the
//! pointer that opened it. Once the pointer strays past the click threshold
//! the gesture is a drag for the rest of its life.

use crate::angle::wrap_pi;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub pointer_id: i32,
    pub start_position: DVec2,
    pub start_angle: f64,
    pub last_angle: f64,
    pub candidate_index: Option<usize>,
    pub committed_as_drag: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Released within the click threshold over an item.
    Click(usize),
    /// Moved past the threshold, or released over no item.
    Drag,
}

#[inline]
pub fn pointer_angle(position: DVec2, center: DVec2) -> f64 {
    let d = position - center;
    d.y.atan2(d.x)
}

#[derive(Debug)]
pub struct GestureClassifier {
    session: Option<GestureSession>,
    threshold_px: f64,
}

impl GestureClassifier {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            session: None,
            threshold_px,
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Open a session. Refused while another pointer holds the gesture.
    pub fn begin(
        &mut self,
        pointer_id: i32,
        position: DVec2,
        center: DVec2,
        candidate_index: Option<usize>,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let angle = pointer_angle(position, center);
        self.session = Some(GestureSession {
            pointer_id,
            start_position: position,
            start_angle: angle,
            last_angle: angle,
            candidate_index,
            committed_as_drag: false,
        });
        true
    }

    /// Returns the wrapped angular delta swept since the last move, or `None`
    /// if `pointer_id` does not own the gesture.
    pub fn move_to(&mut self, pointer_id: i32, position: DVec2, center: DVec2) -> Option<f64> {
        let threshold = self.threshold_px;
        let session = self.session.as_mut().filter(|s| s.pointer_id == pointer_id)?;
        let angle = pointer_angle(position, center);
        let delta = wrap_pi(angle - session.last_angle);
        session.last_angle = angle;
        if !session.committed_as_drag && position.distance(session.start_position) > threshold {
            session.committed_as_drag = true;
            log::debug!("[gesture] pointer {} committed as drag", pointer_id);
        }
        Some(delta)
    }

    /// Close the session owned by `pointer_id` and classify it.
    pub fn end(&mut self, pointer_id: i32) -> Option<GestureOutcome> {
        if self.session.as_ref()?.pointer_id != pointer_id {
            return None;
        }
        let session = self.session.take()?;
        Some(match (session.committed_as_drag, session.candidate_index) {
            (false, Some(index)) => GestureOutcome::Click(index),
            _ => GestureOutcome::Drag,
        })
    }

    /// Drop any session without classifying it.
    pub fn reset(&mut self) {
        self.session = None;
    }
}
