//! The swipe/drag state machine for dismissing cards.
//!
//! A drag lives as a [`DragSession`] while the finger is down, then resolves
//! into either a [`SnapBack`] or a [`Dismissal`] record that the swiper (and
//! its rendering adapter) play out over a fixed time window.

use crate::fmath;
use crate::{CardTransform, Point, Rect, SwipeDirection};

/// Fraction of the card width its center must travel from the container
/// center before a release dismisses the card instead of snapping back.
pub const DISMISS_THRESHOLD: f32 = 0.4;

/// Rotation applied at a full card-width of horizontal translation.
pub const MAX_ROTATION: f32 = core::f32::consts::PI / 10.0;

/// Dismissed cards translate to twice their width past the release point.
pub(crate) const OFF_SCREEN_FACTOR: f32 = 2.0;
/// Fixed rotation used when a dismissal is triggered programmatically.
pub(crate) const PROGRAMMATIC_ANGLE: f32 = 0.15;
pub(crate) const DISMISS_DURATION_MS: u64 = 200;
pub(crate) const SNAP_BACK_DURATION_MS: u64 = 500;
pub(crate) const SNAP_BACK_DAMPING: f32 = 0.6;

/// An in-progress drag on one card.
///
/// Created on gesture-begin inside the swipe-able area, destroyed when the
/// gesture ends or is cancelled; at most one exists at a time.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    pub index: usize,
    /// Unit anchor point the rotation pivots around (the initial touch).
    pub anchor: Point,
    /// View-space frame of the card when the drag began.
    pub card_frame: Rect,
    pub translation_x: f32,
    pub angle: f32,
}

impl DragSession {
    pub(crate) fn begin(index: usize, card_frame: Rect, location: Point) -> Self {
        Self {
            index,
            anchor: anchor_for_touch(location, card_frame),
            card_frame,
            translation_x: 0.0,
            angle: 0.0,
        }
    }

    /// The transform currently applied to the dragged card.
    pub fn transform(&self) -> CardTransform {
        CardTransform {
            angle: self.angle,
            translation_x: self.translation_x,
        }
    }

    /// Horizontal center of the card under the current translation.
    pub(crate) fn current_mid_x(&self) -> f32 {
        self.card_frame.mid_x() + self.translation_x
    }
}

/// Remaps the rotation anchor to the touch point (unit coordinates), so the
/// card pivots around the finger without a visual jump.
pub(crate) fn anchor_for_touch(location: Point, card_frame: Rect) -> Point {
    if card_frame.size.width <= 0.0 || card_frame.size.height <= 0.0 {
        return Point::new(0.5, 0.5);
    }
    Point::new(
        (location.x - card_frame.min_x()) / card_frame.size.width,
        (location.y - card_frame.min_y()) / card_frame.size.height,
    )
}

/// Rotation for a horizontal translation: linear in the translation, capped
/// at one card width either way.
pub(crate) fn rotation_angle(translation_x: f32, card_width: f32) -> f32 {
    if card_width <= 0.0 {
        return 0.0;
    }
    let strength = (translation_x / card_width).clamp(-1.0, 1.0);
    MAX_ROTATION * strength
}

/// How a finished drag resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    SnapBack,
    Dismiss(SwipeDirection),
}

/// Decides between snap-back and dismissal when the finger lifts.
pub(crate) fn release_outcome(card_mid_x: f32, center_x: f32, card_width: f32) -> ReleaseOutcome {
    let margin = card_width * DISMISS_THRESHOLD;
    if card_mid_x < center_x - margin || card_mid_x > center_x + margin {
        ReleaseOutcome::Dismiss(swipe_direction(card_mid_x, center_x))
    } else {
        ReleaseOutcome::SnapBack
    }
}

/// Which side of the container center the card currently sits on. Exactly
/// centered resolves to `None`.
pub(crate) fn swipe_direction(card_mid_x: f32, center_x: f32) -> SwipeDirection {
    if card_mid_x < center_x {
        SwipeDirection::Left
    } else if card_mid_x > center_x {
        SwipeDirection::Right
    } else {
        SwipeDirection::None
    }
}

/// A card animating off screen.
///
/// The swiper keeps this alive until the animation window elapses, then
/// removes the card's index and reports the removal.
#[derive(Clone, Copy, Debug)]
pub struct Dismissal {
    pub index: usize,
    pub direction: SwipeDirection,
    /// Transform at the moment the dismissal started.
    pub from: CardTransform,
    /// Rotation held for the duration of the animation.
    pub angle: f32,
    /// Horizontal translation the card animates to.
    pub target_translation_x: f32,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl Dismissal {
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_at_ms) >= self.duration_ms
    }
}

/// A card springing back to its resting transform after a cancelled swipe.
#[derive(Clone, Copy, Debug)]
pub struct SnapBack {
    pub index: usize,
    pub from: CardTransform,
    /// Spring damping as a fraction of critical.
    pub damping: f32,
    /// Normalized initial spring velocity, derived from the residual offset.
    pub initial_velocity: f32,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl SnapBack {
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_at_ms) >= self.duration_ms
    }
}

pub(crate) fn dismissal_for(
    index: usize,
    direction: SwipeDirection,
    from: CardTransform,
    angle: f32,
    card_width: f32,
    now_ms: u64,
) -> Dismissal {
    let target_translation_x = match direction {
        SwipeDirection::Left => -card_width * OFF_SCREEN_FACTOR,
        SwipeDirection::Right => card_width * OFF_SCREEN_FACTOR,
        SwipeDirection::None => from.translation_x,
    };
    Dismissal {
        index,
        direction,
        from,
        angle,
        target_translation_x,
        started_at_ms: now_ms,
        duration_ms: DISMISS_DURATION_MS,
    }
}

pub(crate) fn snap_back_for(index: usize, from: CardTransform, now_ms: u64) -> SnapBack {
    SnapBack {
        index,
        from,
        damping: SNAP_BACK_DAMPING,
        initial_velocity: fmath::abs(from.translation_x) / 100.0,
        started_at_ms: now_ms,
        duration_ms: SNAP_BACK_DURATION_MS,
    }
}
