use crate::fmath;

/// A point in view coordinates; y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// The direction a card is (being) swiped in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    Left,
    Right,
    None,
}

/// Coarse classification of a pan gesture, derived from its velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl PanDirection {
    /// Classifies a pan by its velocity: the dominant axis wins.
    pub fn from_velocity(velocity: Point) -> Self {
        let vertical = fmath::abs(velocity.y) > fmath::abs(velocity.x);
        match (vertical, velocity.x, velocity.y) {
            (true, _, y) if y < 0.0 => Self::Up,
            (true, _, y) if y > 0.0 => Self::Down,
            (false, x, _) if x > 0.0 => Self::Right,
            (false, x, _) if x < 0.0 => Self::Left,
            _ => Self::None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Phase of a host gesture (pan or long-press).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A snapshot of an in-progress pan gesture, as reported by the host input
/// layer.
///
/// Passed by value into [`crate::CardSwiper::handle_pan`] so the state
/// machine never reads ambient UI state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanState {
    pub phase: GesturePhase,
    /// Location in the swiper's view coordinates.
    pub location: Point,
    /// Cumulative translation since the gesture began.
    pub translation: Point,
    /// Velocity in points per second.
    pub velocity: Point,
}

/// Layout attributes for one card, as computed by the flow layout.
///
/// `frame` is in content coordinates (card 0's natural top is y = 0);
/// subtract the scroll offset for view coordinates. `scale` compresses the
/// card horizontally around its center; `translation_y` is the extra
/// stacking offset for cards pinned behind the focused one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardAttributes {
    pub index: usize,
    pub frame: Rect,
    pub scale: f32,
    pub translation_y: f32,
    pub alpha: f32,
    pub z_index: usize,
}

/// A rotation + horizontal translation applied to a card mid-swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTransform {
    /// Rotation around the session anchor, in radians.
    pub angle: f32,
    pub translation_x: f32,
}

impl CardTransform {
    pub const IDENTITY: Self = Self {
        angle: 0.0,
        translation_x: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0 && self.translation_x == 0.0
    }
}
