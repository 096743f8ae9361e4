//! A headless vertical card-swiper engine.
//!
//! For adapter-level utilities (gesture arbitration, paging tweens, spring
//! sampling), see the `cardswiper-adapter` crate.
//!
//! This crate focuses on the core algorithms behind a paginated, vertically
//! scrolling deck of dismissable cards: the stacked-card layout (the focused
//! card pins under the top inset, then scales and fades as the next one
//! arrives), per-card paging on release, and the swipe-to-dismiss drag state
//! machine.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - viewport size and scroll offset
//! - pointer samples (pan/tap/hold) in view coordinates
//! - millisecond timestamps for scroll debouncing and animation windows
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod fmath;
mod layout;
mod options;
mod swipe;
mod swiper;
mod types;


pub use options::{
    DidCancelSwipeCallback, DidDragCardCallback, DidEndScrollCallback, DidHoldCardCallback,
    DidScrollCallback, DidSwipeCardAwayCallback, DidTapCardCallback, NumberOfCardsCallback,
    OnChangeCallback, SizeForCardCallback, SwiperOptions, WillSwipeCardAwayCallback,
};
pub use swipe::{
    DISMISS_THRESHOLD, Dismissal, DragSession, MAX_ROTATION, ReleaseOutcome, SnapBack,
};
pub use swiper::CardSwiper;
pub use types::{
    CardAttributes, CardTransform, GesturePhase, PanDirection, PanState, Point, Rect, Size,
    SwipeDirection,
};
