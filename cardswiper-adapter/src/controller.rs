use cardswiper::{CardSwiper, CardTransform, PanState, Size, SwiperOptions};

use crate::{Easing, Spring, Tween};

const PAGING_TWEEN_MS: u64 = 250;
const SCROLL_TO_TWEEN_MS: u64 = 300;

/// How [`Controller::on_pan`] routed a pan sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanRouting {
    /// The swipe machine consumed the sample; the host must suppress its
    /// vertical scrolling for this touch sequence.
    Claimed,
    /// The sample belongs to vertical scrolling; feed the resulting offsets
    /// back via `on_scroll` / `on_scroll_drag_end`.
    Scroll,
}

/// A framework-neutral controller that wraps a [`cardswiper::CardSwiper`]
/// and provides common adapter workflows (gesture arbitration, paging
/// tweens, animated scroll-to, per-card transform sampling).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pan` / `on_scroll` / `on_scroll_drag_end` when UI events occur
/// - `tick(now_ms)` each frame/timer tick
#[derive(Clone, Debug)]
pub struct Controller {
    swiper: CardSwiper,
    scroll_tween: Option<Tween>,
}

impl Controller {
    pub fn new(options: SwiperOptions) -> Self {
        Self {
            swiper: CardSwiper::new(options),
            scroll_tween: None,
        }
    }

    pub fn from_swiper(swiper: CardSwiper) -> Self {
        Self {
            swiper,
            scroll_tween: None,
        }
    }

    pub fn swiper(&self) -> &CardSwiper {
        &self.swiper
    }

    pub fn swiper_mut(&mut self) -> &mut CardSwiper {
        &mut self.swiper
    }

    pub fn into_swiper(self) -> CardSwiper {
        self.swiper
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.scroll_tween = None;
    }

    pub fn on_viewport(&mut self, viewport: Size) {
        self.swiper.set_viewport(viewport);
    }

    /// Routes one pan sample: horizontal pans that start inside the
    /// swipe-able area drive the swipe machine; everything else is left to
    /// the host's scrolling. Once a drag is active, every sample of the
    /// sequence stays claimed.
    pub fn on_pan(&mut self, pan: PanState, now_ms: u64) -> PanRouting {
        let claimed = self.swiper.drag_session().is_some()
            || self.swiper.should_claim_pan(pan.location, pan.velocity);
        if !claimed {
            return PanRouting::Scroll;
        }
        self.swiper.handle_pan(pan, now_ms);
        PanRouting::Claimed
    }

    /// Call when the UI reports a scroll offset change (wheel/drag). This
    /// cancels any active tween.
    pub fn on_scroll(&mut self, offset: f32, now_ms: u64) {
        self.cancel_animation();
        self.swiper.apply_scroll_offset_event_clamped(offset, now_ms);
    }

    /// Call when a scroll drag releases: computes the paging target for the
    /// release velocity and tweens to it. Returns the target offset.
    pub fn on_scroll_drag_end(&mut self, proposed_offset: f32, velocity_y: f32, now_ms: u64) -> f32 {
        let to = self.swiper.paging_target_offset(proposed_offset, velocity_y);
        self.start_tween_to_offset(to, now_ms, PAGING_TWEEN_MS, Easing::EaseInOutCubic);
        to
    }

    /// Scrolls so card `index` rests under the top inset; `None` when the
    /// index is out of range. With `animated`, the move is tween-driven and
    /// completes across subsequent `tick`s.
    pub fn scroll_to_card(&mut self, index: usize, animated: bool, now_ms: u64) -> Option<f32> {
        let to = self.swiper.scroll_to_card_offset(index)?;
        if animated {
            self.start_tween_to_offset(to, now_ms, SCROLL_TO_TWEEN_MS, Easing::SmoothStep);
        } else {
            self.cancel_animation();
            self.swiper.set_scroll_offset(to);
        }
        Some(to)
    }

    /// Starts a tween to an offset (adapter-driven). Returns the clamped
    /// target offset.
    pub fn start_tween_to_offset(
        &mut self,
        offset: f32,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f32 {
        let to = self.swiper.clamp_scroll_offset(offset);
        let from = self.swiper.scroll_offset();
        self.scroll_tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    /// Advances the controller.
    ///
    /// Samples the scroll tween (returning the new offset while one is
    /// active) and advances the swiper's time-based state (dismissals,
    /// snap-backs, scroll debouncing).
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let offset = if let Some(tween) = self.scroll_tween {
            let off = tween.sample(now_ms);
            self.swiper.apply_scroll_offset_event_clamped(off, now_ms);
            if tween.is_done(now_ms) {
                self.scroll_tween = None;
                self.swiper.set_is_scrolling(false);
            }
            Some(self.swiper.scroll_offset())
        } else {
            None
        };
        self.swiper.tick(now_ms);
        offset
    }

    /// The transform to render card `index` with right now: the live drag,
    /// a sampled snap-back spring, or a sampled dismissal slide.
    pub fn card_transform(&self, index: usize, now_ms: u64) -> CardTransform {
        if let Some((drag_index, transform)) = self.swiper.drag_transform() {
            if drag_index == index {
                return transform;
            }
        }
        if let Some(snap_back) = self.swiper.snap_back() {
            if snap_back.index == index {
                let spring = Spring::new(
                    snap_back.damping,
                    snap_back.initial_velocity,
                    snap_back.started_at_ms,
                    snap_back.duration_ms,
                );
                let factor = spring.sample(now_ms);
                return CardTransform {
                    angle: snap_back.from.angle * factor,
                    translation_x: snap_back.from.translation_x * factor,
                };
            }
        }
        if let Some(dismissal) = self.swiper.dismissal() {
            if dismissal.index == index {
                let elapsed = now_ms.saturating_sub(dismissal.started_at_ms);
                let t = (elapsed as f32 / dismissal.duration_ms as f32).clamp(0.0, 1.0);
                return CardTransform {
                    angle: dismissal.angle,
                    translation_x: dismissal.from.translation_x
                        + (dismissal.target_translation_x - dismissal.from.translation_x) * t,
                };
            }
        }
        CardTransform::IDENTITY
    }
}
