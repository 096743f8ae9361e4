use alloc::sync::Arc;

use crate::swiper::CardSwiper;
use crate::{GesturePhase, Size, SwipeDirection};

/// A callback fired when the swiper's internal state changes.
pub type OnChangeCallback = Arc<dyn Fn(&CardSwiper) + Send + Sync>;

/// Datasource hook: the number of cards backing the swiper.
///
/// Queried at construction and by `reload_data`; insert/delete/move keep the
/// cached count in sync in between.
pub type NumberOfCardsCallback = Arc<dyn Fn() -> usize + Send + Sync>;

/// Per-card size override. Return `None` to use the default card size.
pub type SizeForCardCallback = Arc<dyn Fn(usize) -> Option<Size> + Send + Sync>;

/// Fired right before a card animates off screen. At this point there is no
/// way back; this is the last chance to reference the item.
pub type WillSwipeCardAwayCallback = Arc<dyn Fn(usize, SwipeDirection) + Send + Sync>;

/// Fired after a card has animated off screen and its index was removed.
pub type DidSwipeCardAwayCallback = Arc<dyn Fn(usize, SwipeDirection) + Send + Sync>;

/// Fired while the user drags a card to a side.
pub type DidDragCardCallback = Arc<dyn Fn(usize, SwipeDirection) + Send + Sync>;

/// Fired when a drag ends below the dismissal threshold and the card snaps
/// back to its resting position.
pub type DidCancelSwipeCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub type DidTapCardCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub type DidHoldCardCallback = Arc<dyn Fn(usize, GesturePhase) + Send + Sync>;

pub type DidScrollCallback = Arc<dyn Fn() + Send + Sync>;

pub type DidEndScrollCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::CardSwiper`].
///
/// This type is designed to be cheap to clone: callbacks are stored in
/// `Arc`s so adapters can update a few fields and call
/// `CardSwiper::set_options` without reallocating closures.
#[derive(Clone)]
pub struct SwiperOptions {
    /// The number of cards.
    pub count: usize,

    /// Enables swiping cards away sideways.
    pub is_side_swiping_enabled: bool,
    /// Spacing above the focused card.
    pub top_inset: f32,
    /// Spacing at each side of a card.
    pub side_inset: f32,
    /// How much of the next card peeks out below the focused one.
    pub visible_next_card_height: f32,
    /// Vertical gap between the natural positions of consecutive cards.
    pub card_spacing: f32,
    /// Scale falloff applied to the focused card while the next one arrives.
    pub first_item_transform: f32,
    /// Snaps scrolling to one card per page.
    pub is_paging_enabled: bool,
    /// Enables the stacked-cards background effect.
    pub is_stacking_enabled: bool,
    /// Whether stacked-behind cards shift down (toward the deck) or up.
    pub is_stack_on_bottom: bool,
    /// How many cards of the stack stay visible behind the focused card.
    pub stacked_cards_count: usize,

    /// The initial viewport, if known up front.
    pub initial_viewport: Option<Size>,
    /// The initial scroll offset. `None` resolves to the rest offset of
    /// card 0 (`-top_inset`).
    pub initial_offset: Option<f32>,

    /// Debounced fallback duration for resetting `is_scrolling`.
    pub is_scrolling_reset_delay_ms: u64,

    pub number_of_cards: Option<NumberOfCardsCallback>,
    pub size_for_card: Option<SizeForCardCallback>,
    /// Optional callback fired when the swiper's internal state changes.
    pub on_change: Option<OnChangeCallback>,
    pub on_will_swipe_card_away: Option<WillSwipeCardAwayCallback>,
    pub on_did_swipe_card_away: Option<DidSwipeCardAwayCallback>,
    pub on_did_drag_card: Option<DidDragCardCallback>,
    pub on_did_cancel_swipe: Option<DidCancelSwipeCallback>,
    pub on_did_tap_card: Option<DidTapCardCallback>,
    pub on_did_hold_card: Option<DidHoldCardCallback>,
    pub on_did_scroll: Option<DidScrollCallback>,
    pub on_did_end_scroll: Option<DidEndScrollCallback>,
}

impl SwiperOptions {
    /// Creates options for a deck of `count` cards with the stock layout
    /// parameters.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            is_side_swiping_enabled: true,
            top_inset: 40.0,
            side_inset: 20.0,
            visible_next_card_height: 50.0,
            card_spacing: 40.0,
            first_item_transform: 0.05,
            is_paging_enabled: true,
            is_stacking_enabled: true,
            is_stack_on_bottom: true,
            stacked_cards_count: 1,
            initial_viewport: None,
            initial_offset: None,
            is_scrolling_reset_delay_ms: 150,
            number_of_cards: None,
            size_for_card: None,
            on_change: None,
            on_will_swipe_card_away: None,
            on_did_swipe_card_away: None,
            on_did_drag_card: None,
            on_did_cancel_swipe: None,
            on_did_tap_card: None,
            on_did_hold_card: None,
            on_did_scroll: None,
            on_did_end_scroll: None,
        }
    }

    pub fn with_side_swiping_enabled(mut self, enabled: bool) -> Self {
        self.is_side_swiping_enabled = enabled;
        self
    }

    pub fn with_top_inset(mut self, top_inset: f32) -> Self {
        self.top_inset = top_inset;
        self
    }

    pub fn with_side_inset(mut self, side_inset: f32) -> Self {
        self.side_inset = side_inset;
        self
    }

    pub fn with_visible_next_card_height(mut self, height: f32) -> Self {
        self.visible_next_card_height = height;
        self
    }

    pub fn with_card_spacing(mut self, card_spacing: f32) -> Self {
        self.card_spacing = card_spacing;
        self
    }

    pub fn with_first_item_transform(mut self, first_item_transform: f32) -> Self {
        self.first_item_transform = first_item_transform;
        self
    }

    pub fn with_paging_enabled(mut self, enabled: bool) -> Self {
        self.is_paging_enabled = enabled;
        self
    }

    pub fn with_stacking_enabled(mut self, enabled: bool) -> Self {
        self.is_stacking_enabled = enabled;
        self
    }

    pub fn with_stack_on_bottom(mut self, on_bottom: bool) -> Self {
        self.is_stack_on_bottom = on_bottom;
        self
    }

    pub fn with_stacked_cards_count(mut self, stacked_cards_count: usize) -> Self {
        self.stacked_cards_count = stacked_cards_count;
        self
    }

    /// Sets the initial viewport size.
    pub fn with_initial_viewport(mut self, initial_viewport: Option<Size>) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: Option<f32>) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_number_of_cards(
        mut self,
        number_of_cards: Option<impl Fn() -> usize + Send + Sync + 'static>,
    ) -> Self {
        self.number_of_cards = number_of_cards.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_size_for_card(
        mut self,
        size_for_card: Option<impl Fn(usize) -> Option<Size> + Send + Sync + 'static>,
    ) -> Self {
        self.size_for_card = size_for_card.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&CardSwiper) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_will_swipe_card_away(
        mut self,
        f: Option<impl Fn(usize, SwipeDirection) + Send + Sync + 'static>,
    ) -> Self {
        self.on_will_swipe_card_away = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_swipe_card_away(
        mut self,
        f: Option<impl Fn(usize, SwipeDirection) + Send + Sync + 'static>,
    ) -> Self {
        self.on_did_swipe_card_away = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_drag_card(
        mut self,
        f: Option<impl Fn(usize, SwipeDirection) + Send + Sync + 'static>,
    ) -> Self {
        self.on_did_drag_card = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_cancel_swipe(
        mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_did_cancel_swipe = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_tap_card(
        mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_did_tap_card = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_hold_card(
        mut self,
        f: Option<impl Fn(usize, GesturePhase) + Send + Sync + 'static>,
    ) -> Self {
        self.on_did_hold_card = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_scroll(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_did_scroll = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_end_scroll(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_did_end_scroll = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for SwiperOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwiperOptions")
            .field("count", &self.count)
            .field("is_side_swiping_enabled", &self.is_side_swiping_enabled)
            .field("top_inset", &self.top_inset)
            .field("side_inset", &self.side_inset)
            .field("visible_next_card_height", &self.visible_next_card_height)
            .field("card_spacing", &self.card_spacing)
            .field("first_item_transform", &self.first_item_transform)
            .field("is_paging_enabled", &self.is_paging_enabled)
            .field("is_stacking_enabled", &self.is_stacking_enabled)
            .field("is_stack_on_bottom", &self.is_stack_on_bottom)
            .field("stacked_cards_count", &self.stacked_cards_count)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
