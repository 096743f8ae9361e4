use alloc::vec::Vec;
use core::cell::Cell;
use core::ops::Range;

use crate::layout;
use crate::swipe::{self, Dismissal, DragSession, ReleaseOutcome, SnapBack};
use crate::{
    CardAttributes, CardTransform, GesturePhase, PanDirection, PanState, Point, Rect, Size,
    SwipeDirection, SwiperOptions,
};

/// A headless vertical card swiper.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with viewport geometry, scroll offsets, pointer
///   samples and millisecond timestamps.
/// - Rendering reads the attribute queries (`for_each_visible_card`,
///   `attributes_for_card`) plus the drag/snap-back/dismissal records.
///
/// Set the viewport (via options or [`CardSwiper::set_viewport`]) before
/// driving gestures; with a zero viewport every query degrades to an empty
/// result.
///
/// For gesture arbitration, paging tweens and spring sampling, see the
/// `cardswiper-adapter` crate.
#[derive(Clone, Debug)]
pub struct CardSwiper {
    options: SwiperOptions,
    viewport: Size,
    scroll_offset: f32,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,

    drag: Option<DragSession>,
    snap_back: Option<SnapBack>,
    dismissal: Option<Dismissal>,
    /// Cleared for the will→did dismissal window so no second drag can start
    /// while a removal is in flight.
    interaction_enabled: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl CardSwiper {
    /// Creates a new swiper from options.
    ///
    /// When `options.number_of_cards` is set, the count is resolved from it
    /// immediately. `options.initial_viewport`/`initial_offset` are applied
    /// as given; a missing initial offset resolves to card 0's rest offset.
    pub fn new(mut options: SwiperOptions) -> Self {
        if let Some(count_fn) = &options.number_of_cards {
            options.count = count_fn();
        }
        let viewport = options.initial_viewport.unwrap_or_default();
        let scroll_offset = options.initial_offset.unwrap_or(-options.top_inset);
        csdebug!(count = options.count, "CardSwiper::new");
        Self {
            viewport,
            scroll_offset,
            is_scrolling: false,
            last_scroll_event_ms: None,
            drag: None,
            snap_back: None,
            dismissal: None,
            interaction_enabled: true,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &SwiperOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SwiperOptions) {
        self.options = options;
        cstrace!(count = self.options.count, "CardSwiper::set_options");
        self.clamp_state_to_count();
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SwiperOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters: on a typical frame you might update the
    /// viewport, scroll offset, and gesture state together, and an
    /// `on_change` callback that drives rendering should fire once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    // Explicit setters recompute nothing eagerly: all derived geometry is a
    // pure function of options + viewport + offset, so the next query
    // already reflects the change.

    pub fn set_side_swiping_enabled(&mut self, enabled: bool) {
        self.options.is_side_swiping_enabled = enabled;
        if !enabled {
            self.drag = None;
        }
        self.notify();
    }

    pub fn set_top_inset(&mut self, top_inset: f32) {
        self.options.top_inset = top_inset;
        self.notify();
    }

    pub fn set_side_inset(&mut self, side_inset: f32) {
        self.options.side_inset = side_inset;
        self.notify();
    }

    pub fn set_visible_next_card_height(&mut self, height: f32) {
        self.options.visible_next_card_height = height;
        self.notify();
    }

    pub fn set_card_spacing(&mut self, card_spacing: f32) {
        self.options.card_spacing = card_spacing;
        self.notify();
    }

    pub fn set_first_item_transform(&mut self, first_item_transform: f32) {
        self.options.first_item_transform = first_item_transform;
        self.notify();
    }

    pub fn set_paging_enabled(&mut self, enabled: bool) {
        self.options.is_paging_enabled = enabled;
        self.notify();
    }

    pub fn set_stacking_enabled(&mut self, enabled: bool) {
        self.options.is_stacking_enabled = enabled;
        self.notify();
    }

    pub fn set_stack_on_bottom(&mut self, on_bottom: bool) {
        self.options.is_stack_on_bottom = on_bottom;
        self.notify();
    }

    pub fn set_stacked_cards_count(&mut self, stacked_cards_count: usize) {
        self.options.stacked_cards_count = stacked_cards_count;
        self.notify();
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.notify();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        if self.scroll_offset == offset {
            return;
        }
        self.scroll_offset = offset;
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: f32) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from your UI layer (wheel/drag), marks
    /// the swiper as scrolling, and reports the scroll to the observer.
    pub fn apply_scroll_offset_event(&mut self, offset: f32, now_ms: u64) {
        cstrace!(
            offset = offset as f64,
            now_ms,
            "apply_scroll_offset_event"
        );
        self.batch_update(|s| {
            s.set_scroll_offset(offset);
            s.notify_scroll_event(now_ms);
        });
        if let Some(cb) = self.options.on_did_scroll.clone() {
            cb();
        }
    }

    /// Same as `apply_scroll_offset_event`, but clamps the offset to the
    /// deck's scrollable range.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: f32, now_ms: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.apply_scroll_offset_event(clamped, now_ms);
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Flips the scrolling flag; the transition to `false` reports the end
    /// of scrolling to the observer.
    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.last_scroll_event_ms = None;
            if let Some(cb) = self.options.on_did_end_scroll.clone() {
                cb();
            }
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Debounced fallback that resets `is_scrolling` once no scroll event
    /// arrived for `is_scrolling_reset_delay_ms`.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Height of the default (reference) card for the current viewport.
    pub fn cell_height(&self) -> f32 {
        layout::default_cell_size(&self.options, self.viewport).height
    }

    /// Vertical distance between the natural tops of consecutive cards.
    pub fn page_height(&self) -> f32 {
        layout::page_height(&self.options, self.cell_height())
    }

    /// The region within which a horizontal drag is read as a dismiss
    /// gesture rather than a scroll (view coordinates).
    pub fn swipeable_area(&self) -> Rect {
        layout::swipeable_area(&self.options, self.viewport, self.cell_height())
    }

    pub fn min_scroll_offset(&self) -> f32 {
        -self.options.top_inset
    }

    pub fn max_scroll_offset(&self) -> f32 {
        let min = self.min_scroll_offset();
        if self.options.count == 0 {
            return min;
        }
        let max = layout::offset_for_index(&self.options, self.cell_height(), self.options.count - 1);
        if max > min { max } else { min }
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        offset.clamp(self.min_scroll_offset(), self.max_scroll_offset())
    }

    /// Target offset for a paging release (drag release or momentum settle).
    /// Pure with respect to the page geometry, then clamped to the deck's
    /// scrollable range.
    pub fn paging_target_offset(&self, proposed_offset: f32, velocity_y: f32) -> f32 {
        let target = layout::target_content_offset(
            &self.options,
            self.cell_height(),
            self.scroll_offset,
            proposed_offset,
            velocity_y,
        );
        self.clamp_scroll_offset(target)
    }

    /// The rest offset for card `index`, or `None` out of range.
    pub fn scroll_to_card_offset(&self, index: usize) -> Option<f32> {
        if index >= self.options.count {
            return None;
        }
        let offset = layout::offset_for_index(&self.options, self.cell_height(), index);
        Some(self.clamp_scroll_offset(offset))
    }

    /// Scrolls so card `index` rests under the top inset. Out-of-range is a
    /// no-op. Returns the applied offset.
    ///
    /// For an animated move, see `Controller::scroll_to_card` in the adapter
    /// crate.
    pub fn scroll_to_card(&mut self, index: usize) -> Option<f32> {
        let target = self.scroll_to_card_offset(index)?;
        self.set_scroll_offset(target);
        Some(target)
    }

    pub fn number_of_cards(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.clamp_state_to_count();
        self.notify();
    }

    /// Re-resolves the card count from the datasource callback and resets
    /// transient gesture state.
    pub fn reload_data(&mut self) {
        if let Some(count_fn) = self.options.number_of_cards.clone() {
            self.options.count = count_fn();
        }
        csdebug!(count = self.options.count, "reload_data");
        self.drag = None;
        self.snap_back = None;
        if self.dismissal.take().is_some() {
            self.interaction_enabled = true;
        }
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        self.notify();
    }

    /// Inserts cards at `indexes` (positions in the post-insert deck). The
    /// datasource's backing collection must already contain the new items.
    /// Out-of-range positions are silently dropped.
    pub fn insert_cards(&mut self, indexes: &[usize]) {
        if indexes.is_empty() {
            return;
        }
        let new_count = self.options.count + indexes.len();
        let inserted = indexes.iter().filter(|&&i| i < new_count).count();
        if inserted < indexes.len() {
            cswarn!(
                dropped = indexes.len() - inserted,
                "insert_cards: out-of-range positions dropped"
            );
        }
        if inserted == 0 {
            return;
        }
        self.cancel_active_drag();
        self.options.count += inserted;
        self.notify();
    }

    /// Deletes the cards at `indexes`. The datasource's backing collection
    /// must already reflect the removal; the remaining cards renumber to a
    /// contiguous `0..count`. Out-of-range and duplicate indexes are
    /// silently dropped.
    pub fn delete_cards(&mut self, indexes: &[usize]) {
        let mut valid: Vec<usize> = indexes
            .iter()
            .copied()
            .filter(|&i| i < self.options.count)
            .collect();
        valid.sort_unstable();
        valid.dedup();
        if valid.len() < indexes.len() {
            cswarn!(
                dropped = indexes.len() - valid.len(),
                "delete_cards: out-of-range or duplicate indexes dropped"
            );
        }
        if valid.is_empty() {
            return;
        }
        self.cancel_active_drag();
        if self.dismissal.is_some_and(|d| valid.contains(&d.index)) {
            // The card of an in-flight dismissal is already gone from the
            // datasource; the removal must not fire a second time.
            self.dismissal = None;
            self.interaction_enabled = true;
        }
        if self.snap_back.is_some_and(|s| valid.contains(&s.index)) {
            self.snap_back = None;
        }
        self.options.count -= valid.len();
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        self.notify();
    }

    /// Moves a card. The deck itself is owned by the datasource, so a move
    /// only needs a relayout here. No-op when either index is out of range.
    pub fn move_card(&mut self, from: usize, to: usize) {
        if from >= self.options.count || to >= self.options.count || from == to {
            return;
        }
        self.cancel_active_drag();
        self.notify();
    }

    fn cancel_active_drag(&mut self) {
        // A batch mutation invalidates the session's index mapping; the
        // session is discarded rather than resolved.
        self.drag = None;
    }

    fn clamp_state_to_count(&mut self) {
        let count = self.options.count;
        if self.drag.is_some_and(|s| s.index >= count) {
            self.drag = None;
        }
        if self.snap_back.is_some_and(|s| s.index >= count) {
            self.snap_back = None;
        }
        if self.dismissal.is_some_and(|d| d.index >= count) {
            self.dismissal = None;
            self.interaction_enabled = true;
        }
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    /// Layout attributes for card `index`, or `None` out of range.
    pub fn attributes_for_card(&self, index: usize) -> Option<CardAttributes> {
        if index >= self.options.count {
            return None;
        }
        Some(layout::attributes_for_item(
            &self.options,
            self.viewport,
            self.scroll_offset,
            self.cell_height(),
            index,
        ))
    }

    /// The currently realized card indices: the visible cards plus the stack
    /// pinned behind the focused one.
    pub fn realized_range(&self) -> Range<usize> {
        layout::realized_range(&self.options, self.viewport, self.scroll_offset, self.cell_height())
    }

    pub fn for_each_visible_card(&self, mut f: impl FnMut(CardAttributes)) {
        let cell_height = self.cell_height();
        for index in
            layout::realized_range(&self.options, self.viewport, self.scroll_offset, cell_height)
        {
            f(layout::attributes_for_item(
                &self.options,
                self.viewport,
                self.scroll_offset,
                cell_height,
                index,
            ));
        }
    }

    /// Collects the visible cards' attributes into `out` (clears `out`
    /// first).
    pub fn collect_visible_cards(&self, out: &mut Vec<CardAttributes>) {
        out.clear();
        self.for_each_visible_card(|attributes| out.push(attributes));
    }

    /// The index whose card sits at the viewport's geometric center.
    pub fn focused_card_index(&self) -> Option<usize> {
        let center = Point::new(
            self.viewport.width / 2.0,
            self.scroll_offset + self.viewport.height / 2.0,
        );
        let cell_height = self.cell_height();
        // Topmost card wins: pinned cards share the focused card's position
        // but draw underneath it.
        layout::realized_range(&self.options, self.viewport, self.scroll_offset, cell_height)
            .rev()
            .find(|&index| {
                layout::attributes_for_item(
                    &self.options,
                    self.viewport,
                    self.scroll_offset,
                    cell_height,
                    index,
                )
                .frame
                .contains(center)
            })
    }

    /// The realized indices, without the card stacked directly underneath
    /// the focused one (it is mostly hidden) once more than two cards are
    /// realized.
    pub fn visible_card_indexes(&self) -> Vec<usize> {
        let mut indexes: Vec<usize> = self.realized_range().collect();
        if indexes.len() > 2 {
            if let Some(focused) = self.focused_card_index() {
                if let Some(under) = focused.checked_sub(1) {
                    indexes.retain(|&i| i != under);
                }
            }
        }
        indexes
    }

    /// The card at a view-space location, topmost first.
    pub fn card_index_at(&self, location: Point) -> Option<usize> {
        let content = Point::new(location.x, location.y + self.scroll_offset);
        let cell_height = self.cell_height();
        layout::realized_range(&self.options, self.viewport, self.scroll_offset, cell_height)
            .rev()
            .find(|&index| {
                layout::attributes_for_item(
                    &self.options,
                    self.viewport,
                    self.scroll_offset,
                    cell_height,
                    index,
                )
                .frame
                .contains(content)
            })
    }

    fn view_frame_of(&self, index: usize) -> Option<Rect> {
        let attributes = self.attributes_for_card(index)?;
        let mut frame = attributes.frame;
        frame.origin.y -= self.scroll_offset;
        Some(frame)
    }

    fn center_x(&self) -> f32 {
        self.viewport.width / 2.0
    }

    /// Whether a pan at `location` with `velocity` should be claimed by the
    /// swipe machine, suppressing the host's vertical scroll for this touch
    /// sequence.
    pub fn should_claim_pan(&self, location: Point, velocity: Point) -> bool {
        self.options.is_side_swiping_enabled
            && self.interaction_enabled
            && !self.is_scrolling
            && PanDirection::from_velocity(velocity).is_horizontal()
            && self.swipeable_area().contains(location)
    }

    /// Drives the drag state machine with one pan sample.
    ///
    /// A session starts when a sample lands inside the swipe-able area over
    /// a card while the deck is not scrolling; it resolves on `Ended` into a
    /// snap-back or a dismissal, and on `Cancelled` always into a snap-back.
    pub fn handle_pan(&mut self, pan: PanState, now_ms: u64) {
        if self.options.count == 0 {
            return;
        }
        if !self.options.is_side_swiping_enabled || !self.interaction_enabled {
            return;
        }

        if self.drag.is_none()
            && !self.is_scrolling
            && self.swipeable_area().contains(pan.location)
        {
            if let Some(index) = self.card_index_at(pan.location) {
                if let Some(frame) = self.view_frame_of(index) {
                    csdebug!(index, "drag began");
                    self.drag = Some(DragSession::begin(index, frame, pan.location));
                }
            }
        }

        let Some(mut session) = self.drag else {
            return;
        };
        match pan.phase {
            GesturePhase::Began => {}
            GesturePhase::Changed => {
                session.translation_x = pan.translation.x;
                session.angle =
                    swipe::rotation_angle(session.translation_x, session.card_frame.size.width);
                self.drag = Some(session);
                let direction = swipe::swipe_direction(session.current_mid_x(), self.center_x());
                if let Some(cb) = self.options.on_did_drag_card.clone() {
                    cb(session.index, direction);
                }
                self.notify();
            }
            GesturePhase::Ended => {
                self.drag = None;
                let outcome = swipe::release_outcome(
                    session.current_mid_x(),
                    self.center_x(),
                    session.card_frame.size.width,
                );
                match outcome {
                    ReleaseOutcome::SnapBack => self.start_snap_back(session, now_ms),
                    ReleaseOutcome::Dismiss(direction) => {
                        csdebug!(index = session.index, "drag dismissed");
                        self.start_dismissal(
                            session.index,
                            direction,
                            session.transform(),
                            session.angle,
                            session.card_frame.size.width,
                            now_ms,
                        );
                    }
                }
            }
            GesturePhase::Cancelled => {
                self.drag = None;
                self.start_snap_back(session, now_ms);
            }
        }
    }

    fn start_snap_back(&mut self, session: DragSession, now_ms: u64) {
        self.snap_back = Some(swipe::snap_back_for(session.index, session.transform(), now_ms));
        if let Some(cb) = self.options.on_did_cancel_swipe.clone() {
            cb(session.index);
        }
        self.notify();
    }

    fn start_dismissal(
        &mut self,
        index: usize,
        direction: SwipeDirection,
        from: CardTransform,
        angle: f32,
        card_width: f32,
        now_ms: u64,
    ) {
        // `will` fires before any dismissal state exists, so the observer
        // can still reach the item.
        if let Some(cb) = self.options.on_will_swipe_card_away.clone() {
            cb(index, direction);
        }
        self.interaction_enabled = false;
        self.dismissal = Some(swipe::dismissal_for(
            index, direction, from, angle, card_width, now_ms,
        ));
        self.notify();
    }

    /// Animates card `index` off screen as if swiped.
    ///
    /// No-op when the index is not currently realized, a drag or dismissal
    /// is already active, or `direction` is `None`.
    pub fn swipe_card_away(&mut self, index: usize, direction: SwipeDirection, now_ms: u64) {
        if direction == SwipeDirection::None {
            cswarn!(index, "swipe_card_away: direction None is a no-op");
            return;
        }
        if !self.realized_range().contains(&index) {
            return;
        }
        if self.drag.is_some() || self.dismissal.is_some() || !self.interaction_enabled {
            return;
        }
        let angle = match direction {
            SwipeDirection::Left => -swipe::PROGRAMMATIC_ANGLE,
            _ => swipe::PROGRAMMATIC_ANGLE,
        };
        let card_width = self
            .attributes_for_card(index)
            .map(|a| a.frame.size.width)
            .unwrap_or_default();
        self.start_dismissal(index, direction, CardTransform::IDENTITY, angle, card_width, now_ms);
    }

    /// Reports a tap at a view-space location to the observer.
    pub fn handle_tap(&mut self, location: Point) {
        if !self.interaction_enabled {
            return;
        }
        if let Some(index) = self.card_index_at(location) {
            if let Some(cb) = self.options.on_did_tap_card.clone() {
                cb(index);
            }
        }
    }

    /// Reports a long-press at a view-space location to the observer.
    pub fn handle_hold(&mut self, location: Point, phase: GesturePhase) {
        if !self.interaction_enabled {
            return;
        }
        if let Some(index) = self.card_index_at(location) {
            if let Some(cb) = self.options.on_did_hold_card.clone() {
                cb(index, phase);
            }
        }
    }

    /// Advances time-based state: finishes dismissals (removing the card's
    /// index and reporting it), clears settled snap-backs, and debounces the
    /// scrolling flag. Adapters call this once per frame or timer tick.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(d) = self.dismissal {
            if d.is_done(now_ms) {
                self.dismissal = None;
                self.interaction_enabled = true;
                // Single-item batch removal: the count changes before the
                // observer hears about it.
                self.options.count = self.options.count.saturating_sub(1);
                self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
                csdebug!(index = d.index, "card swiped away");
                if let Some(cb) = self.options.on_did_swipe_card_away.clone() {
                    cb(d.index, d.direction);
                }
                self.notify();
            }
        }
        if let Some(sb) = self.snap_back {
            if sb.is_done(now_ms) {
                self.snap_back = None;
                self.notify();
            }
        }
        self.update_scrolling(now_ms);
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// The transform a live drag currently applies to its card.
    pub fn drag_transform(&self) -> Option<(usize, CardTransform)> {
        self.drag.map(|s| (s.index, s.transform()))
    }

    pub fn dismissal(&self) -> Option<&Dismissal> {
        self.dismissal.as_ref()
    }

    pub fn snap_back(&self) -> Option<&SnapBack> {
        self.snap_back.as_ref()
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }
}
