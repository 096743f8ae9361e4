//! Geometry and paging for the stacked-card flow layout.
//!
//! Everything here is a pure function of the current options, viewport and
//! scroll offset. The swiper recomputes attributes on every query, so a
//! bounds or configuration change (including the scale applied to the
//! focused card) is reflected synchronously with no stale cache.
//!
//! Coordinates: content space puts card 0's natural top at y = 0 and the
//! scroll offset at the viewport's top edge, so the rest offset of page `i`
//! is `i * page_height - top_inset` (negative at the top of the deck).

use core::ops::Range;

use crate::fmath;
use crate::{CardAttributes, Rect, Size, SwiperOptions};

/// Vertical distance between the natural tops of consecutive cards.
pub(crate) fn page_height(options: &SwiperOptions, cell_height: f32) -> f32 {
    cell_height + options.card_spacing
}

/// The default card size for a viewport: full width minus the side insets,
/// and a height that leaves room for the top inset, the card spacing and
/// the next-card peek.
pub(crate) fn default_cell_size(options: &SwiperOptions, viewport: Size) -> Size {
    Size::new(
        viewport.width - options.side_inset * 2.0,
        viewport.height
            - options.card_spacing
            - options.visible_next_card_height
            - options.top_inset,
    )
}

/// The size of the card at `index`, honoring the `size_for_card` override.
///
/// Insets are subtracted from an override only where the result stays
/// positive.
pub(crate) fn cell_size(options: &SwiperOptions, viewport: Size, index: usize) -> Size {
    let default = default_cell_size(options, viewport);
    let Some(custom) = options.size_for_card.as_ref().and_then(|f| f(index)) else {
        return default;
    };
    let h_inset = options.side_inset * 2.0;
    let v_inset = options.card_spacing + options.visible_next_card_height + options.top_inset;
    Size::new(
        if custom.width - h_inset > 0.0 {
            custom.width - h_inset
        } else {
            custom.width
        },
        if custom.height - v_inset > 0.0 {
            custom.height - v_inset
        } else {
            custom.height
        },
    )
}

/// Natural (un-pinned) top edge of card `index` in content coordinates.
///
/// Per-index size overrides change a card's frame size only; the natural
/// grid stays uniform so paging and flow positions agree.
pub(crate) fn natural_min_y(options: &SwiperOptions, cell_height: f32, index: usize) -> f32 {
    index as f32 * page_height(options, cell_height)
}

/// Computes the layout attributes for one card.
pub(crate) fn attributes_for_item(
    options: &SwiperOptions,
    viewport: Size,
    scroll_offset: f32,
    cell_height: f32,
    index: usize,
) -> CardAttributes {
    let size = cell_size(options, viewport, index);

    // A card's top edge may never scroll above the viewport's top inset; it
    // pins there while the next card arrives.
    let cv_min_y = scroll_offset + options.top_inset;
    let card_min_y = natural_min_y(options, cell_height, index);
    let final_y = cv_min_y.max(card_min_y);

    // Normalized distance the card has been pushed down from its natural
    // position: 0 while it scrolls normally, growing once it is pinned.
    let delta_y = if size.height > 0.0 {
        (final_y - card_min_y) / size.height
    } else {
        0.0
    };

    let scale = (1.0 - delta_y * options.first_item_transform).max(0.0);
    let translation_y = if options.is_stacking_enabled {
        let direction = if options.is_stack_on_bottom { 1.0 } else { -1.0 };
        direction * delta_y * 10.0 * (index + 1) as f32
    } else {
        0.0
    };
    let alpha = (1.0 - (delta_y - options.stacked_cards_count as f32)).clamp(0.0, 1.0);

    let x = viewport.width / 2.0 - size.width / 2.0;
    CardAttributes {
        index,
        frame: Rect::new(x, final_y, size.width, size.height),
        scale,
        translation_y,
        alpha,
        z_index: index,
    }
}

/// The range of indices realized for the current scroll position: every card
/// intersecting the viewport, extended upward so the cards stacked behind
/// the focused one stay alive.
pub(crate) fn realized_range(
    options: &SwiperOptions,
    viewport: Size,
    scroll_offset: f32,
    cell_height: f32,
) -> Range<usize> {
    let count = options.count;
    let ph = page_height(options, cell_height);
    if count == 0 || viewport.height <= 0.0 || ph <= 0.0 {
        return 0..0;
    }

    let lo = scroll_offset - cell_height * options.stacked_cards_count as f32;
    let hi = scroll_offset + viewport.height;

    // First card whose natural bottom reaches past `lo`, last whose natural
    // top lies before `hi`.
    let first = fmath::floor((lo - cell_height) / ph) + 1.0;
    let last = fmath::floor(hi / ph);

    let first = if first < 0.0 { 0 } else { first as usize };
    if last < 0.0 {
        return 0..0;
    }
    let last = (last as usize).min(count - 1);
    if first > last {
        return 0..0;
    }
    first..last + 1
}

/// Target offset for a paging release.
///
/// Estimates the current page from the offset, rounds it toward the release
/// direction, and adds whole pages for a genuine flick; a single small flick
/// never skips a page. Pure in (offset, velocity, page geometry) so drag
/// releases and momentum settles resolve identically.
pub(crate) fn target_content_offset(
    options: &SwiperOptions,
    cell_height: f32,
    current_offset: f32,
    proposed_offset: f32,
    velocity_y: f32,
) -> f32 {
    if !options.is_paging_enabled {
        return proposed_offset;
    }
    let ph = page_height(options, cell_height);
    if ph <= 0.0 {
        return proposed_offset;
    }

    let approximate_page = current_offset / ph;
    let current_page = if velocity_y == 0.0 {
        fmath::round(approximate_page)
    } else if velocity_y < 0.0 {
        fmath::floor(approximate_page)
    } else {
        fmath::ceil(approximate_page)
    };

    let flick_velocity = velocity_y * 0.3;
    let flicked_pages = if fmath::abs(fmath::round(flick_velocity)) <= 1.0 {
        0.0
    } else {
        fmath::round(flick_velocity)
    };

    (current_page + flicked_pages) * ph - options.top_inset
}

/// The rest offset that aligns card `index` under the top inset.
pub(crate) fn offset_for_index(options: &SwiperOptions, cell_height: f32, index: usize) -> f32 {
    index as f32 * page_height(options, cell_height) - options.top_inset
}

/// The region (view coordinates) within which a horizontal drag is read as
/// a dismiss gesture rather than a scroll.
pub(crate) fn swipeable_area(options: &SwiperOptions, viewport: Size, cell_height: f32) -> Rect {
    Rect::new(0.0, options.top_inset, viewport.width, cell_height)
}
