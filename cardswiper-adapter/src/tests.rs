use crate::*;

use cardswiper::{
    CardTransform, GesturePhase, PanState, Point, Size, SwipeDirection, SwiperOptions,
};

fn controller_with(count: usize) -> Controller {
    Controller::new(
        SwiperOptions::new(count).with_initial_viewport(Some(Size::new(400.0, 800.0))),
    )
}

fn pan(phase: GesturePhase, location: Point, translation_x: f32, velocity: Point) -> PanState {
    PanState {
        phase,
        location,
        translation: Point::new(translation_x, 0.0),
        velocity,
    }
}

#[test]
fn controller_claims_horizontal_pans_and_passes_vertical_ones() {
    let mut c = controller_with(3);
    let inside = Point::new(200.0, 300.0);
    let horizontal = Point::new(5.0, 1.0);
    let vertical = Point::new(1.0, 5.0);

    assert_eq!(
        c.on_pan(pan(GesturePhase::Began, inside, 0.0, vertical), 0),
        PanRouting::Scroll
    );
    assert!(c.swiper().drag_session().is_none());

    assert_eq!(
        c.on_pan(pan(GesturePhase::Began, inside, 0.0, horizontal), 0),
        PanRouting::Claimed
    );
    assert!(c.swiper().drag_session().is_some());

    // Once a drag is active the whole touch sequence stays claimed, even if
    // individual samples read as vertical.
    assert_eq!(
        c.on_pan(pan(GesturePhase::Changed, inside, 40.0, vertical), 16),
        PanRouting::Claimed
    );
    assert_eq!(
        c.on_pan(pan(GesturePhase::Ended, inside, 40.0, vertical), 32),
        PanRouting::Claimed
    );
    assert!(c.swiper().drag_session().is_none());
}

#[test]
fn paging_tween_settles_on_a_page_boundary() {
    let mut c = controller_with(10);
    c.on_scroll(500.0, 0);

    let target = c.on_scroll_drag_end(500.0, 0.5, 100);
    assert_eq!(target, 710.0 - 40.0);
    assert!(c.is_animating());

    for now_ms in [150, 200, 250, 300, 350] {
        c.tick(now_ms);
    }
    assert_eq!(c.swiper().scroll_offset(), 670.0);
    assert!(!c.is_animating());
    assert!(!c.swiper().is_scrolling());
}

#[test]
fn snap_back_spring_returns_the_card_to_identity() {
    let mut c = controller_with(3);
    let inside = Point::new(200.0, 300.0);
    let horizontal = Point::new(5.0, 1.0);
    c.on_pan(pan(GesturePhase::Began, inside, 0.0, horizontal), 0);
    c.on_pan(pan(GesturePhase::Changed, inside, 100.0, horizontal), 16);
    c.on_pan(pan(GesturePhase::Ended, inside, 100.0, horizontal), 32);

    let snap_back = c.swiper().snap_back().unwrap();
    assert_eq!(snap_back.index, 0);

    let early = c.card_transform(0, 32);
    assert!((early.translation_x - 100.0).abs() < 1e-3);
    assert!(early.angle > 0.0);

    let mid = c.card_transform(0, 282);
    assert!(mid.translation_x.abs() < 100.0);

    assert_eq!(c.card_transform(0, 532), CardTransform::IDENTITY);
    c.tick(532);
    assert!(c.swiper().snap_back().is_none());
}

#[test]
fn dismissal_transform_slides_off_screen() {
    let mut c = controller_with(3);
    c.swiper_mut().swipe_card_away(0, SwipeDirection::Right, 0);

    let start = c.card_transform(0, 0);
    assert_eq!(start.translation_x, 0.0);
    assert!(start.angle > 0.0);

    let mid = c.card_transform(0, 100);
    assert!((mid.translation_x - 360.0).abs() < 1.0);

    assert_eq!(c.card_transform(0, 200).translation_x, 720.0);

    c.tick(200);
    assert_eq!(c.swiper().number_of_cards(), 2);
    assert_eq!(c.card_transform(0, 200), CardTransform::IDENTITY);
}

#[test]
fn animated_scroll_to_card_runs_across_ticks() {
    let mut c = controller_with(5);
    assert_eq!(c.scroll_to_card(3, true, 0), Some(2090.0));
    assert!(c.is_animating());

    c.tick(150);
    let midway = c.swiper().scroll_offset();
    assert!(midway > -40.0 && midway < 2090.0);

    c.tick(300);
    assert_eq!(c.swiper().scroll_offset(), 2090.0);
    assert!(!c.is_animating());

    assert_eq!(c.scroll_to_card(1, false, 300), Some(670.0));
    assert_eq!(c.swiper().scroll_offset(), 670.0);

    assert_eq!(c.scroll_to_card(9, true, 300), None);
    assert!(!c.is_animating());
}

#[test]
fn passthrough_scrolling_keeps_the_swiper_in_sync() {
    let mut c = controller_with(5);
    c.on_scroll(300.0, 0);
    assert_eq!(c.swiper().scroll_offset(), 300.0);
    assert!(c.swiper().is_scrolling());

    c.tick(200);
    assert!(!c.swiper().is_scrolling());
}

#[test]
fn spring_sampler_is_bounded_and_converges() {
    let spring = Spring::new(0.6, 1.0, 0, 500);
    assert_eq!(spring.sample(0), 1.0);

    let mut now_ms = 0;
    while now_ms <= 500 {
        assert!(spring.sample(now_ms).abs() <= 1.2);
        now_ms += 25;
    }

    assert!(spring.sample(499).abs() < 0.05);
    assert_eq!(spring.sample(500), 0.0);
    assert!(spring.is_done(500));
}

#[test]
fn tween_samples_move_monotonically_between_endpoints() {
    let tween = Tween::new(-40.0, 670.0, 0, 100, Easing::SmoothStep);
    assert_eq!(tween.sample(0), -40.0);
    assert_eq!(tween.sample(100), 670.0);

    let mut last = -40.0;
    for now_ms in [10, 25, 50, 75, 90] {
        let sampled = tween.sample(now_ms);
        assert!(sampled >= last);
        last = sampled;
    }

    let mut retargeted = tween;
    retargeted.retarget(50, 0.0, 100);
    assert_eq!(retargeted.from, tween.sample(50));
    assert_eq!(retargeted.to, 0.0);
}
