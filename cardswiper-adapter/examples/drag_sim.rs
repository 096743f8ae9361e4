// Example: controller-driven arbitration, paging, and transform sampling.
use cardswiper::{GesturePhase, PanState, Point, Size, SwipeDirection, SwiperOptions};
use cardswiper_adapter::{Controller, PanRouting};

fn pan(phase: GesturePhase, translation_x: f32, velocity: Point) -> PanState {
    PanState {
        phase,
        location: Point::new(200.0 + translation_x, 300.0),
        translation: Point::new(translation_x, 0.0),
        velocity,
    }
}

fn main() {
    let mut controller = Controller::new(
        SwiperOptions::new(8).with_initial_viewport(Some(Size::new(400.0, 800.0))),
    );

    // A vertical pan is left to the host's scroller.
    let routing = controller.on_pan(pan(GesturePhase::Began, 0.0, Point::new(1.0, 8.0)), 0);
    println!("vertical pan routed to: {routing:?}");
    assert_eq!(routing, PanRouting::Scroll);

    // The host scrolls, releases, and the controller snaps to a page.
    controller.on_scroll(500.0, 0);
    let target = controller.on_scroll_drag_end(500.0, 0.8, 50);
    println!("paging target: {target}");
    let mut now_ms = 50;
    while controller.is_animating() {
        now_ms += 16;
        if let Some(offset) = controller.tick(now_ms) {
            println!("tween offset: {offset:.1}");
        }
    }

    // A programmatic dismissal, sampled per frame.
    controller
        .swiper_mut()
        .swipe_card_away(1, SwipeDirection::Left, now_ms);
    for frame in 0u64..5 {
        let sample_ms = now_ms + frame * 50;
        let transform = controller.card_transform(1, sample_ms);
        println!(
            "dismissal frame {frame}: tx={:.0} angle={:.2}",
            transform.translation_x, transform.angle
        );
        controller.tick(sample_ms);
    }
    println!("cards left: {}", controller.swiper().number_of_cards());
}
