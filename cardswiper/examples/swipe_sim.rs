// Example: a simulated drag past the dismissal threshold, played out over
// ticks.
use cardswiper::{CardSwiper, GesturePhase, PanState, Point, Size, SwiperOptions};

fn pan(phase: GesturePhase, x: f32, translation_x: f32) -> PanState {
    PanState {
        phase,
        location: Point::new(x, 300.0),
        translation: Point::new(translation_x, 0.0),
        velocity: Point::new(6.0, 0.5),
    }
}

fn main() {
    let mut swiper = CardSwiper::new(
        SwiperOptions::new(5)
            .with_initial_viewport(Some(Size::new(400.0, 800.0)))
            .with_on_will_swipe_card_away(Some(|index, direction| {
                println!("will swipe away: card {index} ({direction:?})");
            }))
            .with_on_did_swipe_card_away(Some(|index, direction| {
                println!("did swipe away: card {index} ({direction:?})");
            })),
    );

    swiper.handle_pan(pan(GesturePhase::Began, 200.0, 0.0), 0);
    for step in 1u64..=10 {
        let translation_x = step as f32 * 20.0;
        swiper.handle_pan(pan(GesturePhase::Changed, 200.0 + translation_x, translation_x), step * 16);
        if let Some((index, transform)) = swiper.drag_transform() {
            println!(
                "dragging card {index}: tx={:.0} angle={:.3}",
                transform.translation_x, transform.angle
            );
        }
    }
    swiper.handle_pan(pan(GesturePhase::Ended, 400.0, 200.0), 176);

    // The removal resolves once the off-screen animation window elapses.
    for now_ms in [200, 300, 400] {
        swiper.tick(now_ms);
    }
    println!("cards left: {}", swiper.number_of_cards());
}
