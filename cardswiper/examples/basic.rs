// Example: minimal usage and the scroll-to helper.
use cardswiper::{CardSwiper, Size, SwiperOptions};

fn main() {
    let mut swiper = CardSwiper::new(
        SwiperOptions::new(12).with_initial_viewport(Some(Size::new(400.0, 800.0))),
    );

    println!("cards={}", swiper.number_of_cards());
    println!("focused={:?}", swiper.focused_card_index());
    swiper.for_each_visible_card(|a| {
        println!(
            "card {} frame=({:.0},{:.0} {:.0}x{:.0}) scale={:.3} alpha={:.2}",
            a.index,
            a.frame.min_x(),
            a.frame.min_y(),
            a.frame.size.width,
            a.frame.size.height,
            a.scale,
            a.alpha
        );
    });

    swiper.scroll_to_card(4);
    println!("after scroll_to_card(4): offset={}", swiper.scroll_offset());
    println!("focused={:?}", swiper.focused_card_index());
    println!("visible={:?}", swiper.visible_card_indexes());
}
