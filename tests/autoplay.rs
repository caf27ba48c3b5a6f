mod common;

use common::{mounted, ms, DESKTOP_WIDTH, MOBILE_WIDTH};
use folio::carousel::{CarouselEvent, TimerKind};
use folio::config::Config;
use std::time::Instant;

fn autoplay_config(loop_enabled: bool) -> Config {
    let mut config = Config::default();
    config.carousel.autoplay = true;
    config.carousel.loop_enabled = loop_enabled;
    config
}

#[test]
fn ping_pong_sweeps_between_ends() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &autoplay_config(false), t0);
    assert!(carousel.view().autoplay_running);

    let mut seen = Vec::new();
    for k in 1..=9 {
        carousel.advance(t0 + ms(5_000 * k));
        seen.push(carousel.paging().current_index);
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 3, 2, 1, 0, 1]);
}

#[test]
fn loop_wraps_forward_in_any_layout() {
    let t0 = Instant::now();
    let mut carousel = mounted(6, DESKTOP_WIDTH, &autoplay_config(true), t0);
    assert_eq!(carousel.paging().max_index(), 2);

    let mut seen = Vec::new();
    for k in 1..=4 {
        carousel.advance(t0 + ms(5_000 * k));
        seen.push(carousel.paging().current_index);
    }
    assert_eq!(seen, vec![1, 2, 0, 1]);
}

#[test]
fn hover_pauses_then_cooldown_resumes() {
    let t0 = Instant::now();
    let mut carousel = mounted(10, DESKTOP_WIDTH, &autoplay_config(false), t0);

    carousel.handle(CarouselEvent::HoverStart, t0 + ms(1_000));
    assert!(!carousel.view().autoplay_running);
    carousel.advance(t0 + ms(5_000));
    assert_eq!(carousel.paging().current_index, 0);

    carousel.handle(CarouselEvent::HoverEnd, t0 + ms(6_000));
    assert!(carousel.timers().is_scheduled(TimerKind::InteractionCooldown));
    carousel.advance(t0 + ms(9_000));
    assert!(carousel.view().autoplay_running);

    carousel.advance(t0 + ms(10_000));
    assert_eq!(carousel.paging().current_index, 1);
}

#[test]
fn tick_inside_cooldown_is_skipped() {
    let t0 = Instant::now();
    let mut carousel = mounted(10, DESKTOP_WIDTH, &autoplay_config(false), t0);

    carousel.advance(t0 + ms(5_000));
    assert_eq!(carousel.paging().current_index, 1);

    carousel.handle(CarouselEvent::HoverStart, t0 + ms(7_000));
    carousel.handle(CarouselEvent::HoverEnd, t0 + ms(8_000));

    carousel.advance(t0 + ms(10_000));
    assert_eq!(carousel.paging().current_index, 1);

    carousel.advance(t0 + ms(15_000));
    assert_eq!(carousel.paging().current_index, 2);
}

#[test]
fn hover_is_ignored_in_mobile_layout() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &autoplay_config(false), t0);

    carousel.handle(CarouselEvent::HoverStart, t0 + ms(1_000));
    assert!(carousel.view().autoplay_running);
    carousel.advance(t0 + ms(5_000));
    assert_eq!(carousel.paging().current_index, 1);
}

#[test]
fn touch_pauses_until_cooldown_elapses() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &autoplay_config(false), t0);

    carousel.handle(CarouselEvent::TouchStart { x: 200.0 }, t0 + ms(1_000));
    carousel.advance(t0 + ms(5_000));
    assert_eq!(carousel.paging().current_index, 0);

    carousel.handle(CarouselEvent::TouchEnd, t0 + ms(6_000));
    carousel.advance(t0 + ms(10_000));
    assert_eq!(carousel.paging().current_index, 1);
}

#[test]
fn tick_during_manual_transition_is_dropped() {
    let t0 = Instant::now();
    let mut carousel = mounted(10, DESKTOP_WIDTH, &autoplay_config(false), t0);

    carousel.handle(CarouselEvent::Next, t0 + ms(4_800));
    carousel.advance(t0 + ms(5_000));
    assert_eq!(carousel.paging().current_index, 1);

    carousel.advance(t0 + ms(10_000));
    assert_eq!(carousel.paging().current_index, 2);
}

#[test]
fn disabling_stops_the_timer() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &autoplay_config(false), t0);

    carousel.handle(CarouselEvent::SetAutoplay(false), t0 + ms(1_000));
    assert!(!carousel.timers().is_scheduled(TimerKind::AutoplayTick));
    carousel.advance(t0 + ms(20_000));
    assert_eq!(carousel.paging().current_index, 0);

    carousel.handle(CarouselEvent::SetAutoplay(true), t0 + ms(20_000));
    carousel.advance(t0 + ms(25_000));
    assert_eq!(carousel.paging().current_index, 1);
}

#[test]
fn enabling_under_pointer_stays_paused() {
    let t0 = Instant::now();
    let mut carousel = mounted(10, DESKTOP_WIDTH, &Config::default(), t0);

    carousel.handle(CarouselEvent::HoverStart, t0 + ms(500));
    carousel.handle(CarouselEvent::SetAutoplay(true), t0 + ms(1_000));
    assert!(!carousel.view().autoplay_running);
    carousel.advance(t0 + ms(6_000));
    assert_eq!(carousel.paging().current_index, 0);

    carousel.handle(CarouselEvent::HoverEnd, t0 + ms(7_000));
    carousel.advance(t0 + ms(10_000));
    assert!(carousel.view().autoplay_running);
    carousel.advance(t0 + ms(11_000));
    assert_eq!(carousel.paging().current_index, 1);
}

#[test]
fn toggling_off_and_on_keeps_hover_pause() {
    let t0 = Instant::now();
    let mut carousel = mounted(10, DESKTOP_WIDTH, &autoplay_config(false), t0);

    carousel.handle(CarouselEvent::HoverStart, t0 + ms(1_000));
    carousel.handle(CarouselEvent::SetAutoplay(false), t0 + ms(2_000));
    carousel.handle(CarouselEvent::SetAutoplay(true), t0 + ms(3_000));
    carousel.advance(t0 + ms(8_000));
    assert_eq!(carousel.paging().current_index, 0);
}

#[test]
fn single_page_never_moves() {
    let t0 = Instant::now();
    let mut carousel = mounted(3, DESKTOP_WIDTH, &autoplay_config(false), t0);
    carousel.advance(t0 + ms(5_000));
    carousel.advance(t0 + ms(10_000));
    assert_eq!(carousel.paging().current_index, 0);
}
