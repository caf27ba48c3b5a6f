mod common;

use common::{mounted, ms, DESKTOP_WIDTH, MOBILE_WIDTH};
use folio::carousel::{CarouselEvent, ClickOutcome};
use folio::config::Config;
use std::time::Instant;

fn swipe(from: f64, to: f64) -> Vec<CarouselEvent> {
    vec![
        CarouselEvent::TouchStart { x: from },
        CarouselEvent::TouchMove { x: (from + to) / 2.0 },
        CarouselEvent::TouchMove { x: to },
        CarouselEvent::TouchEnd,
    ]
}

#[test]
fn left_swipe_goes_to_next_page_once() {
    let now = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &Config::default(), now);
    for event in swipe(300.0, 100.0) {
        carousel.handle(event, now);
    }
    assert_eq!(carousel.paging().current_index, 1);
    assert!(carousel.paging().is_animating);
}

#[test]
fn right_swipe_goes_back() {
    let now = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &Config::default(), now);
    carousel.handle(CarouselEvent::Next, now);
    carousel.advance(now + ms(500));

    for event in swipe(100.0, 300.0) {
        carousel.handle(event, now + ms(600));
    }
    assert_eq!(carousel.paging().current_index, 0);
}

#[test]
fn short_swipe_is_ignored() {
    let now = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &Config::default(), now);
    for event in swipe(200.0, 160.0) {
        carousel.handle(event, now);
    }
    assert_eq!(carousel.paging().current_index, 0);
}

#[test]
fn swipe_during_transition_is_ignored() {
    let now = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &Config::default(), now);
    carousel.handle(CarouselEvent::Next, now);
    for event in swipe(300.0, 100.0) {
        carousel.handle(event, now + ms(100));
    }
    assert_eq!(carousel.paging().current_index, 1);
}

#[test]
fn tap_without_movement_does_not_page() {
    let now = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &Config::default(), now);
    carousel.handle(CarouselEvent::TouchStart { x: 200.0 }, now);
    carousel.handle(CarouselEvent::TouchEnd, now);
    assert_eq!(carousel.paging().current_index, 0);
    assert!(!carousel.gesture().is_swiping);
}

#[test]
fn click_right_after_swipe_is_suppressed() {
    let now = Instant::now();
    let mut carousel = mounted(5, DESKTOP_WIDTH, &Config::default(), now);
    for event in swipe(600.0, 200.0) {
        carousel.handle(event, now);
    }
    assert_eq!(carousel.click_item(1, now), ClickOutcome::Suppressed);

    carousel.advance(now + ms(100));
    assert!(!carousel.gesture().is_swiping);
    assert!(matches!(
        carousel.click_item(1, now + ms(100)),
        ClickOutcome::Navigate(_)
    ));
}

#[test]
fn cancelled_touch_resets_gesture() {
    let now = Instant::now();
    let mut carousel = mounted(5, MOBILE_WIDTH, &Config::default(), now);
    carousel.handle(CarouselEvent::TouchStart { x: 300.0 }, now);
    carousel.handle(CarouselEvent::TouchMove { x: 100.0 }, now);
    carousel.handle(CarouselEvent::TouchCancel, now);

    assert!(!carousel.gesture().is_touching());
    assert!(!carousel.gesture().is_swiping);
    assert_eq!(carousel.paging().current_index, 0);
}
