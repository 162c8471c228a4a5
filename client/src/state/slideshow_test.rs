use super::*;

fn swipe(state: &mut SlideshowState, from: f64, to: f64) {
    state.touch_start(from);
    state.touch_move(to);
    state.touch_end();
}

#[test]
fn default_is_closed_on_first_page() {
    let state = SlideshowState::default();
    assert!(!state.open);
    assert_eq!(state.page, 1);
    assert_eq!(state.image_src(), "/assets/knowmore/1.jpg");
    assert_eq!(state.page_label(), "Page 1 of 8");
}

#[test]
fn next_clamps_at_last_page() {
    let mut state = SlideshowState::default();
    for _ in 0..20 {
        state.next();
    }
    assert_eq!(state.page, TOTAL_PAGES);
    assert!(!state.can_next());
    assert!(state.can_prev());
}

#[test]
fn prev_clamps_at_first_page() {
    let mut state = SlideshowState::default();
    state.prev();
    assert_eq!(state.page, 1);
    assert!(!state.can_prev());
}

#[test]
fn close_keeps_current_page() {
    let mut state = SlideshowState::default();
    state.open();
    state.next();
    state.next();
    state.close();
    assert!(!state.open);
    assert_eq!(state.page, 3);
}

#[test]
fn left_swipe_past_threshold_advances() {
    let mut state = SlideshowState::default();
    swipe(&mut state, 300.0, 200.0);
    assert_eq!(state.page, 2);
}

#[test]
fn right_swipe_past_threshold_goes_back() {
    let mut state = SlideshowState::default();
    state.next();
    swipe(&mut state, 100.0, 220.0);
    assert_eq!(state.page, 1);
}

#[test]
fn short_swipe_is_ignored() {
    let mut state = SlideshowState::default();
    swipe(&mut state, 100.0, 60.0);
    assert_eq!(state.page, 1);
}

#[test]
fn swipe_of_exactly_threshold_is_ignored() {
    let mut state = SlideshowState::default();
    swipe(&mut state, 100.0, 50.0);
    assert_eq!(state.page, 1);
}

#[test]
fn tap_without_move_is_ignored() {
    let mut state = SlideshowState::default();
    state.touch_start(100.0);
    state.touch_end();
    assert_eq!(state.page, 1);
}

#[test]
fn new_touch_resets_previous_move() {
    let mut state = SlideshowState::default();
    swipe(&mut state, 300.0, 100.0);
    state.touch_start(100.0);
    state.touch_end();
    assert_eq!(state.page, 2);
}

#[test]
fn left_swipe_on_last_page_stays() {
    let mut state = SlideshowState::default();
    for _ in 0..TOTAL_PAGES {
        state.next();
    }
    swipe(&mut state, 300.0, 100.0);
    assert_eq!(state.page, TOTAL_PAGES);
}
