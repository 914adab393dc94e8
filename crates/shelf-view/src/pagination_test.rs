use super::*;

fn numbers(controls: &[PageControl]) -> Vec<String> {
    controls.iter().map(PageControl::label).collect()
}

#[test]
fn total_pages_is_at_least_one() {
    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(25, 10), 3);
    assert_eq!(total_pages(30, 10), 3);
    assert_eq!(total_pages(31, 10), 4);
}

#[test]
fn slice_returns_requested_page() {
    let view: Vec<u32> = (1..=25).collect();
    assert_eq!(slice(&view, 1, 10), &view[0..10]);
    assert_eq!(slice(&view, 3, 10), &[21, 22, 23, 24, 25]);
}

#[test]
fn slice_past_the_end_is_empty() {
    let view: Vec<u32> = (1..=25).collect();
    assert!(slice(&view, 4, 10).is_empty());
    assert!(slice(&view, usize::MAX, 10).is_empty());
    assert!(slice::<u32>(&[], 1, 10).is_empty());
}

#[test]
fn slice_treats_page_zero_as_first_page() {
    let view: Vec<u32> = (1..=5).collect();
    assert_eq!(slice(&view, 0, 2), &[1, 2]);
}

#[test]
fn clamp_page_bounds() {
    assert_eq!(clamp_page(999, 3), 3);
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(5, 0), 1);
}

#[test]
fn parse_page_size_accepts_integers() {
    assert_eq!(parse_page_size("20"), 20);
    assert_eq!(parse_page_size(" 50 "), 50);
    assert_eq!(parse_page_size("20 per page"), 20);
}

#[test]
fn parse_page_size_falls_back_to_default() {
    assert_eq!(parse_page_size(""), DEFAULT_PAGE_SIZE);
    assert_eq!(parse_page_size("abc"), DEFAULT_PAGE_SIZE);
    assert_eq!(parse_page_size("0"), DEFAULT_PAGE_SIZE);
    assert_eq!(parse_page_size("-5"), DEFAULT_PAGE_SIZE);
}

#[test]
fn page_controls_middle_of_long_range() {
    let controls = page_controls(5, 20, MAX_PAGE_CONTROLS);
    assert_eq!(
        numbers(&controls),
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "...", "20"]
    );
    assert!(controls.contains(&PageControl::Page {
        number: 5,
        active: true
    }));
}

#[test]
fn page_controls_deep_in_range_has_both_ellipses() {
    let controls = page_controls(10, 20, MAX_PAGE_CONTROLS);
    assert_eq!(
        numbers(&controls),
        vec!["1", "...", "7", "8", "9", "10", "11", "12", "13", "...", "20"]
    );
}

#[test]
fn page_controls_near_end_reanchors_left() {
    let controls = page_controls(20, 20, MAX_PAGE_CONTROLS);
    assert_eq!(
        numbers(&controls),
        vec!["1", "...", "14", "15", "16", "17", "18", "19", "20"]
    );
}

#[test]
fn page_controls_short_range_shows_every_page() {
    assert_eq!(numbers(&page_controls(1, 3, MAX_PAGE_CONTROLS)), vec!["1", "2", "3"]);
    assert_eq!(numbers(&page_controls(1, 1, MAX_PAGE_CONTROLS)), vec!["1"]);
}

#[test]
fn page_controls_last_page_jump_without_gap() {
    // Window 1..=7 of 8 pages: the last page follows directly, no ellipsis.
    assert_eq!(
        numbers(&page_controls(1, 8, MAX_PAGE_CONTROLS)),
        vec!["1", "2", "3", "4", "5", "6", "7", "8"]
    );
}

#[test]
fn page_control_targets() {
    assert_eq!(
        PageControl::Page {
            number: 4,
            active: false
        }
        .target(),
        Some(4)
    );
    assert_eq!(PageControl::Ellipsis.target(), None);
}

#[test]
fn state_go_to_clamps() {
    let mut state = PaginationState::default();
    state.go_to(999, 25);
    assert_eq!(state.page(), 3);
    state.go_to(0, 25);
    assert_eq!(state.page(), 1);
}

#[test]
fn state_next_and_previous_stop_at_bounds() {
    let mut state = PaginationState::default();
    assert!(!state.previous());
    assert!(state.next(25));
    assert!(state.next(25));
    assert!(!state.next(25));
    assert_eq!(state.page(), 3);
    assert!(state.previous());
    assert_eq!(state.page(), 2);
}

#[test]
fn state_set_page_size_resets_page() {
    let mut state = PaginationState::default();
    state.go_to(3, 25);
    state.set_page_size(20);
    assert_eq!(state.page(), 1);
    assert_eq!(state.page_size(), 20);
    state.set_page_size(0);
    assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn state_display_range() {
    let mut state = PaginationState::default();
    assert_eq!(state.display_range(25), (1, 10));
    state.go_to(3, 25);
    assert_eq!(state.display_range(25), (21, 25));
    assert_eq!(PaginationState::default().display_range(0), (0, 0));
}

#[test]
fn page_controls_clamp_out_of_range_current() {
    assert_eq!(
        numbers(&page_controls(50, 3, MAX_PAGE_CONTROLS)),
        vec!["1", "2", "3"]
    );
}
