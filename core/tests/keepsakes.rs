use hand_ledger_core::gesture::DragRelease;
use hand_ledger_core::keepsake::{pull_released, BAND_EXIT_PX};
use hand_ledger_core::layout::{doily_path, shade_hex};
use hand_ledger_core::{BellyBandState, DragKeepsake, FoldEdge, PullDirection, PullTabState};

fn released(offset_x: f32, velocity_x: f32) -> DragRelease {
    DragRelease {
        offset_x,
        velocity_x,
    }
}

#[test]
fn pull_threshold_is_forty_percent_of_max_pull() {
    assert!(pull_released(PullDirection::Down, 150.0, released(61.0, 0.0)));
    assert!(!pull_released(PullDirection::Down, 150.0, released(60.0, 0.0)));
    assert!(!pull_released(PullDirection::Down, 150.0, released(-90.0, 0.0)));
    assert!(pull_released(PullDirection::Up, 150.0, released(-61.0, 0.0)));
}

#[test]
fn pull_flick_counts_on_velocity_alone() {
    assert!(pull_released(PullDirection::Right, 150.0, released(5.0, 301.0)));
    assert!(!pull_released(PullDirection::Right, 150.0, released(5.0, 300.0)));
    assert!(!pull_released(PullDirection::Left, 150.0, released(5.0, 400.0)));
}

#[test]
fn tab_pulled_past_threshold_stays_out() {
    let mut tab = PullTabState::new(PullDirection::Down, 150.0);
    tab.begin(0.0, 0.0, 0.0);
    tab.update(0.0, 30.0, 50.0);
    assert!(tab.view().dragging);
    assert!(tab.end(0.0, 70.0, 400.0));

    let view = tab.view();
    assert!(view.pulled);
    assert!(!view.dragging);
    assert_eq!(view.position, 150.0);
    assert_eq!(view.progress, 1.0);
}

#[test]
fn short_slow_pull_springs_back() {
    let mut tab = PullTabState::new(PullDirection::Down, 150.0);
    tab.begin(0.0, 0.0, 0.0);
    assert!(!tab.end(0.0, 59.0, 500.0));
    assert_eq!(tab.view(), Default::default());
}

#[test]
fn quick_flick_pulls_the_tab() {
    let mut tab = PullTabState::new(PullDirection::Down, 150.0);
    tab.begin(0.0, 0.0, 0.0);
    tab.update(0.0, 10.0, 20.0);
    assert!(tab.end(0.0, 20.0, 40.0));
}

#[test]
fn upward_tab_moves_toward_negative_y() {
    let mut tab = PullTabState::new(PullDirection::Up, 150.0);
    tab.begin(0.0, 100.0, 0.0);
    assert!(tab.end(0.0, 20.0, 500.0));
    assert_eq!(tab.position(), -150.0);
}

#[test]
fn horizontal_tab_ignores_vertical_motion() {
    let mut tab = PullTabState::new(PullDirection::Right, 150.0);
    tab.begin(100.0, 0.0, 0.0);
    tab.update(100.0, 200.0, 30.0);
    assert_eq!(tab.position(), 0.0);
    assert!(!tab.end(100.0, 200.0, 60.0));
}

#[test]
fn tab_travel_is_clamped_while_dragging() {
    let mut tab = PullTabState::new(PullDirection::Down, 150.0);
    tab.begin(0.0, 0.0, 0.0);
    tab.update(0.0, 400.0, 10.0);
    assert_eq!(tab.position(), 150.0);
    tab.update(0.0, -50.0, 20.0);
    assert_eq!(tab.position(), 0.0);
    tab.update(0.0, 75.0, 30.0);
    assert_eq!(tab.view().progress, 0.5);
}

#[test]
fn pulled_tab_pushed_back_closes() {
    let mut tab = PullTabState::new(PullDirection::Down, 150.0);
    tab.begin(0.0, 0.0, 0.0);
    assert!(tab.end(0.0, 100.0, 500.0));

    tab.begin(0.0, 150.0, 1000.0);
    tab.update(0.0, 100.0, 1050.0);
    assert_eq!(tab.position(), 100.0);
    assert!(!tab.end(0.0, 100.0, 1500.0));
    assert_eq!(tab.position(), 0.0);
}

#[test]
fn cancelled_pull_keeps_previous_state() {
    let mut tab = PullTabState::new(PullDirection::Down, 150.0);
    tab.begin(0.0, 0.0, 0.0);
    tab.update(0.0, 120.0, 10.0);
    tab.cancel();
    assert_eq!(tab.view(), Default::default());
}

#[test]
fn tapping_a_band_slides_it_off() {
    let mut band = BellyBandState::new(true);
    band.begin(10.0, 10.0, 0.0);
    assert!(band.end(10.0, 10.0, 50.0));

    let view = band.view();
    assert!(view.removed);
    assert_eq!(view.position, BAND_EXIT_PX);
    assert!((view.opacity - 0.3).abs() < 1e-5);
}

#[test]
fn short_band_drag_settles_back() {
    let mut band = BellyBandState::new(true);
    band.begin(0.0, 0.0, 0.0);
    band.update(50.0, 0.0, 10.0);
    assert!(!band.end(50.0, 0.0, 500.0));
    assert_eq!(band.position(), 0.0);
}

#[test]
fn far_band_drag_exits_on_its_side() {
    let mut band = BellyBandState::new(false);
    band.begin(0.0, 0.0, 0.0);
    assert!(band.end(-150.0, 0.0, 500.0));
    assert_eq!(band.position(), -BAND_EXIT_PX);
}

#[test]
fn band_fades_as_it_is_dragged() {
    let mut band = BellyBandState::new(true);
    band.begin(0.0, 0.0, 0.0);
    band.update(100.0, 0.0, 10.0);
    let view = band.view();
    assert!(view.dragging);
    assert_eq!(view.position, 100.0);
    assert!((view.opacity - 0.65).abs() < 1e-5);

    band.update(900.0, 0.0, 20.0);
    assert_eq!(band.position(), 300.0);
}

#[test]
fn removed_band_ignores_new_drags() {
    let mut band = BellyBandState::new(true);
    band.begin(0.0, 0.0, 0.0);
    band.end(0.0, 0.0, 10.0);
    band.begin(0.0, 0.0, 100.0);
    assert!(!band.view().dragging);
}

#[test]
fn keyboard_toggle_matches_a_full_pull() {
    let mut tab = PullTabState::new(PullDirection::Left, 120.0);
    tab.begin(0.0, 0.0, 0.0);
    tab.update(-30.0, 0.0, 10.0);
    tab.toggle();
    let view = tab.view();
    assert!(view.pulled);
    assert!(!view.dragging);
    assert_eq!(view.position, -120.0);
    tab.toggle();
    assert_eq!(tab.position(), 0.0);
}

#[test]
fn slide_off_removes_the_band_without_a_drag() {
    let mut band = BellyBandState::new(true);
    band.slide_off();
    assert!(band.view().removed);
    assert_eq!(band.position(), BAND_EXIT_PX);
}

#[test]
fn flip_out_opens_along_its_hinge() {
    assert_eq!(FoldEdge::Right.footprint(130.0, 80.0, true), (260.0, 80.0));
    assert_eq!(FoldEdge::Top.footprint(240.0, 70.0, true), (240.0, 140.0));
    assert_eq!(FoldEdge::Top.footprint(240.0, 70.0, false), (240.0, 70.0));
    assert_eq!(FoldEdge::Right.transform_origin(), "left center");
    assert_eq!(FoldEdge::Left.panel_anchor(130.0, 80.0), ("right", 130.0));
    assert_eq!(FoldEdge::Bottom.unfolded_rotation(), "rotateX(-180deg)");
}

#[test]
fn shade_hex_clamps_each_channel() {
    assert_eq!(shade_hex("#f5f0e1", -10), "#ebe6d7");
    assert_eq!(shade_hex("#050505", -10), "#000000");
    assert_eq!(shade_hex("#fffffe", 5), "#ffffff");
    assert_eq!(shade_hex("tomato", 5), "tomato");
    assert_eq!(shade_hex("#abc", 5), "#abc");
}

#[test]
fn doily_path_has_one_curve_per_petal() {
    let path = doily_path(50.0, 40.0, 12);
    assert!(path.starts_with("M 84.00 50.00"));
    assert!(path.ends_with(" Z"));
    assert_eq!(path.matches(" Q ").count(), 12);
}
