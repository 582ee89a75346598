use hand_ledger_core::{
    page_visual, stack_visuals, FlipDirection, JournalState, PageFace, PagePhase, PageVisual,
};

fn at(page: usize, flipping: bool) -> JournalState {
    JournalState {
        current_page: page,
        is_flipping: flipping,
        flip_direction: None,
    }
}

#[test]
fn flipped_pages_always_stack_above_unflipped() {
    for total in 0..40 {
        for current in 0..=total {
            let visuals = stack_visuals(&at(current, false), total);
            let lowest_flipped = visuals
                .iter()
                .filter(|visual| visual.is_flipped())
                .map(|visual| visual.z_index)
                .min();
            let highest_unflipped = visuals
                .iter()
                .filter(|visual| !visual.is_flipped())
                .map(|visual| visual.z_index)
                .max();
            if let (Some(flipped), Some(unflipped)) = (lowest_flipped, highest_unflipped) {
                assert!(
                    flipped > unflipped,
                    "total {total} current {current}: {flipped} <= {unflipped}"
                );
            }
        }
    }
}

#[test]
fn unflipped_pages_stack_in_reading_order() {
    let visuals = stack_visuals(&at(0, false), 5);
    let order: Vec<i32> = visuals.iter().map(|visual| visual.z_index).collect();
    assert_eq!(order, vec![5, 4, 3, 2, 1]);
}

#[test]
fn closed_back_state_has_every_page_turned() {
    let visuals = stack_visuals(&at(3, false), 3);
    assert!(visuals.iter().all(|visual| visual.phase == PagePhase::Flipped));
    assert!(visuals.iter().all(|visual| visual.visible_face == PageFace::Back));
    assert_eq!(visuals[2].click_direction.map(|d| d.label()), Some("backward"));
    assert!(!visuals[1].is_clickable());
}

#[test]
fn mapping_ignores_transition_flag() {
    let settled = page_visual(1, &at(2, false), 4);
    let moving = page_visual(1, &at(2, true), 4);
    assert_eq!(settled, moving);
}

#[test]
fn only_the_current_page_is_active() {
    for current in 0..4 {
        let visuals = stack_visuals(&at(current, false), 4);
        let active: Vec<usize> = visuals
            .iter()
            .filter(|visual| visual.is_active())
            .map(|visual| visual.index)
            .collect();
        assert_eq!(active, vec![current]);
    }
}

/// Page under the pointer on one side of the spread: the highest z-index
/// among pages that catch pointer events.
fn page_under_pointer(visuals: &[PageVisual], left_side: bool) -> Option<usize> {
    visuals
        .iter()
        .filter(|visual| visual.is_flipped() == left_side && visual.catches_pointer())
        .max_by_key(|visual| visual.z_index)
        .map(|visual| visual.index)
}

#[test]
fn clicks_land_on_the_page_that_can_turn() {
    for total in 1..12 {
        for current in 0..=total {
            let visuals = stack_visuals(&at(current, false), total);
            let forward = visuals
                .iter()
                .find(|visual| visual.click_direction == Some(FlipDirection::Forward))
                .map(|visual| visual.index);
            let backward = visuals
                .iter()
                .find(|visual| visual.click_direction == Some(FlipDirection::Backward))
                .map(|visual| visual.index);
            assert_eq!(
                page_under_pointer(&visuals, false),
                forward,
                "total {total} current {current}"
            );
            assert_eq!(
                page_under_pointer(&visuals, true),
                backward,
                "total {total} current {current}"
            );
        }
    }
}

#[test]
fn older_turned_pages_let_the_pointer_through() {
    let visuals = stack_visuals(&at(2, false), 6);
    assert!(visuals[0].z_index > visuals[1].z_index);
    assert!(!visuals[0].catches_pointer());
    assert!(visuals[1].catches_pointer());
    assert!(visuals[2].catches_pointer());
    assert!(visuals[5].catches_pointer());
}
