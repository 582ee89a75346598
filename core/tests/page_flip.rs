mod support;

use hand_ledger_core::{FlipDirection, FlipOutcome, JournalState, PageFlip, PAGE_TURN_MS};
use support::{advance, ManualClock};

fn machine(total: usize, settle_ms: u32) -> (PageFlip<ManualClock>, ManualClock) {
    let clock = ManualClock::default();
    (PageFlip::new(total, settle_ms, clock.clone()), clock)
}

#[test]
fn starts_idle_on_first_page() {
    let (flip, clock) = machine(4, PAGE_TURN_MS);
    assert_eq!(flip.state(), JournalState::default());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn forward_runs_to_closed_back_then_stops() {
    let (mut flip, clock) = machine(3, 600);
    for expected in 1..=3 {
        let outcome = flip.flip_page(FlipDirection::Forward);
        assert_eq!(
            outcome,
            FlipOutcome::Flipped {
                from: expected - 1,
                to: expected,
                direction: FlipDirection::Forward,
            }
        );
        advance(&mut flip, &clock, 600);
    }
    assert_eq!(flip.flip_page(FlipDirection::Forward), FlipOutcome::OutOfBounds);
    assert_eq!(flip.state().current_page, 3);
    assert!(!flip.state().is_flipping);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn backward_from_first_page_is_a_no_op() {
    let (mut flip, clock) = machine(3, 600);
    assert_eq!(flip.flip_page(FlipDirection::Backward), FlipOutcome::OutOfBounds);
    assert_eq!(flip.state(), JournalState::default());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn current_page_stays_in_bounds_for_any_sequence() {
    let total = 5;
    let (mut flip, clock) = machine(total, 600);
    let mut seed = 0x2545_F491u32;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let direction = if seed % 3 == 0 {
            FlipDirection::Backward
        } else {
            FlipDirection::Forward
        };
        flip.flip_page(direction);
        assert!(flip.state().current_page <= total);
        advance(&mut flip, &clock, u64::from(seed % 900));
    }
}

#[test]
fn second_flip_without_settling_is_dropped() {
    let (mut flip, clock) = machine(6, 600);
    assert!(flip.flip_page(FlipDirection::Forward).moved());
    assert_eq!(flip.flip_page(FlipDirection::Forward), FlipOutcome::Busy);
    assert_eq!(flip.flip_page(FlipDirection::Backward), FlipOutcome::Busy);
    let state = flip.state();
    assert_eq!(state.current_page, 1);
    assert!(state.is_flipping);
    assert_eq!(state.flip_direction, Some(FlipDirection::Forward));
    assert_eq!(clock.pending(), 1);
}

#[test]
fn directions_move_one_page_each_way() {
    let (mut flip, clock) = machine(6, 600);
    flip.flip_page(FlipDirection::Forward);
    advance(&mut flip, &clock, 600);
    flip.flip_page(FlipDirection::Forward);
    advance(&mut flip, &clock, 600);
    assert_eq!(flip.state().current_page, 2);

    let outcome = flip.flip_page(FlipDirection::Backward);
    assert_eq!(
        outcome,
        FlipOutcome::Flipped {
            from: 2,
            to: 1,
            direction: FlipDirection::Backward,
        }
    );
    assert_eq!(flip.state().flip_direction, Some(FlipDirection::Backward));
}

#[test]
fn transition_holds_until_settle_duration_elapses() {
    let (mut flip, clock) = machine(3, 600);
    flip.flip_page(FlipDirection::Forward);
    advance(&mut flip, &clock, 599);
    assert!(flip.state().is_flipping);
    advance(&mut flip, &clock, 1);
    let state = flip.state();
    assert!(!state.is_flipping);
    assert_eq!(state.flip_direction, None);
    assert_eq!(flip.pending_ticket(), None);
}

#[test]
fn flip_after_settle_leaves_exactly_one_pending_task() {
    let (mut flip, clock) = machine(4, 600);
    flip.flip_page(FlipDirection::Forward);
    advance(&mut flip, &clock, 620);
    assert!(!flip.state().is_flipping);

    assert!(flip.flip_page(FlipDirection::Forward).moved());
    assert_eq!(flip.state().current_page, 2);
    assert_eq!(clock.pending(), 1);
}

#[test]
fn stale_ticket_cannot_unlock_a_newer_flip() {
    let (mut flip, clock) = machine(4, 600);
    flip.flip_page(FlipDirection::Forward);
    let first = flip.pending_ticket().expect("first flip schedules a settle");
    advance(&mut flip, &clock, 600);

    flip.flip_page(FlipDirection::Forward);
    let second = flip.pending_ticket().expect("second flip schedules a settle");
    assert_ne!(first, second);
    assert!(!flip.settle(first));
    assert!(flip.state().is_flipping);
    assert!(flip.settle(second));
    assert!(!flip.state().is_flipping);
}

#[test]
fn go_to_current_page_changes_nothing() {
    let (mut flip, clock) = machine(4, 600);
    flip.flip_page(FlipDirection::Forward);
    advance(&mut flip, &clock, 600);
    let before = flip.state();
    assert_eq!(flip.go_to_page(before.current_page), FlipOutcome::Unchanged);
    assert_eq!(flip.state(), before);
    assert!(!flip.state().is_flipping);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn go_to_page_shares_guard_and_bounds() {
    let (mut flip, clock) = machine(4, 600);
    flip.flip_page(FlipDirection::Forward);
    assert_eq!(flip.go_to_page(3), FlipOutcome::Busy);
    advance(&mut flip, &clock, 600);

    assert_eq!(flip.go_to_page(5), FlipOutcome::OutOfBounds);
    assert_eq!(flip.go_to_page(4), FlipOutcome::Jumped { from: 1, to: 4 });
    let state = flip.state();
    assert_eq!(state.current_page, 4);
    assert!(!state.is_flipping);
    assert_eq!(state.flip_direction, None);
}

#[test]
fn empty_journal_never_moves() {
    let (mut flip, clock) = machine(0, 600);
    assert_eq!(flip.flip_page(FlipDirection::Forward), FlipOutcome::OutOfBounds);
    assert_eq!(flip.go_to_page(0), FlipOutcome::Unchanged);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn dropping_the_machine_cancels_its_settle_task() {
    let (mut flip, clock) = machine(4, 600);
    flip.flip_page(FlipDirection::Forward);
    assert_eq!(clock.pending(), 1);
    drop(flip);
    assert_eq!(clock.pending(), 0);
}
