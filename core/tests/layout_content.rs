use hand_ledger_core::layout::{scatter_layout, torn_edge_clip_path, ScatterConfig, TornEdge};
use hand_ledger_core::{validate_page_ids, ContentError};

#[test]
fn scatter_is_deterministic_and_bounded() {
    let config = ScatterConfig::default();
    let first = scatter_layout(12, &config);
    let second = scatter_layout(12, &config);
    assert_eq!(first, second);
    for (index, placement) in first.iter().enumerate() {
        assert!((5.0..=75.0).contains(&placement.x_pct));
        assert!((5.0..=75.0).contains(&placement.y_pct));
        assert!((-15.0..=15.0).contains(&placement.rotation_deg));
        assert!((0.9..=1.1).contains(&placement.scale));
        assert_eq!(placement.z_index, index as i32);
    }
}

#[test]
fn scatter_seed_changes_layout() {
    let a = scatter_layout(4, &ScatterConfig::default());
    let b = scatter_layout(
        4,
        &ScatterConfig {
            seed: 7,
            ..ScatterConfig::default()
        },
    );
    assert_ne!(a, b);
}

#[test]
fn torn_edge_closes_on_the_opposite_side() {
    let path = torn_edge_clip_path(TornEdge::Top, 9, 8);
    assert!(path.starts_with("polygon(0.0% "));
    assert!(path.ends_with("100.0% 100.0%, 0.0% 100.0%)"));
    assert_eq!(path.matches('%').count(), (8 + 1 + 2) * 2);
    assert_eq!(path, torn_edge_clip_path(TornEdge::Top, 9, 8));
}

#[test]
fn page_ids_must_be_present_and_unique() {
    assert_eq!(validate_page_ids(["welcome", "travel"]), Ok(()));
    assert_eq!(validate_page_ids(Vec::<&str>::new()), Err(ContentError::Empty));
    assert_eq!(
        validate_page_ids(["welcome", " "]),
        Err(ContentError::BlankId { index: 1 })
    );
    let err = validate_page_ids(["a", "b", "a"]).unwrap_err();
    assert_eq!(
        err,
        ContentError::DuplicateId {
            id: "a".to_string(),
            first: 0,
            second: 2,
        }
    );
    assert_eq!(err.to_string(), "page id 'a' used by pages 0 and 2");
}
