use super::*;

fn key(raw: f64) -> SortKey {
    SortKey::try_from(raw).unwrap()
}

fn id(raw: u32) -> ItemId {
    ItemId::new(raw)
}

fn order(store: &ItemStore) -> Vec<u32> {
    store.list_all().map(|item| item.id.get()).collect()
}

fn anchor(moved: u32, before: Option<u32>, after: Option<u32>) -> AnchorMove {
    AnchorMove {
        moved: Some(id(moved)),
        before: before.map(id),
        after: after.map(id),
    }
}

fn index_move(from: usize, to: usize, search: &str) -> IndexMove {
    IndexMove {
        from: Some(from),
        to: Some(to),
        search: search.to_string(),
    }
}

#[test]
fn test_move_between_two_neighbors() {
    let mut store = ItemStore::seeded(3);
    let outcome = ReorderEngine::default()
        .move_between(&mut store, anchor(3, Some(1), Some(2)))
        .unwrap();
    assert_eq!(outcome.key, key(1.5));
    assert!(!outcome.renumbered);
    assert_eq!(order(&store), vec![1, 3, 2]);
}

#[test]
fn test_move_to_head() {
    let mut store = ItemStore::seeded(5);
    store.set_sort_key(id(3), key(5.0)).unwrap();
    store.set_sort_key(id(1), key(6.0)).unwrap();
    store.set_sort_key(id(2), key(7.0)).unwrap();
    store.set_sort_key(id(4), key(8.0)).unwrap();
    store.set_sort_key(id(5), key(9.0)).unwrap();

    let outcome = ReorderEngine::default()
        .move_between(&mut store, anchor(4, None, Some(3)))
        .unwrap();
    assert_eq!(outcome.key, key(4.0));
    assert_eq!(order(&store), vec![4, 3, 1, 2, 5]);
}

#[test]
fn test_move_to_tail() {
    let mut store = ItemStore::seeded(3);
    let outcome = ReorderEngine::default()
        .move_between(&mut store, anchor(1, Some(3), None))
        .unwrap();
    assert_eq!(outcome.key, key(4.0));
    assert_eq!(order(&store), vec![2, 3, 1]);
}

#[test]
fn test_no_neighbors_sets_zero() {
    let mut store = ItemStore::seeded(3);
    let outcome = ReorderEngine::default()
        .move_between(&mut store, anchor(2, None, None))
        .unwrap();
    assert_eq!(outcome.key, SortKey::ZERO);
    assert_eq!(order(&store), vec![2, 1, 3]);
}

#[test]
fn test_unknown_neighbor_treated_as_absent() {
    let mut store = ItemStore::seeded(3);
    let outcome = ReorderEngine::default()
        .move_between(&mut store, anchor(1, Some(3), Some(99)))
        .unwrap();
    assert_eq!(outcome.key, key(4.0));
}

#[test]
fn test_moved_not_found_leaves_store_untouched() {
    let mut store = ItemStore::seeded(3);
    let engine = ReorderEngine::default();

    let missing = engine.move_between(&mut store, anchor(42, Some(1), Some(2)));
    assert_eq!(missing, Err(ReorderError::MovedItemNotFound));

    let absent = engine.move_between(&mut store, AnchorMove::default());
    assert_eq!(absent, Err(ReorderError::MovedItemNotFound));

    assert_eq!(order(&store), vec![1, 2, 3]);
    assert_eq!(store.find_by_id(id(3)).unwrap().sort_key, key(3.0));
}

#[test]
fn test_repeated_midpoint_triggers_renumber() {
    let mut store = ItemStore::seeded(4);
    let engine = ReorderEngine::default();
    let mut renumbered = false;

    // Keep squeezing alternating items into the gap right after item 1
    for round in 0..80 {
        let moved = if round % 2 == 0 { 3 } else { 4 };
        let head = order(&store);
        let after = head.get(1).copied().unwrap();
        let outcome = engine
            .move_between(&mut store, anchor(moved, Some(1), Some(after)))
            .unwrap();
        renumbered |= outcome.renumbered;

        let now = order(&store);
        let pos_moved = now.iter().position(|x| *x == moved).unwrap();
        let pos_before = now.iter().position(|x| *x == 1).unwrap();
        assert_eq!(pos_moved, pos_before + 1, "round {round}");
    }

    assert!(renumbered);
    let mut ids = order(&store);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_renumber_respects_min_gap() {
    let mut store = ItemStore::seeded(3);
    let engine = ReorderEngine::new(&ReorderConfig { min_gap: 2.0 });
    let outcome = engine
        .move_between(&mut store, anchor(3, Some(1), Some(2)))
        .unwrap();
    // Gap of 1.0 is below min_gap, so keys are renumbered first
    assert!(outcome.renumbered);
    assert_eq!(order(&store), vec![1, 3, 2]);
}

#[test]
fn test_index_move_unfiltered() {
    let mut store = ItemStore::seeded(4);
    let engine = ReorderEngine::default();
    engine.move_to_index(&mut store, &index_move(0, 2, "")).unwrap();
    assert_eq!(order(&store), vec![2, 3, 1, 4]);

    engine.move_to_index(&mut store, &index_move(3, 0, "")).unwrap();
    assert_eq!(order(&store), vec![4, 2, 3, 1]);
}

#[test]
fn test_index_move_to_last_slot() {
    let mut store = ItemStore::seeded(4);
    let outcome = ReorderEngine::default()
        .move_to_index(&mut store, &index_move(1, 3, ""))
        .unwrap();
    assert_eq!(outcome.key, key(5.0));
    assert_eq!(order(&store), vec![1, 3, 4, 2]);
}

#[test]
fn test_index_move_within_filtered_view() {
    let mut store = ItemStore::seeded(30);
    // View for "2": [2, 12, 20, 21, ...]
    let outcome = ReorderEngine::default()
        .move_to_index(&mut store, &index_move(3, 0, "2"))
        .unwrap();
    assert_eq!(outcome.id, id(21));
    assert_eq!(outcome.key, key(1.0));

    let view = filtered_ids(&store, "2");
    assert_eq!(view.first(), Some(&id(21)));
    assert_eq!(view.get(1), Some(&id(2)));
}

#[test]
fn test_index_move_same_position_keeps_order() {
    let mut store = ItemStore::seeded(5);
    ReorderEngine::default()
        .move_to_index(&mut store, &index_move(2, 2, ""))
        .unwrap();
    assert_eq!(order(&store), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_index_move_out_of_range() {
    let mut store = ItemStore::seeded(3);
    let engine = ReorderEngine::default();
    let result = engine.move_to_index(&mut store, &index_move(0, 3, ""));
    assert_eq!(
        result,
        Err(ReorderError::InvalidIndices {
            from: Some(0),
            to: Some(3),
            len: 3
        })
    );
    assert_eq!(order(&store), vec![1, 2, 3]);
}

#[test]
fn test_index_move_missing_index() {
    let mut store = ItemStore::seeded(3);
    let request = IndexMove {
        from: None,
        to: Some(1),
        search: String::new(),
    };
    let result = ReorderEngine::default().move_to_index(&mut store, &request);
    assert!(matches!(result, Err(ReorderError::InvalidIndices { .. })));
}

#[test]
fn test_index_move_empty_view() {
    let mut store = ItemStore::seeded(3);
    let result = ReorderEngine::default().move_to_index(&mut store, &index_move(0, 0, "9"));
    assert!(matches!(
        result,
        Err(ReorderError::InvalidIndices { len: 0, .. })
    ));
}
