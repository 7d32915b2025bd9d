//! Behavioral tests for the disclosure list open-set contract.

use std::sync::Arc;

use folio::prelude::*;
use folio::style::ItemStatus;
use parking_lot::Mutex;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio=debug")),
        )
        .with_test_writer()
        .try_init();
}

fn items(n: usize) -> Vec<DisclosureItem> {
    (0..n)
        .map(|i| DisclosureItem::new(format!("Section {i}"), format!("Details for section {i}")))
        .collect()
}

fn list(n: usize, exclusivity: Exclusivity) -> DisclosureList {
    init_tracing();
    DisclosureList::new(items(n), DisclosureConfig::new(exclusivity))
}

fn statuses(list: &DisclosureList) -> Vec<bool> {
    (0..list.len() as i32)
        .map(|i| list.is_open(i).expect("index in range"))
        .collect()
}

/// Deterministic pseudo-random toggle sequence.
fn toggle_sequence(len: usize, steps: usize) -> Vec<i32> {
    let mut state: u32 = 0x9e37_79b9;
    (0..steps)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as usize % len) as i32
        })
        .collect()
}

#[test]
fn single_policy_never_opens_more_than_one() {
    for len in 1..=6 {
        let mut list = list(len, Exclusivity::Single);
        for index in toggle_sequence(len, 200) {
            list.toggle(index).unwrap();
            assert!(list.open_indices().len() <= 1, "len {len}: {:?}", list.open_indices());
        }
    }
}

#[test]
fn toggling_twice_restores_status() {
    for exclusivity in [Exclusivity::Single, Exclusivity::Multiple] {
        let mut list = list(4, exclusivity);
        list.toggle(2).unwrap();
        let before = statuses(&list);

        list.toggle(2).unwrap();
        list.toggle(2).unwrap();
        assert_eq!(statuses(&list), before);

        list.toggle(1).unwrap();
        let before = statuses(&list);
        list.toggle(3).unwrap();
        list.toggle(3).unwrap();
        if exclusivity == Exclusivity::Multiple {
            assert_eq!(statuses(&list), before);
        } else {
            // Opening 3 closed 1; closing 3 again leaves nothing open
            assert_eq!(statuses(&list), vec![false; 4]);
        }
    }
}

#[test]
fn multiple_policy_toggles_independently() {
    let len = 5;
    let mut list = list(len, Exclusivity::Multiple);
    for index in toggle_sequence(len, 100) {
        let before = statuses(&list);
        list.toggle(index).unwrap();
        let after = statuses(&list);

        for j in 0..len {
            if j as i32 == index {
                assert_ne!(before[j], after[j]);
            } else {
                assert_eq!(before[j], after[j], "toggling {index} changed {j}");
            }
        }
    }
}

#[test]
fn single_policy_switches_atomically() {
    let mut list = list(6, Exclusivity::Single);
    list.toggle(2).unwrap();

    // Both transitions are emitted after the new open set is committed
    let observed = Arc::new(Mutex::new(Vec::new()));
    let observed_clone = observed.clone();
    list.item_toggled.connect(move |t| {
        observed_clone.lock().push(*t);
    });

    list.toggle(5).unwrap();

    assert!(!list.is_open(2).unwrap());
    assert!(list.is_open(5).unwrap());
    assert_eq!(list.open_indices(), vec![5]);

    let observed = observed.lock();
    assert_eq!(observed.len(), 2);
    assert_eq!((observed[0].index, observed[0].to), (2, ItemStatus::Closed));
    assert_eq!((observed[1].index, observed[1].to), (5, ItemStatus::Open));
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut list = list(3, Exclusivity::Multiple);
    list.toggle(1).unwrap();
    let before = list.open_indices();

    assert_eq!(
        list.toggle(-1),
        Err(DisclosureError::InvalidIndex { index: -1, len: 3 })
    );
    assert_eq!(
        list.toggle(3),
        Err(DisclosureError::InvalidIndex { index: 3, len: 3 })
    );
    assert_eq!(
        list.is_open(3),
        Err(DisclosureError::InvalidIndex { index: 3, len: 3 })
    );
    assert!(list.describe(3).is_err());
    assert_eq!(list.open_indices(), before);
}

#[test]
fn single_policy_initial_open_keeps_lowest_index() {
    init_tracing();
    let list = DisclosureList::with_initial_open(
        items(3),
        DisclosureConfig::new(Exclusivity::Single),
        [0, 2],
    );
    assert_eq!(list.open_indices(), vec![0]);

    let list = DisclosureList::with_initial_open(
        items(3),
        DisclosureConfig::new(Exclusivity::Multiple),
        [0, 2],
    );
    assert_eq!(list.open_indices(), vec![0, 2]);
}

#[test]
fn single_policy_scenario() {
    let mut list = list(3, Exclusivity::Single);
    assert_eq!(statuses(&list), vec![false, false, false]);

    list.toggle(1).unwrap();
    assert_eq!(statuses(&list), vec![false, true, false]);

    list.toggle(0).unwrap();
    assert_eq!(statuses(&list), vec![true, false, false]);

    list.toggle(0).unwrap();
    assert_eq!(statuses(&list), vec![false, false, false]);
}

#[test]
fn multiple_policy_scenario() {
    let mut list = list(3, Exclusivity::Multiple);

    list.toggle(0).unwrap();
    list.toggle(2).unwrap();
    assert_eq!(statuses(&list), vec![true, false, true]);

    list.toggle(0).unwrap();
    assert_eq!(statuses(&list), vec![false, false, true]);
}

#[test]
fn entries_track_descriptors_after_reconfigure() {
    let mut list = list(2, Exclusivity::Single);
    list.toggle(0).unwrap();
    list.reconfigure(Some(ThemeKind::Dark), Some(AnimationKind::Fade));

    let entries = list.entries();
    assert!(entries[0].descriptor.style.container.contains("bg-blue-900"));
    assert!(entries[0].descriptor.animation.region.contains("translate-y-0"));
    assert!(entries[1].descriptor.style.container.contains("bg-gray-800"));
    assert!(entries[1].descriptor.animation.region.contains("-translate-y-2"));
    assert_eq!(list.open_indices(), vec![0]);
}
