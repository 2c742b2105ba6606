mod common;

use common::{engine_with, find, sample_feed, usernames};
use usercards::config::RestorePlacement;
use usercards::domain::{listing_order, UserId};
use usercards::engine::UserListError;

#[test]
fn minors_never_appear() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Append);
    assert!(engine.active().iter().all(|u| u.age >= 18));
    assert!(!usernames(engine.active()).contains(&"bob"));
    assert!(!usernames(engine.active()).contains(&"kid"));

    engine.search("b");
    assert!(!usernames(engine.search_results()).contains(&"bob"));

    // Removing and restoring everything cannot bring a minor back.
    let ids: Vec<UserId> = engine.active().iter().map(|u| u.id.clone()).collect();
    for id in &ids {
        engine.remove(id).unwrap();
    }
    for id in &ids {
        engine.restore(id).unwrap();
    }
    assert!(engine.active().iter().all(|u| u.age >= 18));
    assert!(engine.removed().is_empty());
}

#[test]
fn scenario_bob_and_amy() {
    let feed = vec![common::raw("bob", 17, "X"), common::raw("amy", 25, "Y")];
    let mut engine = engine_with(&feed, RestorePlacement::Append);
    assert_eq!(usernames(engine.active()), vec!["amy"]);

    engine.search("bob");
    assert!(engine.search_results().is_empty());
    assert!(engine.removed().is_empty());
}

#[test]
fn ids_have_generated_shape() {
    let engine = engine_with(&sample_feed(), RestorePlacement::Append);
    for user in engine.active() {
        assert_eq!(user.id.as_str().len(), 6);
        assert!(user
            .id
            .as_str()
            .chars()
            .all(|c| "ABCDEF123456".contains(c)));
    }
}

#[test]
fn active_sorted_after_initialize() {
    let engine = engine_with(&sample_feed(), RestorePlacement::Append);
    assert_eq!(
        usernames(engine.active()),
        vec!["dave", "Albert", "alice", "carol"]
    );
    for pair in engine.active().windows(2) {
        assert_ne!(listing_order(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
    }
}

#[test]
fn remove_then_restore_round_trip() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Append);
    let original = find(engine.active(), "Albert").clone();

    engine.remove(&original.id).unwrap();
    assert!(engine.active().iter().all(|u| u.id != original.id));
    let removed = find(engine.removed(), "Albert");
    assert!(removed.is_removed);
    assert_eq!(removed.id, original.id);

    engine.restore(&original.id).unwrap();
    assert!(engine.removed().is_empty());
    let restored = find(engine.active(), "Albert");
    assert_eq!(restored, &original);
    assert_eq!(engine.active().len(), 4);
    // Appended, not re-sorted.
    assert_eq!(engine.active().last().map(|u| &u.id), Some(&original.id));
}

#[test]
fn sorted_restore_places_user_back_in_order() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Sorted);
    let before = usernames(engine.active())
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let id = find(engine.active(), "Albert").id.clone();

    engine.remove(&id).unwrap();
    engine.restore(&id).unwrap();
    assert_eq!(usernames(engine.active()), before);
}

#[test]
fn id_is_never_in_both_collections() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Append);
    let ids: Vec<UserId> = engine.active().iter().map(|u| u.id.clone()).collect();
    engine.remove(&ids[0]).unwrap();
    engine.remove(&ids[2]).unwrap();
    engine.restore(&ids[0]).unwrap();

    for user in engine.active() {
        assert!(engine.removed().iter().all(|r| r.id != user.id));
        assert!(!user.is_removed);
    }
    assert!(engine.removed().iter().all(|u| u.is_removed));
}

#[test]
fn unknown_ids_leave_state_untouched() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Append);
    let before = engine.state().clone();

    let missing = UserId::from("FFFFFF");
    assert_eq!(
        engine.remove(&missing),
        Err(UserListError::NotActive {
            id: missing.clone()
        })
    );
    assert_eq!(
        engine.restore(&missing),
        Err(UserListError::NotRemoved { id: missing })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn empty_search_is_always_empty() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Append);
    engine.search("");
    assert!(engine.search_results().is_empty());

    engine.search("a");
    assert!(!engine.search_results().is_empty());
    engine.search("");
    assert!(engine.search_results().is_empty());
}

#[test]
fn search_finds_active_then_removed() {
    let feed = vec![common::raw("alice", 30, "A"), common::raw("albert", 31, "B")];
    let mut engine = engine_with(&feed, RestorePlacement::Append);
    let albert = find(engine.active(), "albert").id.clone();
    engine.remove(&albert).unwrap();

    engine.search("al");
    assert_eq!(usernames(engine.search_results()), vec!["alice", "albert"]);
    assert!(!engine.search_results()[0].is_removed);
    assert!(engine.search_results()[1].is_removed);
}

#[test]
fn search_is_case_insensitive() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Append);
    engine.search("ALBE");
    assert_eq!(usernames(engine.search_results()), vec!["Albert"]);
}

#[test]
fn search_results_track_remove_and_restore() {
    let mut engine = engine_with(&sample_feed(), RestorePlacement::Append);
    engine.search("al");
    assert_eq!(usernames(engine.search_results()), vec!["Albert", "alice"]);

    let alice = find(engine.active(), "alice").id.clone();
    engine.remove(&alice).unwrap();
    assert_eq!(usernames(engine.search_results()), vec!["Albert", "alice"]);
    assert!(find(engine.search_results(), "alice").is_removed);

    let albert = find(engine.active(), "Albert").id.clone();
    engine.remove(&albert).unwrap();
    // Removed order: alice first, then Albert.
    assert_eq!(usernames(engine.search_results()), vec!["alice", "Albert"]);

    engine.restore(&alice).unwrap();
    assert_eq!(usernames(engine.search_results()), vec!["alice", "Albert"]);
    assert!(!find(engine.search_results(), "alice").is_removed);
    assert!(find(engine.search_results(), "Albert").is_removed);
}
