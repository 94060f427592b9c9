use super::*;

fn set_with(mode: TriggerMode, keys: &[&'static str]) -> ObservedSet<&'static str> {
    let mut set = ObservedSet::new(mode);
    for key in keys {
        set.observe(*key);
    }
    set
}

// =============================================================
// Registration
// =============================================================

#[test]
fn observe_rejects_duplicates() {
    let mut set = ObservedSet::new(TriggerMode::Repeatable);
    assert!(set.is_empty());
    assert!(set.observe("a"));
    assert!(!set.observe("a"));
    assert_eq!(set.len(), 1);
    assert!(set.is_observed(&"a"));
    assert!(!set.is_observed(&"b"));
}

// =============================================================
// One-shot
// =============================================================

#[test]
fn one_shot_fires_once_and_unregisters() {
    let mut set = set_with(TriggerMode::OneShot, &["hero", "about"]);

    assert_eq!(set.dispatch([("hero", true)]), vec!["hero"]);
    assert!(!set.is_observed(&"hero"));
    assert!(set.is_observed(&"about"));

    // Scrolling away and back never fires again.
    assert!(set.dispatch([("hero", false)]).is_empty());
    assert!(set.dispatch([("hero", true)]).is_empty());
}

#[test]
fn one_shot_ignores_non_intersecting_entries() {
    let mut set = set_with(TriggerMode::OneShot, &["hero"]);
    assert!(set.dispatch([("hero", false)]).is_empty());
    assert!(set.is_observed(&"hero"));
    assert_eq!(set.dispatch([("hero", true)]), vec!["hero"]);
}

#[test]
fn one_shot_duplicate_entries_in_one_batch_fire_once() {
    let mut set = set_with(TriggerMode::OneShot, &["hero"]);
    assert_eq!(set.dispatch([("hero", true), ("hero", true)]), vec!["hero"]);
}

#[test]
fn unregistered_keys_never_fire() {
    let mut set = set_with(TriggerMode::OneShot, &["hero"]);
    assert!(set.dispatch([("footer", true)]).is_empty());
}

#[test]
fn one_shot_batch_preserves_entry_order() {
    let mut set = set_with(TriggerMode::OneShot, &["a", "b", "c"]);
    let fired = set.dispatch([("c", true), ("b", false), ("a", true)]);
    assert_eq!(fired, vec!["c", "a"]);
    assert_eq!(set.len(), 1);
    assert!(set.is_observed(&"b"));
}

// =============================================================
// Repeatable
// =============================================================

#[test]
fn repeatable_fires_on_every_entry() {
    let mut set = set_with(TriggerMode::Repeatable, &["card"]);
    assert_eq!(set.dispatch([("card", true)]), vec!["card"]);
    assert!(set.dispatch([("card", false)]).is_empty());
    assert_eq!(set.dispatch([("card", true)]), vec!["card"]);
    assert!(set.is_observed(&"card"));
}
