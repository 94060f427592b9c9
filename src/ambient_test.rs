use super::*;
use crate::config::Timing;

#[test]
fn options_are_repeatable_at_thirty_percent() {
    let options = trigger_options();
    assert_eq!(options.threshold, 0.3);
    assert_eq!(options.mode, TriggerMode::Repeatable);
}

#[test]
fn pick_from_empty_is_none() {
    let empty: [u8; 0] = [];
    assert_eq!(pick(0.5, &empty), None);
}

#[test]
fn pick_maps_uniform_buckets_to_indices() {
    let cards = ["tech", "project", "edu", "title"];
    assert_eq!(pick(0.0, &cards), Some(&"tech"));
    assert_eq!(pick(0.24, &cards), Some(&"tech"));
    assert_eq!(pick(0.25, &cards), Some(&"project"));
    assert_eq!(pick(0.5, &cards), Some(&"edu"));
    assert_eq!(pick(0.999, &cards), Some(&"title"));
}

#[test]
fn pick_clamps_out_of_range_samples() {
    let cards = [1, 2, 3];
    assert_eq!(pick(1.0, &cards), Some(&3));
    assert_eq!(pick(7.5, &cards), Some(&3));
    assert_eq!(pick(-0.1, &cards), Some(&1));
    assert_eq!(pick(f64::NAN, &cards), Some(&1));
}

#[test]
fn pick_reaches_every_candidate() {
    let cards: Vec<usize> = (0..5).collect();
    let mut seen = [false; 5];
    for step in 0..100 {
        let sample = f64::from(step) / 100.0;
        if let Some(card) = pick(sample, &cards) {
            seen[*card] = true;
        }
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn single_candidate_is_always_picked() {
    let only = ["edu"];
    for sample in [0.0, 0.3, 0.99] {
        assert_eq!(pick(sample, &only), Some(&"edu"));
    }
}

// =============================================================
// Flash window
// =============================================================

/// Whether the flash class is on the element at `now_ms`, given the start
/// times of every flash applied to it. Each flash's removal fires on its own
/// schedule, so an earlier flash can cut a later one short.
fn lit_at(schedule: Flash, starts: &[u32], now_ms: u32) -> bool {
    let Some(last_add) = starts.iter().copied().filter(|start| *start <= now_ms).max() else {
        return false;
    };
    !starts
        .iter()
        .map(|start| start + schedule.remove_after_ms)
        .any(|removal| removal >= last_add && removal <= now_ms)
}

#[test]
fn flash_uses_highlight_class_and_window() {
    let schedule = flash_schedule(Timing::default().highlight_ms);
    assert_eq!(schedule.class, "light-hit");
    assert_eq!(schedule.remove_after_ms, 2000);
}

#[test]
fn flash_is_removed_after_its_window() {
    let schedule = flash_schedule(2000);
    assert!(lit_at(schedule, &[0], 0));
    assert!(lit_at(schedule, &[0], 1999));
    assert!(!lit_at(schedule, &[0], 2000));
    assert!(!lit_at(schedule, &[0], 8000));
}

#[test]
fn configured_window_is_honored() {
    let schedule = flash_schedule(500);
    assert!(lit_at(schedule, &[100], 599));
    assert!(!lit_at(schedule, &[100], 600));
}

#[test]
fn overlapping_flash_ends_with_the_earlier_removal() {
    let schedule = flash_schedule(2000);
    assert!(lit_at(schedule, &[0, 1500], 1999));
    assert!(!lit_at(schedule, &[0, 1500], 2000));
    assert!(!lit_at(schedule, &[0, 1500], 3500));
}
