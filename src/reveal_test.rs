use std::collections::HashSet;

use super::*;
use crate::visibility::ObservedSet;

#[test]
fn options_require_ten_percent_inside_shrunk_viewport() {
    let options = trigger_options();
    assert_eq!(options.threshold, 0.1);
    assert_eq!(options.root_margin, "0px 0px -50px 0px");
    assert_eq!(options.mode, TriggerMode::OneShot);
}

/// Replays a scroll session through a reveal trigger and tracks which
/// sections carry the revealed class.
#[test]
fn sections_reveal_at_most_once_and_never_revert() {
    let mut set = ObservedSet::new(trigger_options().mode);
    for id in 0..4_u8 {
        set.observe(id);
    }
    let mut revealed = HashSet::new();
    let mut reveal_calls = Vec::new();

    let session: [&[(u8, bool)]; 5] = [
        &[(0, true), (1, false)],
        &[(0, false), (1, true)],
        &[(0, true), (1, true), (2, false)],
        &[(2, true), (3, false)],
        &[(2, false), (0, false)],
    ];
    for batch in session {
        for id in set.dispatch(batch.iter().copied()) {
            reveal_calls.push(id);
            revealed.insert(id);
        }
    }

    assert_eq!(reveal_calls, vec![0, 1, 2]);
    assert_eq!(revealed, HashSet::from([0, 1, 2]));
    assert_eq!(set.len(), 1);
    assert!(set.is_observed(&3));
}
