use std::cell::RefCell;

use super::*;
use crate::config::Messages;
use crate::export::{self, PrintFallback};

fn contact_policy() -> BannerPolicy {
    BannerPolicy { display_ms: 4000, fade_ms: 300, exclusive_marker: None }
}

fn export_policy() -> BannerPolicy {
    BannerPolicy { display_ms: 3000, fade_ms: 300, exclusive_marker: Some("pdf-notification") }
}

#[test]
fn kinds_map_to_distinct_colors() {
    assert_eq!(BannerKind::Info.color_class(), "bg-blue-500");
    assert_eq!(BannerKind::Success.color_class(), "bg-green-500");
    assert_eq!(BannerKind::Error.color_class(), "bg-red-500");
}

#[test]
fn constructors_set_kind() {
    assert_eq!(Banner::info("a").kind, BannerKind::Info);
    assert_eq!(Banner::success("b").kind, BannerKind::Success);
    let err = Banner::error("c");
    assert_eq!(err.kind, BannerKind::Error);
    assert_eq!(err.message, "c");
}

#[test]
fn unmarked_class_name_has_no_marker() {
    let class = contact_policy().class_name(BannerKind::Success);
    assert!(class.starts_with("fixed top-6"));
    assert!(class.ends_with("bg-green-500"));
    assert!(!class.contains("pdf-notification"));
}

#[test]
fn marked_class_name_leads_with_marker() {
    let class = export_policy().class_name(BannerKind::Error);
    assert!(class.starts_with("pdf-notification "));
    assert!(class.contains(BASE_CLASSES));
    assert!(class.ends_with("bg-red-500"));
}

// =============================================================
// Exclusivity
// =============================================================

/// Banners on screen, kept the way `DomNotifier` keeps `document.body`.
struct Board {
    policy: BannerPolicy,
    shown: RefCell<Vec<(String, Banner)>>,
}

impl Board {
    fn new(policy: BannerPolicy) -> Self {
        Self { policy, shown: RefCell::new(Vec::new()) }
    }

    fn messages(&self) -> Vec<String> {
        self.shown.borrow().iter().map(|(_, banner)| banner.message.clone()).collect()
    }

    fn marked(&self, marker: &str) -> usize {
        self.shown
            .borrow()
            .iter()
            .filter(|(class, _)| class.split_ascii_whitespace().any(|c| c == marker))
            .count()
    }
}

impl Notifier for Board {
    fn notify(&self, banner: Banner) {
        let mut shown = self.shown.borrow_mut();
        shown.retain(|(class, _)| !self.policy.evicts(class));
        shown.push((self.policy.class_name(banner.kind), banner));
    }
}

impl PrintFallback for Board {
    fn schedule_print(&self, _delay_ms: u32) {}
}

#[test]
fn exclusive_policy_evicts_its_own_marker() {
    let policy = export_policy();
    assert!(policy.evicts(&policy.class_name(BannerKind::Info)));
    assert!(policy.evicts("pdf-notification"));
}

#[test]
fn exclusive_policy_leaves_other_banners_alone() {
    let policy = export_policy();
    assert!(!policy.evicts(&contact_policy().class_name(BannerKind::Success)));
    assert!(!policy.evicts("pdf-notification-old fixed"));
    assert!(!policy.evicts(""));
}

#[test]
fn unmarked_policy_evicts_nothing() {
    let policy = contact_policy();
    assert!(!policy.evicts(&export_policy().class_name(BannerKind::Info)));
    assert!(!policy.evicts(&policy.class_name(BannerKind::Error)));
}

#[test]
fn failed_export_leaves_one_exporter_banner() {
    let messages = Messages::default();
    let board = Board::new(export_policy());

    export::begin(&board, &messages);
    assert_eq!(board.marked("pdf-notification"), 1);
    export::finish(Err(export::ExportError::MissingRegion("#cv".to_owned())), &board, &board, &messages, 1000);

    assert_eq!(board.marked("pdf-notification"), 1);
    assert_eq!(board.shown.borrow().len(), 1);
    assert_eq!(board.shown.borrow()[0].1.kind, BannerKind::Error);
}

#[test]
fn successful_export_replaces_preparing_banner() {
    let messages = Messages::default();
    let board = Board::new(export_policy());

    export::begin(&board, &messages);
    export::finish(Ok(()), &board, &board, &messages, 1000);

    assert_eq!(board.messages(), vec![messages.export_success.clone()]);
}

#[test]
fn contact_banners_stack() {
    let board = Board::new(contact_policy());
    board.notify(Banner::error("first"));
    board.notify(Banner::success("second"));
    assert_eq!(board.messages(), vec!["first".to_owned(), "second".to_owned()]);
}
