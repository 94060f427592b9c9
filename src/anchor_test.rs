use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#contact"), Some("contact"));
    assert_eq!(fragment_id(" #projects "), Some("projects"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn non_fragment_href_has_no_target() {
    assert_eq!(fragment_id("https://example.com/#contact"), None);
    assert_eq!(fragment_id("/about"), None);
}

#[test]
fn scroll_target_resolves_existing_element() {
    let page = ["about", "skills", "contact"];
    let found = scroll_target("#skills", |id| page.iter().position(|el| *el == id));
    assert_eq!(found, Some(1));
}

#[test]
fn scroll_target_is_none_for_missing_element() {
    let page = ["about"];
    let found = scroll_target("#contact", |id| page.iter().position(|el| *el == id));
    assert_eq!(found, None);
}

#[test]
fn empty_fragment_never_queries() {
    let found: Option<()> = scroll_target("#", |_| panic!("lookup must not run for an empty fragment"));
    assert_eq!(found, None);
}
