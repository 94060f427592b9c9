use super::*;

#[test]
fn script_activates_immediately_and_claims_clients() {
    assert!(WORKER_SCRIPT.contains("'install'"));
    assert!(WORKER_SCRIPT.contains("self.skipWaiting()"));
    assert!(WORKER_SCRIPT.contains("'activate'"));
    assert!(WORKER_SCRIPT.contains("self.clients.claim()"));
}

#[test]
fn script_does_not_cache_or_intercept_fetches() {
    assert!(!WORKER_SCRIPT.contains("caches"));
    assert!(!WORKER_SCRIPT.contains("'fetch'"));
}

#[test]
fn script_is_served_as_javascript() {
    assert_eq!(WORKER_MIME, "application/javascript");
}

#[test]
fn loaded_page_registers_immediately() {
    assert_eq!(registration_timing("complete"), RegistrationTiming::Now);
}

#[test]
fn page_still_loading_waits_for_load_event() {
    assert_eq!(registration_timing("loading"), RegistrationTiming::OnLoad);
    assert_eq!(registration_timing("interactive"), RegistrationTiming::OnLoad);
    assert_eq!(registration_timing(""), RegistrationTiming::OnLoad);
}
