use super::*;

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

/// Off the browser every request helper is an inert stub that resolves
/// immediately, so a single poll with a no-op waker drives it to completion.
fn poll_ready<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("stub future did not resolve immediately"),
    }
}

// =============================================================
// Non-browser stubs
// =============================================================

#[test]
fn collection_fetches_error_off_the_browser() {
    assert!(poll_ready(fetch_users()).is_err());
    assert!(poll_ready(fetch_donors()).is_err());
    assert!(poll_ready(fetch_patients()).is_err());
    assert!(poll_ready(fetch_auto_matches()).is_err());
    assert!(poll_ready(fetch_report_matches()).is_err());
}

#[test]
fn summary_fetches_error_off_the_browser() {
    assert!(poll_ready(fetch_stats()).is_err());
    assert!(poll_ready(fetch_reports_summary()).is_err());
}

#[test]
fn session_probe_is_none_off_the_browser() {
    assert!(poll_ready(fetch_me()).is_none());
}
