use super::*;

#[test]
fn roster_failed_message_includes_status() {
    assert_eq!(roster_failed_message(503), "recipient list request failed: 503");
}

#[test]
fn post_failed_message_includes_body_when_present() {
    assert_eq!(
        post_failed_message(400, " No message recipients provided. \n"),
        "message rejected: 400: No message recipients provided."
    );
    assert_eq!(post_failed_message(500, "  "), "message rejected: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_roster_is_unavailable_without_browser() {
    let result = block_on_ready(fetch_roster());
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Drive a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
