// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const SHORT: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn post_then_wait_succeeds_immediately_and_second_wait_times_out() {
    let handoff = BinaryHandoff::new("key");
    handoff.post();

    let start = Instant::now();
    assert_eq!(handoff.wait(SHORT).await, Ok(()));
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert!(!handoff.is_posted());

    let err = handoff.wait(SHORT).await.unwrap_err();
    assert_eq!(
        err,
        WaitError::TimedOut {
            handoff: "key".to_string(),
            waited: SHORT,
        }
    );
    assert_eq!(start.elapsed(), SHORT);
}

#[tokio::test(start_paused = true)]
async fn repeated_posts_collapse_into_one_permit() {
    let handoff = BinaryHandoff::new("key");
    handoff.post();
    handoff.post();
    handoff.post();

    assert!(handoff.wait(SHORT).await.is_ok());
    assert!(handoff.wait(SHORT).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn waiter_wakes_when_permit_is_posted() {
    let handoff = BinaryHandoff::new("key");
    let consumer = {
        let handoff = handoff.clone();
        tokio::spawn(async move {
            let start = Instant::now();
            handoff.wait(Duration::from_secs(60)).await.map(|_| start.elapsed())
        })
    };

    tokio::time::sleep(Duration::from_secs(10)).await;
    handoff.post();

    let waited = consumer.await.unwrap().unwrap();
    assert_eq!(waited, Duration::from_secs(10));
    assert!(!handoff.is_posted());
}

#[tokio::test(start_paused = true)]
async fn one_post_satisfies_exactly_one_of_two_waiters() {
    let handoff = BinaryHandoff::new("key");
    let spawn_waiter = |h: BinaryHandoff| tokio::spawn(async move { h.wait(SHORT).await });
    let a = spawn_waiter(handoff.clone());
    let b = spawn_waiter(handoff.clone());

    tokio::task::yield_now().await;
    handoff.post();

    let results = [a.await.unwrap(), b.await.unwrap()];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn zero_timeout_still_takes_a_pending_permit() {
    let handoff = BinaryHandoff::new("key");
    handoff.post();
    assert!(handoff.wait(Duration::ZERO).await.is_ok());
}

#[test]
fn debug_shows_state() {
    let handoff = BinaryHandoff::new("key");
    handoff.post();
    let debug = format!("{:?}", handoff);
    assert!(debug.contains("Posted"), "{}", debug);
}
