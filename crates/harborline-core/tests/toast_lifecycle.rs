//! Toast lifecycle tests on a paused clock

use std::time::Duration;

use harborline_core::{ToastKind, ToastPhase, ToastQueue, ToastTiming};
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn test_toast_visible_then_fading_then_removed() {
    let queue = ToastQueue::default();
    let id = queue.success("Message sent successfully!");

    assert_eq!(queue.snapshot().get(id).unwrap().phase(), ToastPhase::Visible);

    sleep(ms(2999)).await;
    assert_eq!(queue.snapshot().get(id).unwrap().phase(), ToastPhase::Visible);

    sleep(ms(2)).await;
    let surface = queue.snapshot();
    let toast = surface.get(id).unwrap();
    assert_eq!(toast.phase(), ToastPhase::Fading);
    assert_eq!(toast.class(), "toast success fading");

    sleep(ms(298)).await;
    assert!(queue.snapshot().get(id).is_some(), "still attached during fade");

    sleep(ms(2)).await;
    let surface = queue.snapshot();
    assert!(surface.get(id).is_none());
    assert!(surface.is_attached(), "container stays once created");
    assert!(surface.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_toasts_have_independent_timers() {
    let queue = ToastQueue::default();
    let first = queue.error("Required");
    sleep(ms(1000)).await;
    let second = queue.error("Network error. Please try again.");

    sleep(ms(2301)).await;
    let surface = queue.snapshot();
    assert!(surface.get(first).is_none());
    assert_eq!(surface.get(second).unwrap().phase(), ToastPhase::Visible);

    sleep(ms(1000)).await;
    assert!(queue.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_many_toasts_all_removed_on_time() {
    let queue = ToastQueue::default();
    for i in 0..50 {
        queue.push(format!("toast {i}"), ToastKind::Success);
    }
    assert_eq!(queue.snapshot().len(), 50);

    sleep(ms(3299)).await;
    assert_eq!(queue.snapshot().len(), 50);

    sleep(ms(2)).await;
    assert!(queue.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_duplicates_are_not_merged() {
    let queue = ToastQueue::default();
    let a = queue.error("Required");
    let b = queue.error("Required");
    assert_ne!(a, b);
    assert_eq!(queue.snapshot().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_custom_timing() {
    let queue = ToastQueue::new(ToastTiming {
        display: ms(100),
        fade: ms(50),
    });
    assert_eq!(queue.timing().lifetime(), ms(150));
    let id = queue.success("quick");

    sleep(ms(101)).await;
    assert_eq!(queue.snapshot().get(id).unwrap().phase(), ToastPhase::Fading);
    sleep(ms(50)).await;
    assert!(queue.snapshot().get(id).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_subscriber_sees_every_transition() {
    let queue = ToastQueue::default();
    let mut rx = queue.subscribe();
    let id = queue.success("hello");

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 1);

    rx.changed().await.unwrap();
    assert_eq!(
        rx.borrow_and_update().get(id).unwrap().phase(),
        ToastPhase::Fading
    );

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_empty());
}
