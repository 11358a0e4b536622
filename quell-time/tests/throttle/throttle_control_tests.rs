// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use quell_runtime::ManualTimer;
use quell_test_utils::{
    ms,
    test_data::{query_r, query_ru, query_rus},
    CallRecorder, Invocation, SearchQuery,
};
use quell_time::{throttle_with_timer, ThrottleOptions, Throttled};

fn throttled(
    timer: &ManualTimer,
) -> (
    CallRecorder<SearchQuery>,
    Throttled<SearchQuery, SearchQuery, ManualTimer>,
) {
    let recorder = CallRecorder::new(timer);
    let throttled = throttle_with_timer(
        recorder.callable(),
        ms(100),
        ThrottleOptions::default(),
        timer.clone(),
    );
    (recorder, throttled)
}

#[test]
fn test_throttle_cancel_drops_trailing_invocation() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, throttled) = throttled(&timer);
    throttled.call(query_r());
    timer.advance(ms(30));
    throttled.call(query_ru());

    // Act
    throttled.cancel();
    timer.advance(ms(500));

    // Assert
    assert_eq!(recorder.args(), vec![query_r()]);
    assert!(!throttled.pending());
}

#[test]
fn test_throttle_cancel_resets_window() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, throttled) = throttled(&timer);
    throttled.call(query_r());
    timer.advance(ms(10));
    throttled.call(query_ru());

    // Act
    throttled.cancel();
    timer.advance(ms(10));
    let result = throttled.call(query_rus());

    // Assert
    assert_eq!(result, Some(query_rus()));
    assert_eq!(recorder.times(), vec![ms(0), ms(20)]);
}

#[test]
fn test_throttle_flush_runs_trailing_invocation_now() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, throttled) = throttled(&timer);
    throttled.call(query_r());
    timer.advance(ms(10));
    throttled.call(query_ru());

    // Act
    let result = throttled.flush();
    timer.advance(ms(500));

    // Assert
    assert_eq!(result, Some(query_ru()));
    assert_eq!(
        recorder.invocations(),
        vec![
            Invocation {
                args: query_r(),
                at: ms(0),
            },
            Invocation {
                args: query_ru(),
                at: ms(10),
            },
        ]
    );
}

#[test]
fn test_throttle_receiver_is_passed_through() {
    // Arrange
    let timer = ManualTimer::new();
    let recorder = CallRecorder::new(&timer);
    let throttled = Throttled::with_receiver(
        recorder.callable_with_receiver::<&'static str>(),
        ms(100),
        ThrottleOptions::default(),
        timer.clone(),
    );

    // Act
    let leading = throttled.call_with("progress-bar", query_r());
    timer.advance(ms(10));
    throttled.call_with("status-line", query_ru());
    let trailing = throttled.flush();

    // Assert
    assert_eq!(leading, Some((Some("progress-bar"), query_r())));
    assert_eq!(trailing, Some((Some("status-line"), query_ru())));
}

#[test]
fn test_throttle_clones_share_window() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, throttled) = throttled(&timer);
    let clone = throttled.clone();

    // Act
    throttled.call(query_r());
    timer.advance(ms(30));
    let result = clone.call(query_ru());
    timer.advance(ms(500));

    // Assert
    assert_eq!(result, Some(query_r()));
    assert_eq!(recorder.args(), vec![query_r(), query_ru()]);
    assert_eq!(recorder.times(), vec![ms(0), ms(100)]);
}

#[test]
fn test_throttle_drop_cancels_trailing_invocation() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, throttled) = throttled(&timer);
    throttled.call(query_r());
    timer.advance(ms(30));
    throttled.call(query_ru());

    // Act
    drop(throttled);
    timer.advance(ms(500));

    // Assert
    assert_eq!(recorder.count(), 1);
    assert_eq!(timer.scheduled_count(), 0);
}

#[test]
fn test_throttle_debug_reports_settings() {
    // Arrange
    let timer = ManualTimer::new();
    let (_recorder, throttled) = throttled(&timer);
    throttled.call(query_r());

    // Act
    let debug = format!("{throttled:?}");

    // Assert
    assert!(debug.contains("Throttled"));
    assert!(debug.contains("pending: true"));
}
