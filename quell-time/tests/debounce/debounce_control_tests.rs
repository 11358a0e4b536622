// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use quell_runtime::ManualTimer;
use quell_test_utils::{
    ms,
    test_data::{query_r, query_ru, query_rus},
    CallRecorder, SearchQuery,
};
use quell_time::{debounce_with_timer, DebounceOptions, Debounced};

fn debounced(
    timer: &ManualTimer,
    options: DebounceOptions,
) -> (
    CallRecorder<SearchQuery>,
    Debounced<SearchQuery, SearchQuery, ManualTimer>,
) {
    let recorder = CallRecorder::new(timer);
    let debounced = debounce_with_timer(recorder.callable(), ms(100), options, timer.clone());
    (recorder, debounced)
}

#[test]
fn test_cancel_drops_pending_invocation() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, debounced) = debounced(&timer, DebounceOptions::default());
    debounced.call(query_r());
    timer.advance(ms(10));
    debounced.call(query_ru());

    // Act
    debounced.cancel();
    timer.advance(ms(500));

    // Assert
    assert_eq!(recorder.count(), 0);
    assert!(!debounced.pending());
    assert_eq!(timer.scheduled_count(), 0);
}

#[test]
fn test_cancel_starts_a_fresh_burst() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, debounced) = debounced(&timer, DebounceOptions::new().leading(true));
    debounced.call(query_r());
    timer.advance(ms(10));
    debounced.call(query_ru());

    // Act
    debounced.cancel();
    timer.advance(ms(10));
    let result = debounced.call(query_rus());

    // Assert
    assert_eq!(result, Some(query_rus()));
    assert_eq!(recorder.args(), vec![query_r(), query_rus()]);
    assert_eq!(recorder.times(), vec![ms(0), ms(20)]);
}

#[test]
fn test_cancel_keeps_cached_result() {
    // Arrange
    let timer = ManualTimer::new();
    let (_recorder, debounced) = debounced(&timer, DebounceOptions::default());
    debounced.call(query_r());
    timer.advance(ms(100));
    debounced.call(query_ru());

    // Act
    debounced.cancel();

    // Assert
    assert_eq!(debounced.flush(), Some(query_r()));
}

#[test]
fn test_flush_invokes_pending_call_immediately() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, debounced) = debounced(&timer, DebounceOptions::default());
    debounced.call(query_r());
    timer.advance(ms(10));
    debounced.call(query_ru());

    // Act
    let result = debounced.flush();
    timer.advance(ms(500));

    // Assert
    assert_eq!(result, Some(query_ru()));
    assert_eq!(recorder.times(), vec![ms(10)]);
    assert_eq!(recorder.count(), 1);
    assert!(!debounced.pending());
}

#[test]
fn test_flush_without_pending_returns_cached_result() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, debounced) = debounced(&timer, DebounceOptions::default());

    // Act & Assert
    assert_eq!(debounced.flush(), None);

    debounced.call(query_r());
    timer.advance(ms(100));
    assert_eq!(debounced.flush(), Some(query_r()));
    assert_eq!(recorder.count(), 1);
}

#[test]
fn test_flush_twice_invokes_once() {
    // Arrange
    let timer = ManualTimer::new();
    let (recorder, debounced) = debounced(&timer, DebounceOptions::default());
    debounced.call(query_r());

    // Act
    let first = debounced.flush();
    let second = debounced.flush();

    // Assert
    assert_eq!(first, Some(query_r()));
    assert_eq!(second, Some(query_r()));
    assert_eq!(recorder.count(), 1);
}

#[test]
fn test_flush_with_both_edges_off_never_invokes() {
    // Arrange
    let timer = ManualTimer::new();
    let options = DebounceOptions::new().leading(false).trailing(false);
    let (recorder, debounced) = debounced(&timer, options);
    debounced.call(query_r());

    // Act
    let result = debounced.flush();
    timer.advance(ms(500));

    // Assert
    assert_eq!(result, None);
    assert_eq!(recorder.count(), 0);
    assert!(!debounced.pending());
}

#[test]
fn test_pending_tracks_scheduled_check() {
    // Arrange
    let timer = ManualTimer::new();
    let (_recorder, debounced) = debounced(&timer, DebounceOptions::default());

    // Act & Assert
    assert!(!debounced.pending());
    debounced.call(query_r());
    assert!(debounced.pending());
    timer.advance(ms(100));
    assert!(!debounced.pending());
}
