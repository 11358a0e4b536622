// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use quell_error::QuellError;
use quell_test_utils::{
    ms,
    test_data::{query_r, query_ru, query_rus},
    CallRecorder, SearchQuery,
};
use quell_time::{throttle, ThrottleOptions};
use tokio::time::{sleep, Instant};

#[test]
fn test_throttle_requires_tokio_runtime() {
    let result = throttle(|n: u32| n, ms(100), ThrottleOptions::default());

    assert!(matches!(
        result,
        Err(QuellError::RuntimeUnavailable { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_throttle_on_tokio() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let recorder = CallRecorder::<SearchQuery>::with_clock(move || start.elapsed());
    let throttled = throttle(recorder.callable(), ms(100), ThrottleOptions::default())?;

    // Act
    let leading = throttled.call(query_r());
    sleep(ms(30)).await;
    throttled.call(query_ru());
    sleep(ms(30)).await;
    throttled.call(query_rus());
    sleep(ms(300)).await;

    // Assert
    assert_eq!(leading, Some(query_r()));
    assert_eq!(recorder.args(), vec![query_r(), query_rus()]);

    let times = recorder.times();
    assert_eq!(times[0], ms(0));
    assert!(times[1] >= ms(100) && times[1] < ms(110));

    Ok(())
}
