//! Test: Retry Behavior - failures are rerun until one attempt passes

use crate::helpers::*;
use behave_rerun::{AttemptKind, RunnerError};

/// maxRetries=2, initial fails, retry 1 fails, retry 2 passes
#[tokio::test]
async fn test_success_on_second_retry() {
    let run = run_with_exit_codes(&test_config(2), vec![1, 1, 0]).await.unwrap();

    assert_run_passed(&run);
    assert_eq!(run.retry_invocations(), 2);
    assert_eq!(run.summary.retry_count(), 2);
}

#[tokio::test]
async fn test_success_on_first_retry_stops_loop() {
    // The script only covers two attempts; a third would error out
    let run = run_with_exit_codes(&test_config(5), vec![1, 0]).await.unwrap();

    assert_run_passed(&run);
    assert_eq!(run.retry_invocations(), 1);
}

/// Success at retry k means exactly k retries, for every k within the budget
#[tokio::test]
async fn test_stops_at_first_passing_retry() {
    let max_retries = 4;
    for k in 1..=max_retries {
        let mut codes = vec![1; k as usize];
        codes.push(0);

        let run = run_with_exit_codes(&test_config(max_retries), codes).await.unwrap();

        assert_run_passed(&run);
        assert_eq!(run.retry_invocations(), k as usize, "success at retry {}", k);
    }
}

#[tokio::test]
async fn test_any_nonzero_code_counts_as_failure() {
    let run = run_with_exit_codes(&test_config(2), vec![2, -1, 0]).await.unwrap();

    assert_run_passed(&run);
    assert_eq!(run.retry_invocations(), 2);
    assert_eq!(run.summary.attempts[0].outcome.exit_code, 2);
    assert_eq!(run.summary.attempts[1].outcome.exit_code, -1);
}

#[tokio::test]
async fn test_attempts_recorded_in_order() {
    let run = run_with_exit_codes(&test_config(3), vec![1, 1, 0]).await.unwrap();

    let kinds: Vec<AttemptKind> = run.summary.attempts.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![AttemptKind::Initial, AttemptKind::Retry(1), AttemptKind::Retry(2)]
    );
    assert!(run
        .summary
        .attempts
        .windows(2)
        .all(|w| w[0].started_at <= w[1].started_at));
}

#[tokio::test]
async fn test_retry_delay_is_applied() {
    let mut config = test_config(2);
    config.runner.retry_delay = std::time::Duration::from_millis(20);

    let start = std::time::Instant::now();
    let run = run_with_exit_codes(&config, vec![1, 1, 0]).await.unwrap();

    assert_run_passed(&run);
    assert!(start.elapsed() >= std::time::Duration::from_millis(40));
}

#[tokio::test]
async fn test_spawn_failure_propagates() {
    let executor = MockExecutor::missing_binary();
    let runner = behave_rerun::RetryRunner::new(executor.clone());

    let result = runner.run(&test_config(3)).await;

    assert!(matches!(result, Err(RunnerError::Spawn { .. })));
    assert!(executor.commands().is_empty());
}
