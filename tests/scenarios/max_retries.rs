//! Test: Max Retries - the retry budget is never exceeded

use crate::helpers::*;

/// maxRetries=0 and a failing initial run: no retry, run fails
#[tokio::test]
async fn test_max_retries_zero() {
    let run = run_with_exit_codes(&test_config(0), vec![1]).await.unwrap();

    assert_run_failed(&run);
    assert_eq!(run.retry_invocations(), 0);
    assert_eq!(run.commands.len(), 1);
}

/// maxRetries=1, initial fails, retry 1 fails
#[tokio::test]
async fn test_max_retries_one_exhausted() {
    let run = run_with_exit_codes(&test_config(1), vec![1, 1]).await.unwrap();

    assert_run_failed(&run);
    assert_eq!(run.retry_invocations(), 1);
}

#[tokio::test]
async fn test_all_retries_fail() {
    let run = run_with_exit_codes(&test_config(3), vec![1, 1, 1, 1]).await.unwrap();

    assert_run_failed(&run);
    assert_eq!(run.retry_invocations(), 3);
    assert_eq!(run.summary.attempts.len(), 4);
}

#[tokio::test]
async fn test_retries_never_exceed_budget() {
    for max_retries in 0..5u32 {
        // More failures scripted than the budget allows
        let codes = vec![1; max_retries as usize + 3];
        let run = run_with_exit_codes(&test_config(max_retries), codes).await.unwrap();

        assert_run_failed(&run);
        assert_eq!(run.retry_invocations(), max_retries as usize);
    }
}

#[tokio::test]
async fn test_success_on_last_retry() {
    let run = run_with_exit_codes(&test_config(3), vec![1, 1, 1, 0]).await.unwrap();

    assert_run_passed(&run);
    assert_eq!(run.retry_invocations(), 3);
}
