//! Test: Initial Pass - a green first run never retries

use crate::helpers::*;

#[tokio::test]
async fn test_initial_success_no_retries() {
    let run = run_with_exit_codes(&test_config(3), vec![0]).await.unwrap();

    assert_run_passed(&run);
    assert_eq!(run.commands.len(), 1);
    assert_eq!(run.retry_invocations(), 0);
}

#[tokio::test]
async fn test_initial_success_with_zero_retries() {
    let run = run_with_exit_codes(&test_config(0), vec![0]).await.unwrap();

    assert_run_passed(&run);
    assert_eq!(run.retry_invocations(), 0);
}
