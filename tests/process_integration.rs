use std::path::PathBuf;
use std::time::Duration;

use lintpipe::process::{ProcessConfig, run_combined};

fn make_config(command: &str, args: &[&str]) -> ProcessConfig {
    ProcessConfig {
        command: PathBuf::from(command),
        args: args.iter().map(|s| s.to_string()).collect(),
        timeout: None,
    }
}

#[tokio::test]
async fn test_combined_stream_keeps_write_order() {
    let config = make_config("bash", &["-c", "echo out1; echo err1 >&2; echo out2"]);
    let output = run_combined(config).await.unwrap();
    assert!(output.success());
    assert_eq!(output.combined, "out1\nerr1\nout2\n");
}

#[tokio::test]
async fn test_nonzero_exit_with_output() {
    let config = make_config("bash", &["-c", "echo before_fail; exit 42"]);
    let output = run_combined(config).await.unwrap();
    assert!(!output.success());
    assert_eq!(output.exit_code, 42);
    assert_eq!(output.signal, None);
    assert_eq!(output.combined, "before_fail\n");
}

#[tokio::test]
async fn test_empty_output() {
    let config = make_config("true", &[]);
    let output = run_combined(config).await.unwrap();
    assert!(output.success());
    assert!(output.combined.is_empty());
}

#[tokio::test]
#[cfg(unix)]
async fn test_signal_killed() {
    // Process kills itself with SIGKILL
    let config = make_config("bash", &["-c", "kill -9 $$"]);
    let output = run_combined(config).await.unwrap();
    assert!(!output.success());
    assert_eq!(output.signal, Some(9));
}

#[tokio::test]
async fn test_timeout() {
    let mut config = make_config("sleep", &["30"]);
    config.timeout = Some(Duration::from_millis(200));
    let result = run_combined(config).await;
    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("timed out"));
}

#[tokio::test]
async fn test_spawn_failure() {
    let config = make_config("nonexistent_binary_xyz_123", &[]);
    let result = run_combined(config).await;
    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("failed to spawn"));
}
