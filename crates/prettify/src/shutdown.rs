use std::future::Future;
use std::pin::pin;

use crate::environment::Environment;

/// Runs the formatting operation, and when an interrupt or terminate
/// signal arrives while it is still in flight, drains it before
/// returning instead of aborting a write mid-file. No timeout is
/// imposed on the drain.
pub async fn run_with_signal_drain<TEnvironment, TFuture, TResult>(environment: &TEnvironment, operation: TFuture) -> TResult
where
  TEnvironment: Environment,
  TFuture: Future<Output = TResult>,
{
  let mut operation = pin!(operation);
  tokio::select! {
    biased;
    result = &mut operation => result,
    _ = wait_for_shutdown_signal() => {
      environment.log_stderr("About to exit, waiting for files to write...");
      operation.await
    }
  }
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
  use tokio::signal::unix::signal;
  use tokio::signal::unix::SignalKind;

  let sigterm = signal(SignalKind::terminate());
  match sigterm {
    Ok(mut sigterm) => {
      tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
      }
    }
    Err(_) => {
      let _ = tokio::signal::ctrl_c().await;
    }
  }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
  let _ = tokio::signal::ctrl_c().await;
}
