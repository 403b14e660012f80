use std::future::Future;
use std::sync::OnceLock;

use tokio::sync::watch;

use super::{RepositoryError, Result};

/// Runs a one-time initialization and replays its outcome forever after.
///
/// The first caller of [`InitGate::run`] starts the initializer on its own
/// task. Callers arriving while it is in progress wait for it, and every
/// caller, including the first, receives a clone of the recorded result. A
/// failed run is never retried.
///
/// The run is marked as started before anything is awaited, and the task is
/// detached from its caller: dropping a waiting `run` future does not cancel
/// the initializer, and later callers wait on that same run.
#[derive(Debug, Default)]
pub struct InitGate {
    outcome: OnceLock<watch::Receiver<Option<Result<()>>>>,
}

impl InitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `init` if no run has started yet, then waits for the recorded outcome.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn run<F, Fut>(&self, init: F) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let mut outcome = self
            .outcome
            .get_or_init(|| {
                let (tx, rx) = watch::channel(None);
                let task = init();
                tokio::spawn(async move {
                    let _ = tx.send(Some(task.await));
                });
                rx
            })
            .clone();

        let recorded = outcome
            .wait_for(Option::is_some)
            .await
            .map(|recorded| recorded.clone());

        match recorded {
            Ok(Some(result)) => result,
            // The task ended without recording anything (it panicked or the
            // runtime shut down). That is final too.
            Ok(None) | Err(_) => Err(RepositoryError::SeedFailed(
                "initialization task ended before recording an outcome".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn counting(
        calls: &Arc<AtomicUsize>,
        delay: Duration,
        result: Result<()>,
    ) -> impl Future<Output = Result<()>> + Send + 'static {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(delay).await;
            result
        }
    }

    #[tokio::test]
    async fn test_runs_once_sequentially() {
        let gate = InitGate::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let result = gate
                .run(|| counting(&calls, Duration::ZERO, Ok(())))
                .await;
            assert_eq!(result, Ok(()));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_sticky() {
        let gate = InitGate::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let disk_full = RepositoryError::SeedFailed("disk full".to_string());

        let first = gate
            .run(|| counting(&calls, Duration::ZERO, Err(disk_full.clone())))
            .await;
        let second = gate
            .run(|| counting(&calls, Duration::ZERO, Ok(())))
            .await;

        assert_eq!(first, Err(disk_full));
        assert_eq!(second, first);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_share_one_run() {
        let gate = Arc::new(InitGate::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let locked = RepositoryError::SeedFailed("locked".to_string());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let gate = gate.clone();
            let calls = calls.clone();
            let locked = locked.clone();
            handles.push(tokio::spawn(async move {
                gate.run(|| counting(&calls, Duration::from_millis(50), Err(locked)))
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), Err(locked.clone()));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_first_caller_does_not_restart_init() {
        let gate = InitGate::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = tokio::time::timeout(
            Duration::from_millis(10),
            gate.run(|| counting(&calls, Duration::from_millis(100), Ok(()))),
        )
        .await;
        assert!(first.is_err(), "first caller should have timed out");

        let second = gate
            .run(|| counting(&calls, Duration::ZERO, Ok(())))
            .await;

        assert_eq!(second, Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_run_still_completes_in_background() {
        let gate = InitGate::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let failure = RepositoryError::SeedFailed("constraint".to_string());

        let _ = tokio::time::timeout(
            Duration::from_millis(5),
            gate.run(|| counting(&calls, Duration::from_millis(30), Err(failure.clone()))),
        )
        .await;
        tokio::time::sleep(Duration::from_millis(60)).await;

        // The background run finished and its failure was recorded.
        assert_eq!(gate.run(|| async { Ok(()) }).await, Err(failure));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_panicking_init_is_reported_as_seed_failure() {
        let gate = InitGate::new();

        let first = gate
            .run(|| async {
                let fixtures: Option<()> = None;
                fixtures.expect("fixtures were generated");
                Ok(())
            })
            .await;

        assert!(matches!(first, Err(RepositoryError::SeedFailed(_))));
        assert_eq!(gate.run(|| async { Ok(()) }).await, first);
    }
}
