use std::sync::mpsc as std_mpsc;

use super::*;
use crate::test_support::FakeExecutor;

fn env() -> JobEnv {
    JobEnv {
        executor: Arc::new(FakeExecutor::new()),
        cwd: PathBuf::from("/ws"),
        credentials: Credentials::None,
    }
}

fn wait_for(runner: &mut OperationRunner) -> Completion {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(done) = runner.poll() {
            return done;
        }
        assert!(Instant::now() < deadline, "operation did not finish");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn completion_is_delivered_exactly_once() {
    let mut runner = OperationRunner::default();
    let op = PendingOperation::new("Working", PresentOptions::new("Work"), |_| {
        CommandResult::ok("done")
    });
    runner.run(ScreenId::Repository, op, env()).unwrap();
    assert!(runner.is_busy());
    assert_eq!(runner.indicator().map(|(t, _)| t), Some("Working"));

    let done = wait_for(&mut runner);
    assert_eq!(done.origin, ScreenId::Repository);
    assert_eq!(done.title, "Working");
    assert_eq!(done.result, CommandResult::ok("done"));

    assert!(!runner.is_busy());
    assert!(runner.poll().is_none());
    assert_eq!(
        runner.stats(),
        RunnerStats {
            started: 1,
            completed: 1,
            rejected: 0
        }
    );
}

#[test]
fn second_run_while_busy_is_rejected() {
    let mut runner = OperationRunner::default();
    let (release_tx, release_rx) = std_mpsc::channel::<()>();
    let slow = PendingOperation::new("Pushing", PresentOptions::new("Push"), move |_| {
        let _ = release_rx.recv();
        CommandResult::ok("")
    });
    runner.run(ScreenId::Repository, slow, env()).unwrap();

    let second = PendingOperation::new("Pulling", PresentOptions::new("Pull"), |_| {
        CommandResult::ok("")
    });
    let err = runner.run(ScreenId::Repository, second, env()).unwrap_err();
    assert_eq!(err.running, "Pushing");
    assert_eq!(runner.stats().rejected, 1);

    release_tx.send(()).unwrap();
    let done = wait_for(&mut runner);
    assert_eq!(done.title, "Pushing");
    assert_eq!(runner.stats().started, 1);
}

#[test]
fn worker_panic_becomes_failed_result() {
    let mut runner = OperationRunner::default();
    let op = PendingOperation::new("Exploding", PresentOptions::new("Boom"), |_| {
        panic!("worker blew up")
    });
    runner.run(ScreenId::Workspace, op, env()).unwrap();

    let done = wait_for(&mut runner);
    assert!(!done.result.is_success());
    assert!(!runner.is_busy());
}

#[test]
fn job_sees_the_environment_it_was_started_with() {
    let mut runner = OperationRunner::default();
    let op = PendingOperation::new("Echo", PresentOptions::new("Echo"), |env| {
        CommandResult::ok(format!(
            "{} {}",
            env.cwd.display(),
            env.credentials.username().unwrap_or("-")
        ))
    })
    .gated();
    assert!(op.requires_credentials);

    let env = JobEnv {
        credentials: Credentials::pair("alice", "secret"),
        ..env()
    };
    runner.run(ScreenId::Repository, op, env).unwrap();
    assert_eq!(wait_for(&mut runner).result.text, "/ws alice");
}
