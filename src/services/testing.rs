use crate::config::Config;
use crate::domain::constants::RUNNER_SPAWN_FAILED_STATUS;
use crate::domain::models::TestRunOutcome;
use std::path::Path;
use std::process::{Command, Stdio};

pub trait TestRunner {
    /// Run the suite rooted at `path` to completion and return its exit status.
    fn run(&self, config: &Config, path: &Path) -> std::io::Result<i32>;
}

/// `[testing].runner [testing].args... <path>` with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalRunner {
    /// Send the runner's stdout to our stderr, keeping stdout for `--json`.
    pub stdout_to_stderr: bool,
}

impl TestRunner for ExternalRunner {
    fn run(&self, config: &Config, path: &Path) -> std::io::Result<i32> {
        let mut cmd = Command::new(config.test_runner());
        cmd.args(config.test_args()).arg(path);
        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(std::io::stderr()));
        }
        let status = cmd.status()?;
        // killed by a signal
        Ok(status.code().unwrap_or(1))
    }
}

/// Run every `testing.paths` entry in order and sum the exit statuses.
pub fn run_all(config: &Config, runner: &dyn TestRunner) -> TestRunOutcome {
    let mut outcome = TestRunOutcome::default();
    for path in &config.testing.paths {
        tracing::info!(path = %path.display(), runner = config.test_runner(), "running tests");
        let status = match runner.run(config, path) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "test runner failed to start");
                RUNNER_SPAWN_FAILED_STATUS
            }
        };
        tracing::debug!(path = %path.display(), status, "tests finished");
        outcome.record(path.clone(), status);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct ScriptedRunner {
        statuses: HashMap<PathBuf, i32>,
        seen: RefCell<Vec<PathBuf>>,
    }

    impl ScriptedRunner {
        fn new(statuses: &[(&str, i32)]) -> Self {
            Self {
                statuses: statuses
                    .iter()
                    .map(|(p, s)| (PathBuf::from(p), *s))
                    .collect(),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl TestRunner for ScriptedRunner {
        fn run(&self, _config: &Config, path: &Path) -> std::io::Result<i32> {
            self.seen.borrow_mut().push(path.to_path_buf());
            self.statuses.get(path).copied().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "runner not found")
            })
        }
    }

    fn with_paths(paths: &[&str]) -> Config {
        let mut cfg = Config::default();
        cfg.testing.paths = paths.iter().map(PathBuf::from).collect();
        cfg
    }

    #[test]
    fn no_paths_means_zero_sum() {
        let runner = ScriptedRunner::new(&[]);
        let outcome = run_all(&with_paths(&[]), &runner);
        assert_eq!(outcome.sum, 0);
        assert!(outcome.runs.is_empty());
        assert!(runner.seen.borrow().is_empty());
    }

    #[test]
    fn one_failing_path_fails_the_run() {
        let runner = ScriptedRunner::new(&[("a/", 0), ("b/", 1)]);
        let outcome = run_all(&with_paths(&["a/", "b/"]), &runner);
        assert_eq!(outcome.sum, 1);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(
            *runner.seen.borrow(),
            vec![PathBuf::from("a/"), PathBuf::from("b/")]
        );
    }

    #[test]
    fn spawn_failure_is_recorded_and_run_continues() {
        let runner = ScriptedRunner::new(&[("ok/", 0)]);
        let outcome = run_all(&with_paths(&["gone/", "ok/"]), &runner);
        assert_eq!(outcome.runs.len(), 2);
        assert_eq!(outcome.runs[0].status, RUNNER_SPAWN_FAILED_STATUS);
        assert_eq!(outcome.runs[1].status, 0);
        assert_eq!(outcome.sum, i64::from(RUNNER_SPAWN_FAILED_STATUS));
    }

    #[cfg(unix)]
    #[test]
    fn external_runner_reports_exit_codes() {
        let mut cfg = with_paths(&["x"]);
        cfg.testing.runner = Some("false".to_string());
        cfg.testing.args = Some(vec![]);
        assert_eq!(ExternalRunner::default().run(&cfg, Path::new("x")).unwrap(), 1);

        cfg.testing.runner = Some("true".to_string());
        assert_eq!(ExternalRunner::default().run(&cfg, Path::new("x")).unwrap(), 0);
    }
}
