//! yt-dlp process handle

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, YtGrabError};

/// Captured result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs an external command to completion and captures its output
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> std::io::Result<ProcessOutput>;
}

/// Runs commands with `tokio::process`
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> std::io::Result<ProcessOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Where and how to run yt-dlp
#[derive(Clone)]
pub struct YtDlp {
    program: String,
    working_dir: Option<PathBuf>,
    runner: Arc<dyn ProcessRunner>,
}

impl YtDlp {
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(program, Arc::new(SystemRunner))
    }

    pub fn with_runner(program: impl Into<String>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            program: program.into(),
            working_dir: None,
            runner,
        }
    }

    /// Run downloads from `dir` instead of the current directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Fail with `MissingDependency` if the executable can't be found
    pub async fn ensure_available(&self) -> Result<()> {
        if is_command_available(&self.program).await {
            Ok(())
        } else {
            Err(YtGrabError::MissingDependency(self.program.clone()))
        }
    }

    /// Run yt-dlp with `args` and wait for it to exit
    pub async fn run(&self, args: &[String]) -> Result<ProcessOutput> {
        tracing::debug!(program = %self.program, ?args, "spawning");

        let output = self
            .runner
            .run(&self.program, args, self.working_dir.as_deref())
            .await
            .map_err(|e| YtGrabError::Spawn(format!("Failed to start {}: {}", self.program, e)))?;

        tracing::info!(program = %self.program, code = ?output.code, "process exited");
        Ok(output)
    }
}

/// Check if a command is available in PATH
async fn is_command_available(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .await
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
pub mod stub {
    use super::*;
    use std::sync::Mutex;

    /// Returns canned output and records every argument list it receives
    pub struct RunnerStub {
        output: Option<ProcessOutput>,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl RunnerStub {
        pub fn returning(output: ProcessOutput) -> Arc<Self> {
            Arc::new(Self {
                output: Some(output),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn exiting(code: i32, stdout: &str, stderr: &str) -> Arc<Self> {
            Self::returning(ProcessOutput {
                code: Some(code),
                stdout: stdout.into(),
                stderr: stderr.into(),
            })
        }

        /// Simulates a program that can't be spawned
        pub fn missing() -> Arc<Self> {
            Arc::new(Self {
                output: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessRunner for RunnerStub {
        async fn run(&self, _program: &str, args: &[String], _cwd: Option<&Path>) -> std::io::Result<ProcessOutput> {
            self.calls.lock().unwrap().push(args.to_vec());
            self.output
                .clone()
                .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::RunnerStub;
    use super::*;

    #[tokio::test]
    async fn test_run_records_args() {
        let runner = RunnerStub::exiting(0, "ok", "");
        let ytdlp = YtDlp::with_runner("yt-dlp", runner.clone());

        let output = ytdlp.run(&["--version".to_string()]).await.unwrap();

        assert_eq!(output.code, Some(0));
        assert_eq!(runner.calls(), vec![vec!["--version".to_string()]]);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_spawn_error() {
        let ytdlp = YtDlp::with_runner("yt-dlp", RunnerStub::missing());
        let err = ytdlp.run(&[]).await.unwrap_err();
        assert!(matches!(err, YtGrabError::Spawn(_)));
    }

    #[tokio::test]
    async fn test_missing_program_is_reported() {
        let ytdlp = YtDlp::new("definitely-not-a-real-binary-yt-grab");
        let err = ytdlp.ensure_available().await.unwrap_err();
        assert!(matches!(err, YtGrabError::MissingDependency(_)));
    }
}
