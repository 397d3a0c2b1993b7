//! Synchronous external-tool invocation with captured output.
//!
//! Exit status is data here, not an error: callers inspect
//! [`ToolOutput::code`] explicitly after the call returns. Only failures to
//! spawn, wait, or read the pipes surface as errors.

use std::ffi::{OsStr, OsString};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use wait_timeout::ChildExt;

/// One blocking invocation of an external tool, built up fluently.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    timeout: Option<Duration>,
}

/// What a finished invocation produced. Both streams are decoded lossily so
/// that assertion failures can always print them.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl ToolInvocation {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            cwd: None,
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Working directory for the child; defaults to the caller's.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Bound the wait. Without this (or the env override) the call blocks
    /// until the child exits.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Apply `HELPCHECK_TIMEOUT_SECS` when set to a positive integer.
    /// An explicit [`timeout`](Self::timeout) takes precedence.
    pub fn timeout_from_env(mut self) -> Self {
        if self.timeout.is_none() {
            if let Ok(v) = std::env::var("HELPCHECK_TIMEOUT_SECS") {
                self.timeout = parse_timeout_secs(&v);
            }
        }
        self
    }

    /// Run the tool to completion, capturing both streams.
    pub fn run(&self) -> Result<ToolOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let started = Instant::now();
        let mut child = cmd.spawn().with_context(|| {
            format!("failed to spawn `{}`", self.program.to_string_lossy())
        })?;
        let mut stdout_pipe = child.stdout.take();
        let mut stderr_pipe = child.stderr.take();

        // Help output fits well below the pipe buffer, so waiting before
        // draining the pipes cannot stall the child.
        let status = match self.timeout {
            None => child.wait().context("failed to wait for process")?,
            Some(limit) => match child
                .wait_timeout(limit)
                .context("failed to wait with timeout")?
            {
                Some(status) => status,
                None => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(anyhow!(
                        "`{}` timed out after {:?}",
                        self.program.to_string_lossy(),
                        limit
                    ));
                }
            },
        };
        let duration = started.elapsed();

        Ok(ToolOutput {
            code: status.code(),
            stdout: drain_lossy(stdout_pipe.as_mut())?,
            stderr: drain_lossy(stderr_pipe.as_mut())?,
            duration,
        })
    }
}

/// Positive integral seconds; anything else means "no bound".
pub fn parse_timeout_secs(v: &str) -> Option<Duration> {
    match v.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => None,
    }
}

fn drain_lossy(stream: Option<&mut impl Read>) -> Result<String> {
    let mut buf = Vec::new();
    if let Some(reader) = stream {
        reader
            .read_to_end(&mut buf)
            .context("failed to read process output")?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
