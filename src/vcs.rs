//! Version-control status queries.
//!
//! The inspector only needs one thing from version control: the raw output
//! of a status query run inside a project directory. [`VcsProbe`] is that
//! seam; [`GitCli`] implements it by shelling out to `git`.

use std::{
    io::Read,
    path::Path,
    process::{Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use thiserror::Error;

/// Interval between exit checks while waiting on the subprocess.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Failures of a status query. Never surfaced to tool callers.
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Source of version-control status for a directory.
pub trait VcsProbe: Send + Sync {
    /// Raw status output, one changed path per line.
    ///
    /// # Errors
    ///
    /// Returns a [`VcsError`] if the query cannot be run or fails.
    fn status(&self, dir: &Path) -> Result<String, VcsError>;
}

/// Status via `git status --porcelain`.
#[derive(Clone, Debug)]
pub struct GitCli {
    program: String,
    timeout: Duration,
}

impl GitCli {
    /// Use the `git` found on `PATH`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("git", timeout)
    }

    /// Use a specific executable.
    #[must_use]
    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl VcsProbe for GitCli {
    fn status(&self, dir: &Path) -> Result<String, VcsError> {
        let mut child = Command::new(&self.program)
            .args(["status", "--porcelain"])
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| VcsError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Pipes are drained concurrently: the child must never stall on a
        // full pipe while we poll for its exit.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(VcsError::Timeout {
                        program: self.program.clone(),
                        timeout: self.timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    return Err(VcsError::Spawn {
                        program: self.program.clone(),
                        source,
                    });
                }
            }
        };

        let stdout = stdout.map(collect).unwrap_or_default();
        let stderr = stderr.map(collect).unwrap_or_default();

        if !status.success() {
            return Err(VcsError::Failed {
                program: self.program.clone(),
                status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(stdout)
    }
}

/// Read a pipe to the end on a background thread.
fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: thread::JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}
