//! The one I/O boundary of the crate: running the interface-listing command.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Errors that can occur while obtaining the interface listing
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to run {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} exited with {status}: {stderr}")]
    Exited {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{path} did not finish within {timeout:?}")]
    TimedOut { path: PathBuf, timeout: Duration },

    #[error("Failed to read output of {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} produced non UTF-8 output")]
    NonUtf8 { path: PathBuf },
}

/// Source of raw interface-listing text.
pub trait InterfaceListing {
    /// Run the listing program at `path` and return its standard output.
    fn run(&self, path: &Path) -> Result<String, ScanError>;
}

/// Runs the listing program as a child process.
#[derive(Debug, Clone, Default)]
pub struct CommandListing {
    pub args: Vec<String>,
    /// Kill the child and fail if it runs longer than this.
    pub timeout: Option<Duration>,
}

impl CommandListing {
    pub fn new(args: Vec<String>, timeout: Option<Duration>) -> Self {
        Self { args, timeout }
    }

    fn wait_with_timeout(
        path: &Path,
        child: &mut Child,
        timeout: Duration,
    ) -> Result<ExitStatus, ScanError> {
        let deadline = Instant::now() + timeout;
        loop {
            let polled = child.try_wait().map_err(|source| ScanError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;
            if let Some(status) = polled {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                warn!("{} timed out after {:?}, killing it", path.display(), timeout);
                // The child may have exited between try_wait and kill
                let _ = child.kill();
                let _ = child.wait();
                return Err(ScanError::TimedOut {
                    path: path.to_path_buf(),
                    timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

/// Wait for a reader thread. A read error or a panicked reader is an error,
/// never a truncated buffer.
fn collect(
    path: &Path,
    reader: thread::JoinHandle<io::Result<Vec<u8>>>,
) -> Result<Vec<u8>, ScanError> {
    let read_err = |source: io::Error| ScanError::Read {
        path: path.to_path_buf(),
        source,
    };
    reader
        .join()
        .map_err(|_| read_err(io::Error::new(io::ErrorKind::Other, "output reader panicked")))?
        .map_err(read_err)
}

impl InterfaceListing for CommandListing {
    fn run(&self, path: &Path) -> Result<String, ScanError> {
        debug!("Running {} {:?}", path.display(), self.args);

        let spawn_err = |source: io::Error| ScanError::Spawn {
            path: path.to_path_buf(),
            source,
        };

        let mut child = Command::new(path)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // Drain pipes on their own threads so a chatty child cannot block on a
        // full pipe while we wait for it.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.timeout {
            Some(timeout) => Self::wait_with_timeout(path, &mut child, timeout)?,
            None => child.wait().map_err(spawn_err)?,
        };

        let stdout = collect(path, stdout)?;
        let stderr = collect(path, stderr)?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
            warn!("{} exited with {}", path.display(), status);
            return Err(ScanError::Exited {
                path: path.to_path_buf(),
                status,
                stderr,
            });
        }

        String::from_utf8(stdout).map_err(|_| ScanError::NonUtf8 {
            path: path.to_path_buf(),
        })
    }
}

/// Fixed listing text, ignoring the path. Used for saved output and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticListing(pub String);

impl InterfaceListing for StaticListing {
    fn run(&self, _path: &Path) -> Result<String, ScanError> {
        Ok(self.0.clone())
    }
}
