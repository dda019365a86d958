//! gopass secret store backend.
//!
//! Drives the `gopass` CLI as a child process. gopass owns encryption,
//! synchronisation and access control; this backend only moves secret bodies
//! in and out.
//!
//! ## Requirements
//!
//! - `gopass` CLI must be installed (or pointed at with `--gopass-bin`)
//! - The password store must be initialised (`gopass setup`)

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::domain::{StorePath, StoredSecret};
use crate::error::{Result, StoreError};

/// gopass backend using the gopass CLI
#[derive(Debug, Clone)]
pub struct Gopass {
    bin: PathBuf,
    timeout: Duration,
}

impl Gopass {
    /// Create a backend running `bin` with a per-operation `timeout`.
    pub fn new(bin: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    /// Resolve the gopass executable.
    ///
    /// Bare names are searched on `PATH`; anything containing a separator is
    /// taken as a path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if no such executable exists.
    pub fn locate(bin: &Path) -> Result<PathBuf> {
        which::which(bin).map_err(|e| {
            StoreError::Unavailable(format!("{} not found: {}", bin.display(), e)).into()
        })
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Run gopass with `args`, feeding `input` on stdin.
    ///
    /// The child is killed if the token fires or the timeout elapses first.
    async fn run(
        &self,
        op: &'static str,
        args: &[&str],
        input: Option<&str>,
        token: &CancellationToken,
    ) -> Result<Output> {
        trace!(op, args = ?args, "running gopass");

        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .env("GOPASS_NO_NOTIFY", "true")
            .env("GOPASS_NO_REMINDER", "true")
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|e| {
            StoreError::Unavailable(format!("failed to spawn {}: {}", self.bin.display(), e))
        })?;

        let io = async move {
            if let (Some(input), Some(mut stdin)) = (input, child.stdin.take()) {
                stdin.write_all(input.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            child.wait_with_output().await
        };

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(op, "gopass interrupted");
                Err(StoreError::Cancelled.into())
            }
            result = tokio::time::timeout(self.timeout, io) => match result {
                Ok(output) => Ok(output?),
                Err(_) => Err(StoreError::Timeout(self.timeout.as_secs()).into()),
            },
        }
    }
}

/// Whether gopass reported `path` as missing rather than a real failure.
///
/// Only gopass's own missing-entry wording counts; tools gopass shells out
/// to (gpg, git) report their own failures as "not found" too.
fn is_not_found(output: &Output, path: &str) -> bool {
    let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
    let missing_entry = format!("entry '{}' not found", path.to_lowercase());
    stderr.contains("is not in the password store") || stderr.contains(&missing_entry)
}

fn failure(op: &'static str, path: &str, output: &Output) -> StoreError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = match stderr.trim() {
        "" => output.status.to_string(),
        msg => msg.to_string(),
    };
    StoreError::OperationFailed {
        op,
        path: path.to_string(),
        reason,
    }
}

#[async_trait]
impl SecretStore for Gopass {
    fn name(&self) -> &'static str {
        "gopass"
    }

    async fn get(
        &self,
        path: &StorePath,
        token: &CancellationToken,
    ) -> Result<Option<StoredSecret>> {
        let output = self
            .run("show", &["show", "--force", "--noparsing", path.as_str()], None, token)
            .await?;

        if !output.status.success() {
            if is_not_found(&output, path.as_str()) {
                return Ok(None);
            }
            return Err(failure("show", path.as_str(), &output).into());
        }

        let body = String::from_utf8(output.stdout).map_err(|_| StoreError::OperationFailed {
            op: "show",
            path: path.to_string(),
            reason: "secret is not valid UTF-8".to_string(),
        })?;
        Ok(Some(StoredSecret::from_body(&body)))
    }

    async fn set(
        &self,
        path: &StorePath,
        secret: &StoredSecret,
        token: &CancellationToken,
    ) -> Result<()> {
        let body = zeroize::Zeroizing::new(secret.to_body());
        let output = self
            .run("insert", &["insert", "--force", path.as_str()], Some(body.as_str()), token)
            .await?;

        if !output.status.success() {
            return Err(failure("insert", path.as_str(), &output).into());
        }
        Ok(())
    }

    async fn delete(&self, path: &StorePath, token: &CancellationToken) -> Result<()> {
        let output = self
            .run("rm", &["rm", "--force", path.as_str()], None, token)
            .await?;

        if !output.status.success() && !is_not_found(&output, path.as_str()) {
            return Err(failure("rm", path.as_str(), &output).into());
        }
        Ok(())
    }

    async fn list(&self, path: &StorePath, token: &CancellationToken) -> Result<Vec<String>> {
        let output = self.run("ls", &["ls", "--flat"], None, token).await?;

        if !output.status.success() {
            return Err(failure("ls", path.as_str(), &output).into());
        }

        let prefix = format!("{}/", path);
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|name| name.starts_with(&prefix))
            .map(str::to_string)
            .collect())
    }
}
