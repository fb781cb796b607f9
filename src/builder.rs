//! Harness build invocation.

use crate::error::{CliError, Result};
use crate::output;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Invokes the build tool in the harness directory.
#[derive(Debug, Clone)]
pub(crate) struct Builder {
    program: String,
    dir: PathBuf,
}

impl Builder {
    pub(crate) fn new(program: &str, dir: &Path) -> Self {
        Self {
            program: program.to_string(),
            dir: dir.to_path_buf(),
        }
    }

    /// Run the build tool with no arguments, as the harness Makefile expects.
    pub(crate) fn build(&self) -> Result<()> {
        let output = Command::new(&self.program)
            .current_dir(&self.dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        if !output.status.success() {
            return Err(CliError::BuildFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: output::tail(&String::from_utf8_lossy(&output.stderr), 12),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(path: &Path, body: &str) {
        std::fs::write(path, body).unwrap();
        let mut perms = std::fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    fn test_build_runs_in_harness_dir() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("make");
        write_script(&stub, "#!/bin/sh\ntouch qtest\n");
        Builder::new(stub.to_str().unwrap(), dir.path())
            .build()
            .unwrap();
        assert!(dir.path().join("qtest").is_file());
    }

    #[test]
    fn test_build_failure_carries_stderr_tail() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("make");
        write_script(&stub, "#!/bin/sh\necho 'queue.c:10: error: oops' >&2\nexit 2\n");
        let err = Builder::new(stub.to_str().unwrap(), dir.path())
            .build()
            .unwrap_err();
        match err {
            CliError::BuildFailed { status, stderr } => {
                assert_eq!(status, 2);
                assert!(stderr.contains("queue.c:10"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_build_tool_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Builder::new("/nonexistent/make", dir.path())
            .build()
            .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
