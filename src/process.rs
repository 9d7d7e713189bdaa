//! External process execution for the Run and Install actions
//!
//! Commands are always started from an explicit argument vector. File paths
//! and package names typed by the user travel as single arguments and are
//! never interpreted by a shell.
//!
//! Execution is synchronous with no timeout: a child that never exits keeps
//! the caller blocked.

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{EditorError, Result};

/// A program plus its argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub program: String,
    pub args: Vec<OsString>,
    /// Working directory; inherits the editor's when `None`
    pub current_dir: Option<PathBuf>,
}

impl ProcessRequest {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Human-readable command line, for logs and status messages only
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Run `request` to completion and capture its output.
///
/// stdout and stderr share one pipe, so the returned text keeps the order
/// in which the child wrote it. A non-zero exit yields
/// [`EditorError::Process`] carrying the same captured text.
pub fn run_captured(request: &ProcessRequest) -> Result<String> {
    tracing::info!("Running {}", request.display());

    let spawn_error = |source: io::Error| EditorError::Spawn {
        program: request.program.clone(),
        source,
    };

    let (mut reader, writer) = io::pipe().map_err(spawn_error)?;
    let stderr_writer = writer.try_clone().map_err(spawn_error)?;

    let mut command = Command::new(&request.program);
    command
        .args(&request.args)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(stderr_writer);
    if let Some(dir) = &request.current_dir {
        command.current_dir(dir);
    }

    let mut child = command.spawn().map_err(spawn_error)?;
    // The command still holds both write ends; the read only ends once they close
    drop(command);

    let mut raw = Vec::new();
    let read = reader.read_to_end(&mut raw);
    let status = child.wait().map_err(spawn_error)?;
    read.map_err(spawn_error)?;

    let combined = String::from_utf8_lossy(&raw).into_owned();

    if status.success() {
        tracing::debug!("{} exited successfully", request.program);
        Ok(combined)
    } else {
        tracing::warn!("{} exited with {}", request.program, status);
        Err(EditorError::Process {
            program: request.program.clone(),
            code: status.code(),
            output: combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ProcessRequest::new("python3")
            .args(["-m", "pip", "install"])
            .arg("requests; rm -rf /");
        assert_eq!(request.args.len(), 4);
        assert_eq!(request.args[3], OsString::from("requests; rm -rf /"));
        assert_eq!(
            request.display(),
            "python3 -m pip install requests; rm -rf /"
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let request = ProcessRequest::new("albert-no-such-program-for-tests");
        let err = run_captured(&request).unwrap_err();
        assert!(matches!(err, EditorError::Spawn { .. }));
    }
}
