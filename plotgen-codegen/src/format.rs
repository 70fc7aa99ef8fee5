//! Hook for an external source formatter.

use crate::error::CodegenError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Final formatting pass applied to generated source before it is written.
pub trait SourceFormatter {
    /// Formats one source unit.
    ///
    /// # Errors
    /// Returns `CodegenError::Format` if formatting fails.
    fn format(&self, source: &str) -> Result<String, CodegenError>;
}

/// Leaves source untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl SourceFormatter for Passthrough {
    fn format(&self, source: &str) -> Result<String, CodegenError> {
        Ok(source.to_string())
    }
}

/// Pipes source through an external program (stdin to stdout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
}

impl ExternalFormatter {
    /// Creates a formatter running `program` with `args`.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Creates a formatter from a command line, program first.
    #[must_use]
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    fn error(&self, message: impl Into<String>) -> CodegenError {
        CodegenError::Format {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}

impl SourceFormatter for ExternalFormatter {
    fn format(&self, source: &str) -> Result<String, CodegenError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.error(e.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.error("stdin unavailable"))?;
        let input = source.to_string();
        // Feed stdin from its own thread so a chatty formatter cannot fill
        // the stdout pipe while we are still writing.
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| self.error(e.to_string()))?;
        writer
            .join()
            .map_err(|_| self.error("stdin writer panicked"))?
            .map_err(|e| self.error(e.to_string()))?;

        if !output.status.success() {
            return Err(self.error(format!(
                "exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| self.error(e.to_string()))
    }
}
