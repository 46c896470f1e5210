//! Clipboard access through the platform's copy tool.
//! - macOS: pbcopy
//! - Linux: wl-copy, xclip or xsel
//! - Windows: clip.exe

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// Failure to hand text to a clipboard tool
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to write to {program}: {source}")]
    Write {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },
}

/// A detected clipboard tool plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    program: PathBuf,
    args: Vec<String>,
}

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl ClipboardCommand {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Find the first clipboard tool available on `PATH`
    pub fn detect() -> Option<Self> {
        CANDIDATES.iter().find_map(|(name, args)| {
            which::which(name).ok().map(|program| {
                debug!("Using clipboard tool {}", program.display());
                Self::new(program, args.iter().map(|a| a.to_string()).collect())
            })
        })
    }

    /// Pipe `text` into the tool's stdin.
    ///
    /// The child is always waited on, including when the write fails.
    pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let program = self.program.display().to_string();

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: program.clone(),
                source,
            })?;

        // Dropping stdin closes the pipe so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(|source| ClipboardError::Wait {
            program: program.clone(),
            source,
        })?;

        written.map_err(|source| ClipboardError::Write {
            program: program.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Exit { program, status })
        }
    }
}
