//! Documentation preview launcher
//!
//! Runs the mintlify dev server in the docs directory with inherited stdio
//! and reports how it exited.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{error, info};

use crate::{Error, Result};

pub const PREVIEW_PROGRAM: &str = "mintlify";
pub const PREVIEW_PORT: u16 = 7778;

/// External preview command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl PreviewCommand {
    /// `mintlify dev --port 7778` in `docs_dir`
    pub fn mintlify(docs_dir: &Path) -> Self {
        Self {
            program: PREVIEW_PROGRAM.to_string(),
            args: vec![
                "dev".to_string(),
                "--port".to_string(),
                PREVIEW_PORT.to_string(),
            ],
            cwd: docs_dir.to_path_buf(),
        }
    }

    /// The command line handed to the shell
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    // Run through the shell so PATH shims such as `mintlify.cmd` resolve
    fn shell_command(&self) -> Command {
        #[cfg(windows)]
        let mut cmd = {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(self.command_line());
            c
        };
        #[cfg(not(windows))]
        let mut cmd = {
            let mut c = Command::new("sh");
            c.arg("-c").arg(self.command_line());
            c
        };
        cmd.current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Spawn the command and wait for it. Returns the child's exit code;
    /// a child killed by a signal reports 1.
    pub fn run(&self) -> Result<i32> {
        let mut child = self.shell_command().spawn().map_err(|e| {
            error!("Failed to start {}: {}", self.program, e);
            Error::LaunchError(format!("{}: {}", self.program, e))
        })?;

        let status = child.wait()?;
        let code = status.code().unwrap_or(1);
        info!("{} exited with code {}", self.program, code);
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mintlify_command_uses_fixed_port() {
        let cmd = PreviewCommand::mintlify(Path::new("docs"));
        assert_eq!(cmd.command_line(), "mintlify dev --port 7778");
        assert_eq!(cmd.cwd, PathBuf::from("docs"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_is_forwarded() {
        let cmd = PreviewCommand {
            program: "exit".to_string(),
            args: vec!["3".to_string()],
            cwd: PathBuf::from("."),
        };
        assert_eq!(cmd.run().unwrap(), 3);
    }

    #[test]
    fn missing_directory_is_a_launch_error() {
        let cmd = PreviewCommand::mintlify(Path::new("/nonexistent/quanta-docs"));
        assert!(matches!(cmd.run(), Err(Error::LaunchError(_))));
    }
}
