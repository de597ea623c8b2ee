use crate::error::{GitError, Result, ResultExt};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Captured result of an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `program args..` in `cwd` and captures its output.
///
/// A non-zero exit is reported through [`CommandOutput::success`], not as an
/// error; only failing to spawn the process is an error.
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    let line = command_line(program, args);
    debug!(cwd = %cwd.display(), "running {line}");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .with_context(|| format!("Failed to execute `{line}`"))?;

    let result = CommandOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    debug!(success = result.success, "finished {line}");
    Ok(result)
}

/// Like [`run`], but a non-zero exit becomes [`GitError::CommandFailed`].
pub fn run_checked(program: &str, args: &[&str], cwd: &Path) -> Result<String> {
    let output = run(program, args, cwd)?;
    if !output.success {
        return Err(GitError::CommandFailed {
            command: command_line(program, args),
            stderr: output.stderr,
        });
    }
    Ok(output.stdout)
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_arguments() {
        assert_eq!(
            command_line("git", &["log", "main..HEAD", "--oneline"]),
            "git log main..HEAD --oneline"
        );
        assert_eq!(command_line("gh", &[]), "gh");
    }
}
