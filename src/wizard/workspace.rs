//! Editor workspace integration.
//!
//! Uses the VS Code CLI when it is on the PATH; otherwise just prints the
//! project location so the user can open it themselves.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::WorkspaceController;

/// Workspace controller backed by the `code` CLI.
#[derive(Debug)]
pub struct EditorWorkspace {
    editor: Option<PathBuf>,
}

impl Default for EditorWorkspace {
    fn default() -> Self {
        Self::detect()
    }
}

impl EditorWorkspace {
    /// Probe the PATH for the VS Code CLI.
    pub fn detect() -> Self {
        Self { editor: find_in_path("code") }
    }

    /// True when an editor CLI was found.
    pub fn available(&self) -> bool {
        self.editor.is_some()
    }

    fn run(&self, args: &[&str], path: &Path) -> io::Result<()> {
        let Some(editor) = &self.editor else {
            println!("Open the project at {}", path.display());
            return Ok(());
        };

        let status = Command::new(editor).args(args).arg(path).status()?;
        if !status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {status}",
                editor.display()
            )));
        }
        Ok(())
    }
}

impl WorkspaceController for EditorWorkspace {
    fn add_to_workspace(&self, path: &Path) -> io::Result<()> {
        tracing::debug!(path = %path.display(), "adding folder to workspace");
        self.run(&["--add"], path)
    }

    fn open_new_window(&self, path: &Path) -> io::Result<()> {
        tracing::debug!(path = %path.display(), "opening folder in new window");
        self.run(&["--new-window"], path)
    }
}

/// Locate an executable on the PATH.
fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    for dir in env::split_paths(&path) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        #[cfg(windows)]
        {
            let candidate = dir.join(format!("{name}.cmd"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_path_misses_unknown_binary() {
        assert!(find_in_path("definitely-not-a-real-binary-name").is_none());
    }

    #[test]
    fn test_missing_editor_is_not_an_error() {
        let workspace = EditorWorkspace { editor: None };
        assert!(workspace.add_to_workspace(Path::new("/tmp/demo")).is_ok());
        assert!(workspace.open_new_window(Path::new("/tmp/demo")).is_ok());
    }
}
