//! Opening files and directories with the OS default application
//!
//! The core never branches on platform directly; callers hold a
//! [`SystemOpener`] and the platform choice is isolated behind
//! [`OsOpener`].

use std::io;
use std::path::Path;
use std::process::Command;

/// Capability interface for handing a path to the desktop environment
pub trait SystemOpener {
    /// Open a file or directory with the default application.
    /// Fire-and-forget: the spawned viewer is not waited on.
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Opener backed by the platform's standard open command
#[derive(Debug, Clone, Copy, Default)]
pub struct OsOpener;

#[cfg(target_os = "linux")]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(windows)]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg("start").arg("").arg(path);
    cmd
}

impl SystemOpener for OsOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        tracing::debug!(path = %path.display(), "opening with system handler");
        open_command(path).spawn()?;
        Ok(())
    }
}
