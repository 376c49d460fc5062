//! Ephemeral per-request working directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// An exclusively-owned scratch directory holding one submission's source
/// and build artifacts. Released exactly once; `Drop` is the backstop for
/// early-return and panic paths.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    released: bool,
}

impl Workspace {
    /// Create a uniquely-named directory under the system temp dir. The
    /// uuid makes collisions between concurrently live workspaces
    /// impossible in practice.
    pub fn acquire() -> io::Result<Workspace> {
        let root = std::env::temp_dir().join(format!("codebox-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "workspace acquired");
        Ok(Workspace {
            root,
            released: false,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.root
    }

    /// Write the single source file for this request.
    pub fn write_source(&self, filename: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.root.join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Recursively delete the directory tree. Idempotent; deletion failures
    /// are logged, never propagated, so cleanup can never block a response.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        match fs::remove_dir_all(&self.root) {
            Ok(()) => debug!(root = %self.root.display(), "workspace released"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "failed to remove workspace")
            }
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.release();
    }
}
