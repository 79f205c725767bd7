//! Directory creation capability
//!
//! Steps never touch the filesystem directly. They go through a
//! [`DirectoryCreator`] so the real filesystem can be swapped for a fake.

use std::io;
use std::path::Path;
use std::sync::Arc;

/// Creates a directory together with any missing ancestors
pub trait DirectoryCreator: Send + Sync {
    /// Create `path` and every missing ancestor.
    ///
    /// Must succeed without changes when the directory already exists, and
    /// must tolerate other processes creating shared ancestors concurrently.
    ///
    /// # Errors
    ///
    /// Fails when a component exists but is not a directory, or when the
    /// filesystem refuses the creation.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Creates directories on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectories;

impl DirectoryCreator for LocalDirectories {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

impl<T: DirectoryCreator + ?Sized> DirectoryCreator for Arc<T> {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }
}

impl<T: DirectoryCreator + ?Sized> DirectoryCreator for &T {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }
}
