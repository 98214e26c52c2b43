//! Filesystem boundary for site export and config init
//!
//! `PageService` and `config init` only create directories and write whole
//! files. `MemoryFileSystem` records those writes so export can be checked
//! without touching disk.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

pub trait FileSystem: Send + Sync {
    /// Replace the file at `path` with `content`.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing ancestors.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create the directory that will hold `path`.
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// In-memory filesystem: directories and file contents keyed by path.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    dirs: Vec<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the file at `path`, if written.
    pub fn file(&self, path: &Path) -> Option<String> {
        self.lock().files.get(path).cloned()
    }

    /// All written files, sorted by path.
    pub fn files(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // a poisoned lock still holds consistent maps
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSystem for MemoryFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut state = self.lock();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !state.dirs.iter().any(|d| d == parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such directory: {}", parent.display()),
                ));
            }
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.files.contains_key(path) || state.dirs.iter().any(|d| d == path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        if state.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("not a directory: {}", path.display()),
            ));
        }
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            if !state.dirs.iter().any(|d| d == ancestor) {
                state.dirs.push(ancestor.to_path_buf());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_missing_parent_when_writing_then_fails() {
        let fs = MemoryFileSystem::new();
        let err = fs.write(Path::new("site/index.html"), "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn given_ensure_parent_when_writing_nested_then_succeeds() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("site/feedback/index.html");

        fs.ensure_parent(path).unwrap();
        fs.write(path, "<html>").unwrap();

        assert!(fs.exists(Path::new("site")));
        assert!(fs.exists(Path::new("site/feedback")));
        assert_eq!(fs.file(path).as_deref(), Some("<html>"));
    }

    #[test]
    fn given_file_when_creating_directory_over_it_then_fails() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("dist"), "file").unwrap();
        assert!(fs.create_dir_all(Path::new("dist")).is_err());
    }
}
