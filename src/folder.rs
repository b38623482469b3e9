use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FolderError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File access for batch upconversion.
pub trait DocumentFolder {
    /// Every file under the folder whose name ends in `extension`, in
    /// sorted order.
    fn find_files_by_extension(&self, extension: &str) -> Result<Vec<PathBuf>, FolderError>;

    fn read_document(&self, file: &Path) -> Result<String, FolderError>;

    /// Replaces `file` with `contents`, first copying the original to
    /// `<file>.bak` when `make_backup` is set.
    fn write_back(&self, file: &Path, contents: &str, make_backup: bool) -> Result<(), FolderError>;
}

/// A folder on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFolder {
    root: PathBuf,
}

impl LocalFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collect(&self, dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> Result<(), FolderError> {
        let list_error = |source| FolderError::List {
            path: dir.to_path_buf(),
            source,
        };
        for entry in fs::read_dir(dir).map_err(list_error)? {
            let path = entry.map_err(list_error)?.path();
            if path.is_dir() {
                self.collect(&path, extension, found)?;
            } else if path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.len() > extension.len() && name.ends_with(extension))
            {
                found.push(path);
            }
        }
        Ok(())
    }
}

/// The backup location for `file`: the same name with `.bak` appended.
pub fn backup_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

impl DocumentFolder for LocalFolder {
    fn find_files_by_extension(&self, extension: &str) -> Result<Vec<PathBuf>, FolderError> {
        let mut found = Vec::new();
        self.collect(&self.root, extension, &mut found)?;
        found.sort();
        debug!(folder = %self.root.display(), extension, count = found.len(), "Discovered files");
        Ok(found)
    }

    fn read_document(&self, file: &Path) -> Result<String, FolderError> {
        fs::read_to_string(file).map_err(|source| FolderError::Read {
            path: file.to_path_buf(),
            source,
        })
    }

    fn write_back(&self, file: &Path, contents: &str, make_backup: bool) -> Result<(), FolderError> {
        if make_backup {
            let backup = backup_path(file);
            fs::copy(file, &backup).map_err(|source| FolderError::Write {
                path: backup.clone(),
                source,
            })?;
            debug!(backup = %backup.display(), "Wrote backup");
        }
        fs::write(file, contents).map_err(|source| FolderError::Write {
            path: file.to_path_buf(),
            source,
        })
    }
}
