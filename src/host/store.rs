//! # Disk Storage
//!
//! `FileStore` backed by a directory on disk. The directory is created on
//! first write. Writes go to a hidden `.<name>.tmp` sibling and are renamed
//! into place, so a failed save never leaves a half-written report behind.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::report::{FileHandle, FileStore, ReportError};

pub struct DiskFileStore {
    dir: PathBuf,
}

impl DiskFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// `report.txt` -> `.report.txt.tmp`, in the same directory.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `content` to `path` via a hidden temp file + rename.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let tmp_path = temp_path(path);
    fs::write(&tmp_path, content)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

impl FileStore for DiskFileStore {
    fn save(&mut self, name: &str, content: &str) -> Result<FileHandle, ReportError> {
        let path = self.dir.join(name);
        fs::create_dir_all(&self.dir)
            .and_then(|()| atomic_write(&path, content))
            .map_err(|source| ReportError::IoFailure {
                path: path.clone(),
                source,
            })?;
        Ok(FileHandle::new(path))
    }

    fn find(&self, name: &str) -> Option<FileHandle> {
        let path = self.dir.join(name);
        path.is_file().then(|| FileHandle::new(path))
    }
}
