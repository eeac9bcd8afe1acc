//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::core::intent::{IntentRequest, LaunchError, Sharer};
use crate::core::report::{FileHandle, FileStore, ReportError};

/// In-memory storage rooted at a fake `/memory` directory.
#[derive(Default)]
pub struct MemoryFileStore {
    files: HashMap<String, String>,
    read_only: bool,
}

impl MemoryFileStore {
    /// A store that rejects every write, like a revoked storage permission.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    fn path(name: &str) -> PathBuf {
        PathBuf::from("/memory").join(name)
    }
}

impl FileStore for MemoryFileStore {
    fn save(&mut self, name: &str, content: &str) -> Result<FileHandle, ReportError> {
        if self.read_only {
            return Err(ReportError::IoFailure {
                path: Self::path(name),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            });
        }
        self.files.insert(name.to_string(), content.to_string());
        Ok(FileHandle::new(Self::path(name)))
    }

    fn find(&self, name: &str) -> Option<FileHandle> {
        self.files
            .contains_key(name)
            .then(|| FileHandle::new(Self::path(name)))
    }
}

/// Records every request it is handed.
#[derive(Default)]
pub struct RecordingSharer {
    pub requests: Vec<IntentRequest>,
    fail: bool,
}

impl RecordingSharer {
    /// Records requests but reports that no handler exists.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl Sharer for RecordingSharer {
    fn dispatch(&mut self, request: &IntentRequest) -> Result<(), LaunchError> {
        self.requests.push(request.clone());
        if self.fail {
            return Err(LaunchError::NoHandler(request.action));
        }
        Ok(())
    }
}
