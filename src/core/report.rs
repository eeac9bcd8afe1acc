//! # Test Report
//!
//! The report is a constant checklist. Saving it writes the same bytes to the
//! same file every time, so a second save simply overwrites the first.
//!
//! Storage goes through the [`FileStore`] trait. The real implementation
//! lives in `host::store`; tests use an in-memory store.

use std::fmt;
use std::io;
use std::path::{self, Path, PathBuf};

use url::Url;

/// Well-known name of the user-facing report inside the report directory.
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Name of the start-up diagnostic file inside the app-private data directory.
pub const DIAGNOSTIC_FILE_NAME: &str = "test-report-dashboard.txt";

pub const REPORT_TITLE: &str = "Test Report";

/// The checklist shared by the report body and the diagnostic file.
pub const CHECKLIST: [&str; 3] = [
    "✅ Welcome text displayed",
    "✅ Stat cards displayed",
    "✅ Recent activity displayed",
];

/// Immutable report content. Generating it takes no input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    body: String,
}

impl ReportDocument {
    pub fn generate() -> Self {
        let body = format!("{REPORT_TITLE}\n\n{}", CHECKLIST.join("\n"));
        Self { body }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Content of the diagnostic file: one checklist line per row, each newline-terminated.
pub fn diagnostic_body() -> String {
    CHECKLIST.iter().map(|line| format!("{line}\n")).collect()
}

/// A file that has been written at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Percent-encoded `file://` URI handed to the host when asking it to
    /// open or share the file. Relative paths are made absolute first.
    pub fn uri(&self) -> String {
        path::absolute(&self.path)
            .ok()
            .and_then(|absolute| Url::from_file_path(absolute).ok())
            .map(String::from)
            .unwrap_or_else(|| format!("file://{}", self.path.display()))
    }
}

#[derive(Debug)]
pub enum ReportError {
    /// The write could not complete (directory not writable, disk full, ...).
    IoFailure { path: PathBuf, source: io::Error },
    /// Share was requested before any report had been saved.
    NotFound(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::IoFailure { path, source } => {
                write!(f, "could not write {}: {source}", path.display())
            }
            ReportError::NotFound(name) => write!(f, "{name} has not been saved yet"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::IoFailure { source, .. } => Some(source),
            ReportError::NotFound(_) => None,
        }
    }
}

/// Application-scoped writable storage.
pub trait FileStore {
    /// Write `content` verbatim to `name`, replacing whatever was there.
    fn save(&mut self, name: &str, content: &str) -> Result<FileHandle, ReportError>;

    /// Handle to `name` if it currently exists.
    fn find(&self, name: &str) -> Option<FileHandle>;
}

/// Writes report content through a [`FileStore`]. One attempt, no retries.
pub struct ReportWriter<F: FileStore> {
    store: F,
}

impl<F: FileStore> ReportWriter<F> {
    pub fn new(store: F) -> Self {
        Self { store }
    }

    pub fn save(&mut self, content: &str, destination_name: &str) -> Result<FileHandle, ReportError> {
        match self.store.save(destination_name, content) {
            Ok(file) => {
                log::info!("Report saved at: {}", file.path().display());
                Ok(file)
            }
            Err(e) => {
                log::error!("Error saving report {}: {}", destination_name, e);
                Err(e)
            }
        }
    }

    pub fn saved(&self, name: &str) -> Option<FileHandle> {
        self.store.find(name)
    }

    pub fn store(&self) -> &F {
        &self.store
    }
}

/// Writes the start-up diagnostic file. Failure is logged and otherwise ignored.
pub fn write_diagnostics<F: FileStore>(store: &mut F) -> Option<FileHandle> {
    match store.save(DIAGNOSTIC_FILE_NAME, &diagnostic_body()) {
        Ok(file) => {
            log::debug!("Internal report saved at: {}", file.path().display());
            Some(file)
        }
        Err(e) => {
            log::error!("Error saving internal report: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryFileStore;

    #[test]
    fn test_report_body_is_fixed_checklist() {
        let doc = ReportDocument::generate();
        assert_eq!(
            doc.body(),
            "Test Report\n\n✅ Welcome text displayed\n✅ Stat cards displayed\n✅ Recent activity displayed"
        );
        assert_eq!(doc, ReportDocument::generate());
    }

    #[test]
    fn test_diagnostic_body_lines_are_terminated() {
        let body = diagnostic_body();
        assert_eq!(body.lines().count(), 3);
        assert!(body.ends_with("displayed\n"));
        assert!(body.starts_with("✅ Welcome text displayed\n"));
    }

    #[test]
    fn test_file_handle_uri() {
        let file = FileHandle::new("/tmp/reports/report.txt");
        assert_eq!(file.uri(), "file:///tmp/reports/report.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_handle_uri_is_percent_encoded() {
        let file = FileHandle::new("/home/ada/My Reports/report #1.txt");
        assert_eq!(file.uri(), "file:///home/ada/My%20Reports/report%20%231.txt");
    }

    #[test]
    fn test_relative_path_uri_is_absolute() {
        let file = FileHandle::new("reports/report.txt");
        let uri = file.uri();
        assert!(uri.starts_with("file:///"), "{uri}");
        assert!(uri.ends_with("/reports/report.txt"), "{uri}");
    }

    #[test]
    fn test_writer_overwrites_previous_content() {
        let mut store = MemoryFileStore::default();
        store.save(REPORT_FILE_NAME, "stale content").unwrap();

        let mut writer = ReportWriter::new(store);
        let body = ReportDocument::generate();
        writer.save(body.body(), REPORT_FILE_NAME).unwrap();
        writer.save(body.body(), REPORT_FILE_NAME).unwrap();

        assert_eq!(writer.store().content(REPORT_FILE_NAME), Some(body.body()));
        assert!(writer.saved(REPORT_FILE_NAME).is_some());
    }

    #[test]
    fn test_writer_surfaces_io_failure() {
        let mut writer = ReportWriter::new(MemoryFileStore::read_only());
        let err = writer.save("x", REPORT_FILE_NAME).unwrap_err();
        assert!(matches!(err, ReportError::IoFailure { .. }));
        assert!(writer.saved(REPORT_FILE_NAME).is_none());
    }

    #[test]
    fn test_write_diagnostics() {
        let mut store = MemoryFileStore::default();
        let file = write_diagnostics(&mut store).unwrap();
        assert!(file.path().ends_with(DIAGNOSTIC_FILE_NAME));
        assert_eq!(store.content(DIAGNOSTIC_FILE_NAME), Some(diagnostic_body().as_str()));

        assert!(write_diagnostics(&mut MemoryFileStore::read_only()).is_none());
    }

    #[test]
    fn test_not_found_display_names_file() {
        let err = ReportError::NotFound(REPORT_FILE_NAME.to_string());
        assert_eq!(err.to_string(), "report.txt has not been saved yet");
    }
}
