//! # Report Flow
//!
//! Carries out the report effects returned by `update()`. Owns the writer and
//! the launcher, so the collaborators are injected once at start-up and the
//! rest of the core never touches storage or the host directly.

use crate::core::action::{Action, Effect};
use crate::core::intent::{ReportLauncher, Sharer};
use crate::core::report::{
    FileHandle, FileStore, REPORT_FILE_NAME, ReportDocument, ReportError, ReportWriter,
};

pub struct ReportFlow<F: FileStore, S: Sharer> {
    pub writer: ReportWriter<F>,
    pub launcher: ReportLauncher<S>,
}

impl<F: FileStore, S: Sharer> ReportFlow<F, S> {
    pub fn new(store: F, sharer: S) -> Self {
        Self {
            writer: ReportWriter::new(store),
            launcher: ReportLauncher::new(sharer),
        }
    }

    /// Write the report, then ask the host to show it.
    /// The host is not asked anything when the write fails.
    pub fn save_and_open(&mut self) -> Result<FileHandle, ReportError> {
        let document = ReportDocument::generate();
        let file = self.writer.save(document.body(), REPORT_FILE_NAME)?;
        self.launcher.open_externally(&file);
        Ok(file)
    }

    /// Ask the host to share the saved report.
    pub fn share(&mut self) -> Result<FileHandle, ReportError> {
        let Some(file) = self.writer.saved(REPORT_FILE_NAME) else {
            log::warn!("Share requested before {} was saved", REPORT_FILE_NAME);
            return Err(ReportError::NotFound(REPORT_FILE_NAME.to_string()));
        };
        self.launcher.share_externally(&file);
        Ok(file)
    }

    /// Run an effect. Report effects answer with the action carrying their outcome.
    pub fn perform(&mut self, effect: &Effect) -> Option<Action> {
        match effect {
            Effect::SaveAndOpenReport => Some(Action::ReportSaved(self.save_and_open())),
            Effect::ShareReport => Some(Action::ReportShared(self.share())),
            Effect::None | Effect::Quit => None,
        }
    }
}
