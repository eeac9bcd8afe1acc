//! # Host Requests
//!
//! Opening and sharing a report is the host's job. The core only builds the
//! request: what to do, which file, which MIME type, and a temporary read
//! grant. A [`Sharer`] hands the request to whatever the host provides.

use std::fmt;

use crate::core::report::FileHandle;

pub const TEXT_PLAIN: &str = "text/plain";
pub const OPEN_CHOOSER_TITLE: &str = "Open Report With";
pub const SHARE_CHOOSER_TITLE: &str = "Share Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentAction {
    /// Display a document.
    View,
    /// Hand a document to another application.
    Send,
}

impl IntentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentAction::View => "view",
            IntentAction::Send => "send",
        }
    }
}

/// A chooser request for the host.
///
/// View requests carry the file as `data`; send requests attach it as `stream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRequest {
    pub action: IntentAction,
    pub mime_type: &'static str,
    pub data: Option<FileHandle>,
    pub stream: Option<FileHandle>,
    pub grant_read: bool,
    pub chooser_title: &'static str,
}

impl IntentRequest {
    pub fn view(file: &FileHandle) -> Self {
        Self {
            action: IntentAction::View,
            mime_type: TEXT_PLAIN,
            data: Some(file.clone()),
            stream: None,
            grant_read: true,
            chooser_title: OPEN_CHOOSER_TITLE,
        }
    }

    pub fn send(file: &FileHandle) -> Self {
        Self {
            action: IntentAction::Send,
            mime_type: TEXT_PLAIN,
            data: None,
            stream: Some(file.clone()),
            grant_read: true,
            chooser_title: SHARE_CHOOSER_TITLE,
        }
    }

    /// The file this request refers to, whichever slot it sits in.
    pub fn file(&self) -> Option<&FileHandle> {
        self.data.as_ref().or(self.stream.as_ref())
    }
}

#[derive(Debug)]
pub enum LaunchError {
    /// Nothing is configured to handle this kind of request.
    NoHandler(IntentAction),
    /// The handler could not be started.
    Spawn { command: String, source: std::io::Error },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::NoHandler(action) => {
                write!(f, "no application available for {} requests", action.as_str())
            }
            LaunchError::Spawn { command, source } => write!(f, "failed to run '{command}': {source}"),
        }
    }
}

impl std::error::Error for LaunchError {}

/// Dispatches requests to the host environment.
pub trait Sharer {
    fn dispatch(&mut self, request: &IntentRequest) -> Result<(), LaunchError>;
}

/// Builds view/send requests for saved reports and passes them to a [`Sharer`].
///
/// Host failures are logged here and never reach the caller: whether a viewer
/// exists is the host's concern.
pub struct ReportLauncher<S: Sharer> {
    sharer: S,
}

impl<S: Sharer> ReportLauncher<S> {
    pub fn new(sharer: S) -> Self {
        Self { sharer }
    }

    pub fn open_externally(&mut self, file: &FileHandle) {
        self.launch(IntentRequest::view(file));
    }

    pub fn share_externally(&mut self, file: &FileHandle) {
        self.launch(IntentRequest::send(file));
    }

    pub fn sharer(&self) -> &S {
        &self.sharer
    }

    fn launch(&mut self, request: IntentRequest) {
        log::info!(
            "Dispatching {} request ({}) for {}",
            request.action.as_str(),
            request.mime_type,
            request.file().map(FileHandle::uri).unwrap_or_default()
        );
        if let Err(e) = self.sharer.dispatch(&request) {
            log::warn!("Host could not handle {} request: {}", request.action.as_str(), e);
        }
    }
}
