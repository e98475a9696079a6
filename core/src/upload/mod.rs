//! Upload widget state machine.
//!
//! [`UploadWidget`] owns the selection and drives one upload at a time:
//!
//! ```text
//!            begin_submit()                 finish_submit(outcome)
//!   ┌──────┐ ─────────────▶ ┌───────────┐ ───────────────────────▶ ┌──────┐
//!   │ Idle │                │ Uploading │                          │ Idle │
//!   └──────┘ ◀───────────── └───────────┘                          └──────┘
//!             (refused: empty selection / already uploading)
//! ```
//!
//! Submit is split in two synchronous halves so that a reactive UI can
//! keep the widget in a signal and await the [`Transport`] in between
//! without holding a borrow. [`UploadWidget::submit`] chains both halves
//! for callers that can hold `&mut self` across the await.
//!
//! | Outcome        | Callback | Selection | Notification |
//! |----------------|----------|-----------|--------------|
//! | 2xx            | once     | cleared   | success      |
//! | non-2xx / error| never    | preserved | error        |
//! | empty / busy   | never    | preserved | error / warning |

use crate::config::{UploadConfig, FIELD_PREFIX};
use crate::error::{FileRejection, UploadError, UploadResult};
use crate::models::{FileId, ProcessedResult};
use crate::notify::{Notifier, Severity};
use crate::selection::{PreviewFactory, Selection, StagedFile};
use crate::validation::validate_batch;

/// Raised when a drop batch contains an invalid file.
pub const MSG_REJECTED: &str = "Please upload Excel files under 10MB.";
/// Raised when Submit is pressed with nothing selected.
pub const MSG_EMPTY_SELECTION: &str = "Please select at least one file to upload.";
/// Raised after a successful upload.
pub const MSG_SUCCESS: &str = "Your files have been uploaded and processed.";
/// Fallback when a failure carries no message.
pub const MSG_GENERIC_FAILURE: &str = "There was an error uploading your files.";

// =============================================================================
// Request
// =============================================================================

/// One multipart part: a file under a positional field name.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart<F> {
    /// `file-<index>`, 0-based in selection order.
    pub field: String,
    /// Original file name, sent as the part's filename.
    pub file_name: String,
    pub file: F,
}

/// Everything a transport needs to perform the POST.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest<F> {
    pub endpoint: String,
    pub parts: Vec<FormPart<F>>,
}

impl<F> UploadRequest<F> {
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.field.as_str()).collect()
    }
}

/// Sends an [`UploadRequest`] and returns the binary response body.
///
/// Implementations map a non-2xx status to [`UploadError::Http`] and any
/// other failure to the matching [`UploadError`] variant.
#[allow(async_fn_in_trait)]
pub trait Transport<F> {
    async fn send(&self, request: UploadRequest<F>) -> UploadResult<ProcessedResult>;
}

// =============================================================================
// Outcomes
// =============================================================================

/// Lifecycle state of the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
}

/// Result of [`UploadWidget::accept_drop`].
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Nothing was dropped.
    Ignored,
    /// Every file was added.
    Added(Vec<FileId>),
    /// Nothing was added.
    Rejected(Vec<FileRejection>),
    /// Some files were added (per-file policy only).
    Partial {
        added: Vec<FileId>,
        rejected: Vec<FileRejection>,
    },
    /// Files passed validation but could not be staged; nothing was added.
    Failed(UploadError),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Payload delivered to the completion callback.
    Completed,
    /// Request failed; selection kept for retry.
    Failed(UploadError),
    /// Submit was not started (empty selection or already uploading).
    Refused,
}

// =============================================================================
// Widget
// =============================================================================

type CompletionCallback = Box<dyn FnMut(ProcessedResult)>;

/// File selection and upload lifecycle.
pub struct UploadWidget<F, P, N>
where
    P: PreviewFactory<F>,
{
    config: UploadConfig,
    selection: Selection<F, P::Handle>,
    state: UploadState,
    previews: P,
    notifier: N,
    on_complete: Option<CompletionCallback>,
}

impl<F, P, N> UploadWidget<F, P, N>
where
    F: StagedFile,
    P: PreviewFactory<F>,
    N: Notifier,
{
    pub fn new(config: UploadConfig, previews: P, notifier: N) -> Self {
        Self {
            config,
            selection: Selection::new(),
            state: UploadState::Idle,
            previews,
            notifier,
            on_complete: None,
        }
    }

    /// Register the callback receiving each successful payload.
    pub fn on_complete(mut self, callback: impl FnMut(ProcessedResult) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn selection(&self) -> &Selection<F, P::Handle> {
        &self.selection
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn is_uploading(&self) -> bool {
        self.state == UploadState::Uploading
    }

    /// Validate a drop/browse batch and append what the policy accepts.
    ///
    /// Any rejection raises exactly one error notification.
    pub fn accept_drop(&mut self, files: Vec<F>) -> DropOutcome {
        if files.is_empty() {
            return DropOutcome::Ignored;
        }

        let verdict = validate_batch(files, &self.config);
        if verdict.accepted.is_empty() {
            self.notifier.notify(MSG_REJECTED, Severity::Error);
            return DropOutcome::Rejected(verdict.rejected);
        }

        let added = match self.selection.extend_with(verdict.accepted, &self.previews) {
            Ok(ids) => ids,
            Err(e) => {
                log::error!("Could not stage files: {}", e);
                self.notifier.notify(MSG_REJECTED, Severity::Error);
                return DropOutcome::Failed(e);
            }
        };

        log::info!("📎 {} file(s) added, {} selected", added.len(), self.selection.len());

        if verdict.rejected.is_empty() {
            DropOutcome::Added(added)
        } else {
            self.notifier.notify(MSG_REJECTED, Severity::Error);
            DropOutcome::Partial {
                added,
                rejected: verdict.rejected,
            }
        }
    }

    /// Remove one file, releasing its preview. Unknown ids are a no-op.
    pub fn remove(&mut self, id: FileId) -> bool {
        self.selection.remove(id)
    }

    /// First half of Submit: guard, transition, build the request.
    ///
    /// Returns `None` (after notifying) when the selection is empty or an
    /// upload is already in flight.
    pub fn begin_submit(&mut self) -> Option<UploadRequest<F>> {
        if self.is_uploading() {
            self.notifier.notify(&UploadError::Busy.to_string(), Severity::Warning);
            return None;
        }

        if self.selection.is_empty() {
            self.notifier.notify(MSG_EMPTY_SELECTION, Severity::Error);
            return None;
        }

        let parts = self
            .selection
            .iter()
            .enumerate()
            .map(|(index, entry)| FormPart {
                field: format!("{}{}", FIELD_PREFIX, index),
                file_name: entry.name().to_string(),
                file: entry.file().clone(),
            })
            .collect::<Vec<_>>();

        log::info!("📤 Uploading {} file(s) to {}", parts.len(), self.config.endpoint);
        self.state = UploadState::Uploading;

        Some(UploadRequest {
            endpoint: self.config.endpoint.clone(),
            parts,
        })
    }

    /// Second half of Submit: apply the transport outcome and return to idle.
    pub fn finish_submit(&mut self, outcome: UploadResult<ProcessedResult>) -> SubmitOutcome {
        if !self.is_uploading() {
            log::warn!("Upload outcome received while idle, ignoring");
            return SubmitOutcome::Refused;
        }
        self.state = UploadState::Idle;

        match outcome {
            Ok(result) => {
                if result.is_empty() {
                    log::warn!("Processing endpoint returned an empty body");
                }
                log::info!("✅ Upload complete, {} bytes received", result.len());
                if let Some(callback) = self.on_complete.as_mut() {
                    callback(result);
                }
                self.notifier.notify(MSG_SUCCESS, Severity::Success);
                self.selection.clear();
                SubmitOutcome::Completed
            }
            Err(e) => {
                log::error!("Upload error: {:?}", e);
                let message = e.to_string();
                let message = if message.trim().is_empty() {
                    MSG_GENERIC_FAILURE
                } else {
                    message.as_str()
                };
                self.notifier.notify(message, Severity::Error);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Run a full Submit against `transport`.
    pub async fn submit<T: Transport<F>>(&mut self, transport: &T) -> SubmitOutcome {
        let Some(request) = self.begin_submit() else {
            return SubmitOutcome::Refused;
        };
        let outcome = transport.send(request).await;
        self.finish_submit(outcome)
    }
}
