//! # store: the document store and its save-status machine
//!
//! Holds exactly one [`ResumeContent`] working copy plus the tri-state save
//! flag: `saved -> (mutate) -> unsaved -> (commit) -> saving -> saved` on
//! success, back to `unsaved` on failure.
//!
//! A commit snapshots the document before suspension. Edits made while the
//! request is in flight are applied to the working copy immediately and are
//! NOT merged into the in-flight payload; when the commit resolves the store
//! lands on `unsaved` again, so a second manual save is required. There is no
//! queuing, no automatic retry, and last-write-wins at the field level.
//!
//! The split [`DocumentStore::begin_commit`] / [`DocumentStore::finish_commit`]
//! primitives expose that state machine directly; [`DocumentStore::commit`] is
//! the convenience path that drives a gateway end to end.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::content::ResumeContent;
use crate::contract::{ApiError, NewResume, Resume, ResumeGateway, ResumePatch, Template};

/// Whether in-memory edits are reflected on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Saving,
    Unsaved,
}

/// What the store is initialized from. Editing an existing resume and
/// creating a new one are mutually exclusive.
pub enum DocumentSource {
    /// Continue editing a persisted resume; the store adopts its identity.
    Resume(Resume),
    /// Seed a new document from a template's default content.
    Template { template: Template, title: String },
    /// Start from an entirely blank document.
    Blank { title: String, template_id: String },
}

/// Snapshot captured when a commit begins. This exact payload goes over the
/// wire; later local edits do not leak into it.
#[derive(Debug, Clone)]
pub struct SavePayload {
    pub server_id: Option<i64>,
    pub title: String,
    pub template_id: String,
    pub content: ResumeContent,
}

#[derive(Debug, Error)]
pub enum CommitError {
    /// A commit is already in flight; the trigger control should have been
    /// disabled.
    #[error("a save is already in flight")]
    AlreadySaving,

    /// "Save as" duplicates server state, so it needs a server identity.
    #[error("the resume has not been saved yet")]
    NeverSaved,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct DocumentStore {
    title: String,
    template_id: String,
    server_id: Option<i64>,
    content: ResumeContent,
    status: SaveStatus,
    /// Bumped by every mutation; a commit snapshots it to detect edits that
    /// arrived while the request was in flight.
    revision: u64,
    in_flight: Option<u64>,
}

impl DocumentStore {
    pub fn initialize(source: DocumentSource) -> Self {
        let (title, template_id, server_id, content) = match source {
            DocumentSource::Resume(resume) => {
                info!(id = resume.id, title = %resume.title, "store initialized from resume");
                (
                    resume.title,
                    resume.template_id,
                    Some(resume.id),
                    resume.content,
                )
            }
            DocumentSource::Template { template, title } => {
                info!(template = %template.id, %title, "store initialized from template");
                (title, template.id, None, template.default_content)
            }
            DocumentSource::Blank { title, template_id } => {
                info!(%title, %template_id, "store initialized blank");
                (title, template_id, None, ResumeContent::empty())
            }
        };
        Self {
            title,
            template_id,
            server_id,
            content,
            status: SaveStatus::Saved,
            revision: 0,
            in_flight: None,
        }
    }

    pub fn content(&self) -> &ResumeContent {
        &self.content
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn server_id(&self) -> Option<i64> {
        self.server_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title lives on the envelope, not the document, and editing it does
    /// not flip the save status; it is always part of the next commit.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn set_template_id(&mut self, template_id: impl Into<String>) {
        self.template_id = template_id.into();
    }

    /// Applies an edit to the working copy and marks it dirty. No validation
    /// happens here; that is section-local. While a commit is in flight the
    /// flag stays `Saving` and the pending edit is accounted for when the
    /// commit resolves.
    pub fn mutate(&mut self, edit: impl FnOnce(&mut ResumeContent)) {
        edit(&mut self.content);
        self.revision += 1;
        if self.status != SaveStatus::Saving {
            self.status = SaveStatus::Unsaved;
        }
        debug!(revision = self.revision, "document mutated");
    }

    /// Starts a commit: flips to `Saving` and returns the wire snapshot.
    pub fn begin_commit(&mut self) -> Result<SavePayload, CommitError> {
        if self.in_flight.is_some() {
            return Err(CommitError::AlreadySaving);
        }
        self.in_flight = Some(self.revision);
        self.status = SaveStatus::Saving;
        debug!(revision = self.revision, "commit began");
        Ok(SavePayload {
            server_id: self.server_id,
            title: self.title.clone(),
            template_id: self.template_id.clone(),
            content: self.content.clone(),
        })
    }

    /// Resolves an in-flight commit. On success the store adopts the server
    /// identity and lands on `Saved`, unless an edit arrived mid-flight, in
    /// which case it lands on `Unsaved` and a further save is needed. On
    /// failure the content is untouched and the status falls back to
    /// `Unsaved`; the error is handed back for display.
    pub fn finish_commit(
        &mut self,
        outcome: Result<Resume, ApiError>,
    ) -> Result<SaveStatus, ApiError> {
        let snapshot = match self.in_flight.take() {
            Some(revision) => revision,
            None => {
                warn!("finish_commit called without a commit in flight");
                self.revision
            }
        };
        match outcome {
            Ok(resume) => {
                self.server_id = Some(resume.id);
                self.status = if self.revision == snapshot {
                    SaveStatus::Saved
                } else {
                    debug!("edits arrived during the in-flight commit");
                    SaveStatus::Unsaved
                };
                info!(id = resume.id, status = ?self.status, "commit succeeded");
                Ok(self.status)
            }
            Err(e) => {
                self.status = SaveStatus::Unsaved;
                warn!(error = %e, "commit failed");
                Err(e)
            }
        }
    }

    /// Persists the working copy: create when the document has no server
    /// identity yet, full update otherwise.
    pub async fn commit<G>(&mut self, gateway: &G) -> Result<SaveStatus, CommitError>
    where
        G: ResumeGateway + ?Sized,
    {
        let payload = self.begin_commit()?;
        let outcome = match payload.server_id {
            None => {
                gateway
                    .create_resume(NewResume {
                        title: &payload.title,
                        template_id: &payload.template_id,
                        content: &payload.content,
                    })
                    .await
            }
            Some(id) => {
                gateway
                    .update_resume(
                        id,
                        ResumePatch {
                            title: Some(&payload.title),
                            template_id: Some(&payload.template_id),
                            content: Some(&payload.content),
                        },
                    )
                    .await
            }
        };
        self.finish_commit(outcome).map_err(CommitError::Api)
    }

    /// "Save as": clones the server-side resume under a new title without
    /// resubmitting local unsaved edits. The title must be non-blank after
    /// trimming, checked before any network call.
    pub async fn save_as<G>(&self, gateway: &G, title: &str) -> Result<Resume, CommitError>
    where
        G: ResumeGateway + ?Sized,
    {
        let title = title.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("title must not be empty".to_string()).into());
        }
        let id = self.server_id.ok_or(CommitError::NeverSaved)?;
        info!(id, %title, "saving as a copy");
        Ok(gateway.duplicate_resume(id, Some(title)).await?)
    }
}
