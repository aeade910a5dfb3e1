//! # contract: the persistence gateway interface
//!
//! This module is the seam between the editor core and the REST backend. It
//! defines the [`ResumeGateway`] trait plus the wire types and the typed error
//! taxonomy every call resolves to. The trait is implemented by the real HTTP
//! client ([`crate::gateway::HttpGateway`]) and by generated mocks in tests.
//!
//! ## Mocking & Testing
//! The trait is annotated for `mockall` (behind the `test-gateway-mocks`
//! feature, on by default) so consumers can drive the document store and CLI
//! against deterministic gateways without a backend.
//!
//! ## Error handling
//! Every gateway call returns either the requested entity or an [`ApiError`].
//! The core never retries; callers surface the message and the store only
//! ever touches its status flag on failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(test, feature = "test-gateway-mocks"))]
use mockall::automock;

use crate::content::ResumeContent;

/// Failure taxonomy for everything that crosses the gateway.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input. Raised client-side before any network call for blank
    /// required fields, or mapped from a 400/422 response.
    #[error("validation error: {0}")]
    Validation(String),

    /// The bearer token was rejected (401). Surfaced as a typed error so the
    /// top-level caller owns the logout/navigation reaction.
    #[error("session expired, sign in again")]
    SessionExpired,

    /// The referenced entity no longer exists (stale id).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other structured error the backend returned.
    #[error("api error [{code}]: {message}")]
    Api { code: String, message: String },

    /// Transport-level failure (connection refused, timeout, bad payload).
    #[error("network error: {0}")]
    Network(String),
}

/// Success envelope: the backend wraps every payload as `{success, data}`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

/// Failure envelope: `{success: false, error: {code, message, details?}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Registration<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
}

/// `{access_token, user}` as returned by login/register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: User,
}

/// The persisted envelope. Owned by the backend; the client holds a working
/// copy that is out of sync between saves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub template_id: String,
    pub content: ResumeContent,
    pub created_at: String,
    pub updated_at: String,
}

/// A named seed document. Immutable from the client's perspective; only used
/// to initialize a new resume's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub category: String,
    pub features: Vec<String>,
    pub default_content: ResumeContent,
}

/// The minimum data needed to create a resume.
#[derive(Debug, Serialize)]
pub struct NewResume<'a> {
    pub title: &'a str,
    pub template_id: &'a str,
    pub content: &'a ResumeContent,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Serialize)]
pub struct ResumePatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a ResumeContent>,
}

/// Trait for reading and writing resumes and templates for the signed-in
/// user. The implementor is responsible for transport and authentication; the
/// contract itself is agnostic of both.
#[cfg_attr(any(test, feature = "test-gateway-mocks"), automock)]
#[async_trait]
pub trait ResumeGateway: Send + Sync {
    /// List all resumes owned by the current user.
    async fn list_resumes(&self) -> Result<Vec<Resume>, ApiError>;

    /// Fetch one resume by id.
    async fn get_resume(&self, id: i64) -> Result<Resume, ApiError>;

    /// Create a resume from a title, template id and full content.
    async fn create_resume<'a>(&self, req: NewResume<'a>) -> Result<Resume, ApiError>;

    /// Partially update a resume. The stored content is fully replaced when
    /// `content` is present; there is no field-level merge server-side.
    async fn update_resume<'a>(&self, id: i64, patch: ResumePatch<'a>)
        -> Result<Resume, ApiError>;

    /// Delete a resume by id.
    async fn delete_resume(&self, id: i64) -> Result<(), ApiError>;

    /// Clone the server-side resume under a new title. Does not include any
    /// local unsaved edits; the copy deep-equals the stored content.
    async fn duplicate_resume<'a>(
        &self,
        id: i64,
        title: Option<&'a str>,
    ) -> Result<Resume, ApiError>;

    /// List the available seed templates.
    async fn list_templates(&self) -> Result<Vec<Template>, ApiError>;

    /// Fetch one template by id.
    async fn get_template<'a>(&self, id: &'a str) -> Result<Template, ApiError>;
}
