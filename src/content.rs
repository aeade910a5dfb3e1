//! # content: the resume document schema
//!
//! Defines [`ResumeContent`], the aggregate the editor mutates, and its nested
//! entry types. The serde attributes pin the exact wire shape the backend
//! stores (camelCase keys for the document tree, optional fields absent rather
//! than null), so a round trip through the API never rewrites the document.
//!
//! List entries carry a client-generated id used as a stable key for targeted
//! update/delete. Ids are timestamp-derived and made monotonic within the
//! process by a tie-breaking counter, so two entries created in the same
//! millisecond still get distinct ids.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static ENTRY_SEQ: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh entry id: epoch milliseconds plus a per-process sequence
/// number. Collision-improbable within a session, never reused.
pub fn fresh_entry_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = ENTRY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}")
}

/// Scalar header fields. Always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One position held. When `current` is set, `end_date` is ignored for
/// display regardless of what it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
}

impl WorkExperience {
    /// A blank entry with a fresh id, as appended by the editor's `add`.
    pub fn draft() -> Self {
        Self {
            id: fresh_entry_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub major: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl Education {
    pub fn draft() -> Self {
        Self {
            id: fresh_entry_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Project {
    pub fn draft() -> Self {
        Self {
            id: fresh_entry_id(),
            ..Self::default()
        }
    }
}

/// The editable document tree: header fields, free-text summary, and four
/// ordered lists. Order is append-order; reordering is not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

impl ResumeContent {
    /// An entirely blank document, as used when creating a resume without a
    /// template.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The document-is-empty predicate backing the preview's placeholder
    /// state: name, email, phone and summary all blank AND every list empty.
    /// Header title and location deliberately do not count.
    pub fn is_empty(&self) -> bool {
        self.personal_info.name.is_empty()
            && self.personal_info.email.is_empty()
            && self.personal_info.phone.is_empty()
            && self.summary.is_empty()
            && self.work_experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
    }
}
