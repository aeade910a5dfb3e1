//! # render: pure preview rendering
//!
//! [`render`] maps a document to a [`Preview`] tree deterministically, with no
//! side effects and no I/O. The same tree backs the on-screen preview and the
//! PDF export, so the two are identical by construction; the only screen-side
//! extra is a linear [`Zoom`] factor, which is applied by the viewport and is
//! never part of the tree.
//!
//! Section order is fixed: header, summary, work experience, education,
//! skills, projects. A section with no data is omitted entirely, heading
//! included. An all-empty document renders the placeholder state instead.

use crate::content::ResumeContent;

/// Literal marker substituted for the end date of a current position.
pub const PRESENT_MARKER: &str = "present";

/// Header fallbacks when the document is non-empty but those fields are not.
pub const NAME_FALLBACK: &str = "Your name";
pub const TITLE_FALLBACK: &str = "Job title";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Placeholder prompts shown while the document is entirely empty.
    Empty(EmptyState),
    Document(ResumeView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub heading: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeView {
    pub header: HeaderView,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub name: String,
    pub title: String,
    /// Email, phone, location; blank ones omitted.
    pub contacts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Summary { text: String },
    Experience { entries: Vec<ExperienceView> },
    Education { entries: Vec<EducationView> },
    Skills { tags: Vec<String> },
    Projects { entries: Vec<ProjectView> },
}

impl Section {
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Summary { .. } => "Summary",
            Section::Experience { .. } => "Work Experience",
            Section::Education { .. } => "Education",
            Section::Skills { .. } => "Skills",
            Section::Projects { .. } => "Projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceView {
    pub position: String,
    pub company: String,
    pub date_range: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationView {
    pub school: String,
    pub degree: String,
    pub major: String,
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub date_range: String,
}

/// Formats `start - end`, substituting the present marker whenever `current`
/// is set, regardless of what the stored end date holds.
pub fn date_range(start: &str, end: Option<&str>, current: bool) -> String {
    let end = if current {
        PRESENT_MARKER
    } else {
        end.unwrap_or_default()
    };
    format!("{start} - {end}")
}

pub fn render(content: &ResumeContent) -> Preview {
    if content.is_empty() {
        return Preview::Empty(EmptyState {
            heading: "Start filling in your resume".to_string(),
            hint: "Add your information in the editor panel".to_string(),
        });
    }

    let info = &content.personal_info;
    let header = HeaderView {
        name: non_blank(&info.name, NAME_FALLBACK),
        title: non_blank(&info.title, TITLE_FALLBACK),
        contacts: [&info.email, &info.phone, &info.location]
            .into_iter()
            .filter(|v| !v.is_empty())
            .cloned()
            .collect(),
    };

    let mut sections = Vec::new();

    if !content.summary.is_empty() {
        sections.push(Section::Summary {
            text: content.summary.clone(),
        });
    }

    if !content.work_experience.is_empty() {
        sections.push(Section::Experience {
            entries: content
                .work_experience
                .iter()
                .map(|w| ExperienceView {
                    position: w.position.clone(),
                    company: w.company.clone(),
                    date_range: date_range(&w.start_date, w.end_date.as_deref(), w.current),
                    description: w.description.clone(),
                })
                .collect(),
        });
    }

    if !content.education.is_empty() {
        sections.push(Section::Education {
            entries: content
                .education
                .iter()
                .map(|e| EducationView {
                    school: e.school.clone(),
                    degree: e.degree.clone(),
                    major: e.major.clone(),
                    date_range: date_range(&e.start_date, e.end_date.as_deref(), false),
                })
                .collect(),
        });
    }

    if !content.skills.is_empty() {
        sections.push(Section::Skills {
            tags: content.skills.clone(),
        });
    }

    if !content.projects.is_empty() {
        sections.push(Section::Projects {
            entries: content
                .projects
                .iter()
                .map(|p| ProjectView {
                    name: p.name.clone(),
                    description: p.description.clone(),
                    technologies: p.technologies.clone(),
                    date_range: date_range(&p.start_date, p.end_date.as_deref(), false),
                })
                .collect(),
        });
    }

    Preview::Document(ResumeView { header, sections })
}

fn non_blank(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// On-screen zoom, percent. Clamped to 50–150 in steps of 10; never applied
/// to exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom(u16);

impl Zoom {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 150;
    pub const STEP: u16 = 10;

    pub fn new(percent: u16) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    pub fn factor(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub fn zoom_in(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn zoom_out(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(100)
    }
}
