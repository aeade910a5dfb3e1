//! # editor: per-section views over the document store
//!
//! Each tabbed section of the editor surface gets a thin view that routes
//! every change through [`DocumentStore::mutate`]. The list sections share
//! one update contract via [`SectionEntry`]:
//!
//! - `add` appends a draft entry with a fresh id and returns that id
//! - `update(id, fields)` replaces the whole entry; unknown ids are a silent
//!   no-op and do not dirty the store
//! - `remove(id)` deletes the entry, preserving the order of the rest
//!
//! Reordering is not supported; list order is append-order only. The scalar
//! personal-info section only has field-level setters.

use crate::content::{Education, PersonalInfo, Project, ResumeContent, WorkExperience};
use crate::store::DocumentStore;

/// An ordered-list entry addressable by its client-generated id.
pub trait SectionEntry {
    fn entry_id(&self) -> &str;
    fn entry_id_mut(&mut self) -> &mut String;
}

impl SectionEntry for WorkExperience {
    fn entry_id(&self) -> &str {
        &self.id
    }
    fn entry_id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl SectionEntry for Education {
    fn entry_id(&self) -> &str {
        &self.id
    }
    fn entry_id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl SectionEntry for Project {
    fn entry_id(&self) -> &str {
        &self.id
    }
    fn entry_id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

fn contains_entry<T: SectionEntry>(list: &[T], id: &str) -> bool {
    list.iter().any(|e| e.entry_id() == id)
}

/// Replaces the entry matching `id` wholesale, keeping the id stable even if
/// the caller handed in different one.
fn replace_entry<T: SectionEntry>(list: &mut [T], id: &str, mut fields: T) {
    if let Some(slot) = list.iter_mut().find(|e| e.entry_id() == id) {
        *fields.entry_id_mut() = id.to_string();
        *slot = fields;
    }
}

fn remove_entry<T: SectionEntry>(list: &mut Vec<T>, id: &str) {
    list.retain(|e| e.entry_id() != id);
}

impl DocumentStore {
    pub fn personal(&mut self) -> PersonalEditor<'_> {
        PersonalEditor { store: self }
    }

    pub fn work(&mut self) -> WorkEditor<'_> {
        WorkEditor { store: self }
    }

    pub fn education(&mut self) -> EducationEditor<'_> {
        EducationEditor { store: self }
    }

    pub fn skills(&mut self) -> SkillsEditor<'_> {
        SkillsEditor { store: self }
    }

    pub fn projects(&mut self) -> ProjectsEditor<'_> {
        ProjectsEditor { store: self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

/// Scalar section: header fields plus the free-text summary. No add/remove.
pub struct PersonalEditor<'a> {
    store: &'a mut DocumentStore,
}

impl PersonalEditor<'_> {
    pub fn set(&mut self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        self.store.mutate(|c| {
            let info: &mut PersonalInfo = &mut c.personal_info;
            match field {
                PersonalField::Name => info.name = value,
                PersonalField::Title => info.title = value,
                PersonalField::Email => info.email = value,
                PersonalField::Phone => info.phone = value,
                PersonalField::Location => info.location = value,
                // Optional links: a blanked-out field is absent, not "".
                PersonalField::Linkedin => {
                    info.linkedin = (!value.is_empty()).then_some(value)
                }
                PersonalField::Website => {
                    info.website = (!value.is_empty()).then_some(value)
                }
            }
        });
    }

    pub fn set_summary(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.store.mutate(|c| c.summary = value);
    }
}

pub struct WorkEditor<'a> {
    store: &'a mut DocumentStore,
}

impl WorkEditor<'_> {
    /// Appends a blank entry and returns its id.
    pub fn add(&mut self) -> String {
        let entry = WorkExperience::draft();
        let id = entry.id.clone();
        self.store.mutate(|c| c.work_experience.push(entry));
        id
    }

    /// Full-entry replace. Returns false (and leaves the store untouched)
    /// when the id is unknown.
    pub fn update(&mut self, id: &str, fields: WorkExperience) -> bool {
        if !contains_entry(&self.store.content().work_experience, id) {
            return false;
        }
        self.store
            .mutate(|c| replace_entry(&mut c.work_experience, id, fields));
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if !contains_entry(&self.store.content().work_experience, id) {
            return false;
        }
        self.store
            .mutate(|c| remove_entry(&mut c.work_experience, id));
        true
    }
}

pub struct EducationEditor<'a> {
    store: &'a mut DocumentStore,
}

impl EducationEditor<'_> {
    pub fn add(&mut self) -> String {
        let entry = Education::draft();
        let id = entry.id.clone();
        self.store.mutate(|c| c.education.push(entry));
        id
    }

    pub fn update(&mut self, id: &str, fields: Education) -> bool {
        if !contains_entry(&self.store.content().education, id) {
            return false;
        }
        self.store
            .mutate(|c| replace_entry(&mut c.education, id, fields));
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if !contains_entry(&self.store.content().education, id) {
            return false;
        }
        self.store.mutate(|c| remove_entry(&mut c.education, id));
        true
    }
}

/// Skills are plain ordered strings; duplicates are allowed and nothing is
/// normalized beyond trimming on entry.
pub struct SkillsEditor<'a> {
    store: &'a mut DocumentStore,
}

impl SkillsEditor<'_> {
    /// Text-input driven add: the trimmed input becomes a new skill on the
    /// commit gesture. Blank input after trimming is a no-op, never added.
    pub fn add(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }
        let skill = trimmed.to_string();
        self.store.mutate(|c| c.skills.push(skill));
        true
    }

    /// Positional remove (skills carry no ids). Out-of-range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.store.content().skills.len() {
            return false;
        }
        self.store.mutate(|c| {
            c.skills.remove(index);
        });
        true
    }
}

pub struct ProjectsEditor<'a> {
    store: &'a mut DocumentStore,
}

impl ProjectsEditor<'_> {
    pub fn add(&mut self) -> String {
        let entry = Project::draft();
        let id = entry.id.clone();
        self.store.mutate(|c| c.projects.push(entry));
        id
    }

    pub fn update(&mut self, id: &str, fields: Project) -> bool {
        if !contains_entry(&self.store.content().projects, id) {
            return false;
        }
        self.store
            .mutate(|c| replace_entry(&mut c.projects, id, fields));
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if !contains_entry(&self.store.content().projects, id) {
            return false;
        }
        self.store.mutate(|c| remove_entry(&mut c.projects, id));
        true
    }
}
