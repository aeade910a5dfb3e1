use resume_studio::content::{Education, ResumeContent, WorkExperience};
use resume_studio::editor::PersonalField;
use resume_studio::store::{DocumentSource, DocumentStore, SaveStatus};

fn blank_store() -> DocumentStore {
    DocumentStore::initialize(DocumentSource::Blank {
        title: "Untitled".to_string(),
        template_id: "modern".to_string(),
    })
}

#[test]
fn add_then_remove_restores_previous_contents() {
    let mut store = blank_store();
    store.skills().add("Python");
    let before = store.content().clone();

    let id = store.work().add();
    assert_eq!(store.content().work_experience.len(), 1);

    assert!(store.work().remove(&id), "the fresh id must be removable");
    assert_eq!(
        store.content(),
        &before,
        "add followed by remove of the same id is an identity round-trip"
    );
}

#[test]
fn added_entries_get_distinct_ids() {
    let mut store = blank_store();
    let first = store.work().add();
    let second = store.work().add();
    assert_ne!(first, second, "entry ids must be unique within a session");
}

#[test]
fn update_replaces_the_whole_entry_and_keeps_the_id() {
    let mut store = blank_store();
    let id = store.work().add();

    let updated = store.work().update(
        &id,
        WorkExperience {
            id: "ignored".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: Some("2022-12".to_string()),
            current: false,
            description: "Built things".to_string(),
        },
    );
    assert!(updated);

    let entry = &store.content().work_experience[0];
    assert_eq!(entry.id, id, "the stable key survives a full replace");
    assert_eq!(entry.company, "Acme");
    assert_eq!(entry.position, "Engineer");
}

#[test]
fn update_with_unknown_id_is_a_silent_noop() {
    let mut store = blank_store();
    assert_eq!(store.status(), SaveStatus::Saved);

    let updated = store.work().update("does-not-exist", WorkExperience::draft());
    assert!(!updated, "unknown ids fail silently");
    assert_eq!(
        store.status(),
        SaveStatus::Saved,
        "a no-op must not dirty the document"
    );
    assert!(store.content().work_experience.is_empty());
}

#[test]
fn remove_preserves_relative_order() {
    let mut store = blank_store();
    let mut ids = Vec::new();
    for school in ["Alpha", "Beta", "Gamma"] {
        let id = store.education().add();
        store.education().update(
            &id,
            Education {
                school: school.to_string(),
                ..Education::draft()
            },
        );
        ids.push(id);
    }

    assert!(store.education().remove(&ids[1]));

    let schools: Vec<&str> = store
        .content()
        .education
        .iter()
        .map(|e| e.school.as_str())
        .collect();
    assert_eq!(schools, ["Alpha", "Gamma"], "remaining entries keep their order");
}

#[test]
fn skills_add_trims_and_rejects_blank_input() {
    let mut store = blank_store();
    assert!(store.skills().add("Python"));
    assert!(!store.skills().add("  "), "blank-after-trim is never added");

    assert_eq!(store.content().skills, ["Python"]);
}

#[test]
fn skills_allow_duplicates_without_normalization() {
    let mut store = blank_store();
    assert!(store.skills().add("Rust"));
    assert!(store.skills().add("  Rust "));
    assert_eq!(store.content().skills, ["Rust", "Rust"]);
}

#[test]
fn skills_remove_out_of_range_is_a_noop() {
    let mut store = blank_store();
    store.skills().add("Go");
    let before = store.status();
    assert!(!store.skills().remove_at(5));
    assert_eq!(store.content().skills, ["Go"]);
    assert_eq!(store.status(), before);
}

#[test]
fn personal_fields_route_through_mutate() {
    let mut store = blank_store();
    store.personal().set(PersonalField::Name, "张三");
    store.personal().set(PersonalField::Email, "zhang@example.com");
    store.personal().set_summary("Seasoned engineer");

    let content: &ResumeContent = store.content();
    assert_eq!(content.personal_info.name, "张三");
    assert_eq!(content.personal_info.email, "zhang@example.com");
    assert_eq!(content.summary, "Seasoned engineer");
    assert_eq!(store.status(), SaveStatus::Unsaved);
}

#[test]
fn blanked_social_links_become_absent() {
    let mut store = blank_store();
    store
        .personal()
        .set(PersonalField::Linkedin, "linkedin.com/in/zhang");
    assert_eq!(
        store.content().personal_info.linkedin.as_deref(),
        Some("linkedin.com/in/zhang")
    );

    store.personal().set(PersonalField::Linkedin, "");
    assert_eq!(
        store.content().personal_info.linkedin, None,
        "an emptied optional link is stored as absent, not as an empty string"
    );
}
