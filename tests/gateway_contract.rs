use resume_studio::content::ResumeContent;
use resume_studio::contract::{ApiError, MockResumeGateway, Resume, ResumeGateway};
use resume_studio::store::{DocumentSource, DocumentStore, SaveStatus};

fn stored_resume(id: i64) -> Resume {
    let mut content = ResumeContent::empty();
    content.personal_info.name = "张三".to_string();
    content.skills = vec!["Rust".to_string(), "SQL".to_string()];
    Resume {
        id,
        user_id: 1,
        title: "Original".to_string(),
        template_id: "modern".to_string(),
        content,
        created_at: "2026-08-01T10:00:00Z".to_string(),
        updated_at: "2026-08-02T09:30:00Z".to_string(),
    }
}

#[tokio::test]
async fn duplicate_deep_copies_content_under_a_new_id() {
    let original = stored_resume(5);
    let store = DocumentStore::initialize(DocumentSource::Resume(original.clone()));

    let mut gateway = MockResumeGateway::new();
    let server_copy = original.clone();
    gateway
        .expect_duplicate_resume()
        .withf(|id, title| *id == 5 && *title == Some("Copy"))
        .times(1)
        .returning(move |_, title| {
            let mut copy = server_copy.clone();
            copy.id = 9;
            copy.title = title.unwrap_or("Original (copy)").to_string();
            Ok(copy)
        });

    let copy = store
        .save_as(&gateway, "Copy")
        .await
        .expect("duplicate should succeed");
    assert_ne!(copy.id, original.id, "the copy gets a distinct id");
    assert_eq!(copy.title, "Copy");
    assert_eq!(
        copy.content, original.content,
        "the copy deep-equals the stored content at duplication time"
    );
    assert_eq!(
        store.status(),
        SaveStatus::Saved,
        "save-as leaves the working copy untouched"
    );
}

#[tokio::test]
async fn save_as_trims_the_requested_title() {
    let store = DocumentStore::initialize(DocumentSource::Resume(stored_resume(5)));

    let mut gateway = MockResumeGateway::new();
    gateway
        .expect_duplicate_resume()
        .withf(|_, title| *title == Some("Copy"))
        .times(1)
        .returning(|_, _| Ok(stored_resume(9)));

    store
        .save_as(&gateway, "  Copy  ")
        .await
        .expect("trimmed title should pass validation");
}

#[tokio::test]
async fn stale_ids_surface_the_backend_message() {
    let mut gateway = MockResumeGateway::new();
    gateway
        .expect_get_resume()
        .returning(|id| Err(ApiError::NotFound(format!("resume {id} does not exist"))));

    let err = gateway.get_resume(42).await.expect_err("stale id");
    assert_eq!(err.to_string(), "not found: resume 42 does not exist");
}

#[tokio::test]
async fn an_expired_session_is_a_typed_error_not_a_side_effect() {
    let mut gateway = MockResumeGateway::new();
    gateway
        .expect_list_resumes()
        .returning(|| Err(ApiError::SessionExpired));

    let err = gateway.list_resumes().await.expect_err("expired token");
    assert!(
        matches!(err, ApiError::SessionExpired),
        "the gateway surfaces expiry for the top-level handler to act on"
    );
}

#[tokio::test]
async fn gateway_failure_never_mutates_local_state() {
    let mut store = DocumentStore::initialize(DocumentSource::Resume(stored_resume(5)));
    store.skills().add("Kubernetes");
    let dirty_content = store.content().clone();

    let mut gateway = MockResumeGateway::new();
    gateway.expect_update_resume().times(1).returning(|_, _| {
        Err(ApiError::Api {
            code: "INTERNAL_ERROR".to_string(),
            message: "database unavailable".to_string(),
        })
    });

    store
        .commit(&gateway)
        .await
        .expect_err("commit should fail");
    assert_eq!(
        store.content(),
        &dirty_content,
        "only the status flag may change on failure"
    );
    assert_eq!(store.status(), SaveStatus::Unsaved);
}
