use std::fs;

use tempfile::tempdir;

use resume_studio::content::ResumeContent;
use resume_studio::export::{pdf_bytes, ExportError, PdfExporter};
use resume_studio::render::render;

fn sample_content() -> ResumeContent {
    let mut content = ResumeContent::empty();
    content.personal_info.name = "Zhang San".to_string();
    content.personal_info.email = "zhang@example.com".to_string();
    content.summary = "Engineer with a decade of shipping production systems.".to_string();
    content.skills = vec!["Rust".to_string(), "Python".to_string()];
    content
}

#[test]
fn exported_bytes_are_a_valid_pdf() {
    let preview = render(&sample_content());
    let bytes = pdf_bytes(&preview, "My resume");

    assert!(
        bytes.len() > 100,
        "output PDF is too small and may be truncated"
    );
    assert_eq!(&bytes[0..4], b"%PDF", "PDF file missing magic header");
}

#[test]
fn empty_document_still_exports_the_placeholder_page() {
    let preview = render(&ResumeContent::empty());
    let bytes = pdf_bytes(&preview, "Untitled");
    assert_eq!(&bytes[0..4], b"%PDF");
}

#[test]
fn screen_and_export_share_one_render_tree() {
    // The export pipeline consumes the same Preview value the screen shows;
    // rendering twice and exporting both must be byte-identical apart from
    // document metadata, so compare the inputs rather than the bytes.
    let content = sample_content();
    assert_eq!(render(&content), render(&content));
}

#[tokio::test]
async fn export_to_file_writes_the_pdf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.pdf");

    let preview = render(&sample_content());
    let mut exporter = PdfExporter::new();
    exporter
        .export_to_file(&preview, "My resume", &path)
        .await
        .expect("export should succeed");

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 100, "written PDF should not be empty");
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[0..4], b"%PDF");
    assert!(
        !exporter.is_exporting(),
        "the guard is released once the export resolves"
    );
}

#[tokio::test]
async fn overlapping_exports_on_one_target_are_rejected() {
    let preview = render(&sample_content());
    let mut exporter = PdfExporter::new();

    exporter.begin().expect("first export may start");
    assert!(exporter.is_exporting());

    let err = exporter.begin().expect_err("second export must be rejected");
    assert!(matches!(err, ExportError::Busy));

    let dir = tempdir().unwrap();
    let err = exporter
        .export_to_file(&preview, "My resume", &dir.path().join("out.pdf"))
        .await
        .expect_err("the high-level path respects the guard too");
    assert!(matches!(err, ExportError::Busy));

    exporter.finish();
    exporter.begin().expect("the guard resets after finish");
}
