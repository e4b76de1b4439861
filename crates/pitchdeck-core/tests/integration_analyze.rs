//! Integration test: upload a deck to a local stand-in for the analysis service
//! and drive the upload form through success and failure.

mod common;

use pitchdeck_core::client::{Analyzer, HttpAnalyzer, RequestError, GENERIC_FAILURE_MESSAGE};
use pitchdeck_core::config::PitchdeckConfig;
use pitchdeck_core::form::{SelectedFile, UiState, UploadForm};
use pitchdeck_core::render;
use std::io::Write;

const RESULT_JSON: &str = r#"{
    "summary": "Marketplace for refurbished lab equipment.",
    "geography": "DACH",
    "industry": "Life Science Tools",
    "stage": "Pre-Seed",
    "total_score": 7,
    "team_score": {"domain_expertise": {"score": 0.75, "rationale": "Founders ran a lab."}},
    "business_model_score": {"market_fit": {"score": 0.8, "rationale": "Strong demand"}},
    "traction_score": {"monthly_gmv": {"score": 0.3, "rationale": "Early."}}
}"#;

fn analyzer_for(base_url: &str) -> HttpAnalyzer {
    let cfg = PitchdeckConfig {
        api_base_url: base_url.to_string(),
        connect_timeout_secs: 5,
        request_timeout_secs: 10,
        ..PitchdeckConfig::default()
    };
    HttpAnalyzer::from_config(&cfg).unwrap()
}

fn pdf_on_disk(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new()
        .prefix("acme-deck")
        .suffix(".pdf")
        .tempfile()
        .unwrap();
    f.write_all(contents).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn upload_sends_single_multipart_post() {
    let server = common::analyze_server::start(200, RESULT_JSON);
    let analyzer = analyzer_for(&server.base_url);
    let pdf = pdf_on_disk(b"%PDF-1.4\nfake deck body\n%%EOF\n");
    let file = SelectedFile::from_path(pdf.path()).unwrap();

    let result = analyzer.analyze(&file).unwrap();
    assert_eq!(result.geography, "DACH");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/analyze");
    assert!(req
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));
    let body = req.body_text();
    assert!(body.contains("name=\"file\""));
    assert!(body.contains(&format!("filename=\"{}\"", file.name())));
    assert!(body.contains("application/pdf"));
    assert!(body.contains("fake deck body"));
}

#[test]
fn form_renders_successful_analysis() {
    let server = common::analyze_server::start(200, RESULT_JSON);
    let analyzer = analyzer_for(&server.base_url);
    let pdf = pdf_on_disk(b"%PDF-1.4\n");

    let mut form = UploadForm::new();
    form.select_file(SelectedFile::from_path(pdf.path()).unwrap());
    assert_eq!(form.submit(&analyzer), UiState::Success);

    let view = render::project(form.result().unwrap());
    assert_eq!(view.total, "7.0 / 10.0");
    let entry = &view.sections[1].entries[0];
    assert_eq!(entry.label, "market fit");
    assert_eq!(entry.score, "0.8 / 1.0");
    assert_eq!(entry.rationale, "Strong demand");
}

#[test]
fn server_error_yields_generic_message_and_no_result() {
    for status in [400, 500] {
        let server = common::analyze_server::start(status, r#"{"detail": "nope"}"#);
        let analyzer = analyzer_for(&server.base_url);

        let err = analyzer
            .analyze(&SelectedFile::from_bytes("deck.pdf", b"%PDF".to_vec()))
            .unwrap_err();
        assert!(matches!(err, RequestError::Http(code) if code == u32::from(status)));

        let mut form = UploadForm::new();
        form.select_file(SelectedFile::from_bytes("deck.pdf", b"%PDF".to_vec()));
        assert_eq!(form.submit(&analyzer), UiState::Error);
        assert_eq!(form.error(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(form.result().is_none());
    }
}

#[test]
fn malformed_body_is_request_error() {
    let server = common::analyze_server::start(200, r#"{"summary": "only this"}"#);
    let analyzer = analyzer_for(&server.base_url);
    let err = analyzer
        .analyze(&SelectedFile::from_bytes("deck.pdf", b"%PDF".to_vec()))
        .unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[test]
fn no_file_means_no_request() {
    let server = common::analyze_server::start(200, RESULT_JSON);
    let analyzer = analyzer_for(&server.base_url);
    let mut form = UploadForm::new();
    assert_eq!(form.submit(&analyzer), UiState::Error);
    assert_eq!(form.error(), Some("Please select a file first"));
    assert!(server.requests().is_empty());
}
