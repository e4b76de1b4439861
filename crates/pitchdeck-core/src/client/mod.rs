//! Multipart upload to the analysis service.
//!
//! Uses the curl crate (libcurl). One call to [`Analyzer::analyze`] is one
//! POST; there is no retry. The call blocks the current thread; run it on
//! `spawn_blocking` from async code.

mod error;

use anyhow::Result;
use std::str;
use std::time::Duration;
use url::Url;

use crate::analysis::AnalysisResult;
use crate::config::PitchdeckConfig;
use crate::form::SelectedFile;

pub use error::{RequestError, GENERIC_FAILURE_MESSAGE};

/// Multipart field that carries the deck.
pub const FILE_FIELD: &str = "file";
/// Content type sent for the deck part.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Something that turns a selected deck into an analysis.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, RequestError>;
}

/// [`Analyzer`] backed by the remote HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    url: Url,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpAnalyzer {
    pub fn new(url: Url, connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            url,
            connect_timeout,
            timeout,
        }
    }

    /// Build from config; fails if the endpoint URL is invalid.
    pub fn from_config(cfg: &PitchdeckConfig) -> Result<Self> {
        Ok(Self::new(
            cfg.analyze_url()?,
            cfg.connect_timeout(),
            cfg.request_timeout(),
        ))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send the multipart POST and return (status, body).
    fn post(&self, file: &SelectedFile) -> Result<(u32, Vec<u8>), RequestError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(self.url.as_str())?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        // Empty `Expect:` stops libcurl from waiting on 100-continue.
        let mut list = curl::easy::List::new();
        list.append("Expect:")?;
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        let mut form = curl::easy::Form::new();
        form.part(FILE_FIELD)
            .buffer(file.name(), file.bytes().to_vec())
            .content_type(PDF_CONTENT_TYPE)
            .add()?;
        easy.httppost(form)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Analyzer for HttpAnalyzer {
    fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, RequestError> {
        tracing::info!(
            "POST {} file={} bytes={}",
            self.url,
            file.name(),
            file.len()
        );
        let (code, body) = self.post(file)?;
        tracing::debug!("analysis response HTTP {} ({} bytes)", code, body.len());
        if !(200..300).contains(&code) {
            if let Ok(text) = str::from_utf8(&body) {
                tracing::debug!("error body: {}", text.chars().take(512).collect::<String>());
            }
            return Err(RequestError::Http(code));
        }
        AnalysisResult::from_json_slice(&body)
    }
}
