//! Client for the remote skill-management API
//!
//! Only the surface the upgrade needs: start a skill-package export, poll
//! its status, and download the resulting archive. Calls are blocking; the
//! CLI has no async runtime.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use serde::Deserialize;
use thiserror::Error;

/// Base URL of the skill-management API
pub const DEFAULT_BASE_URL: &str = "https://api.skillkit.dev";

/// Environment variable overriding the base URL (staging, tests)
pub const BASE_URL_ENV: &str = "SKILLKIT_SMAPI_BASE_URL";

/// Request timeout for individual calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Skill stage an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The in-development version of the skill
    Development,
    /// The live (certified) version of the skill
    Live,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// Errors from talking to the skill-management API
#[derive(Debug, Error)]
pub enum SmapiError {
    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("service returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (truncated is fine; used for diagnostics only)
        body: String,
    },

    /// An export was accepted but no Location header came back
    #[error("export accepted but no status location was returned")]
    MissingLocation,

    /// The export ended in a failed state
    #[error("skill package export failed: {0}")]
    ExportFailed(String),

    /// The export did not finish within the poll budget
    #[error("skill package export did not finish after {attempts} status checks")]
    ExportTimeout {
        /// How many status checks were made
        attempts: u32,
    },

    /// Writing the downloaded archive failed
    #[error("failed to write download: {0}")]
    Io(#[from] io::Error),
}

/// Status of a skill-package export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportStatus {
    /// Still being assembled
    InProgress,
    /// Ready for download
    Succeeded,
    /// Export failed on the service side
    Failed,
}

/// Response body of an export status check
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    /// Current export status
    pub status: ExportStatus,
    /// Present once the export succeeded
    #[serde(default)]
    pub skill: Option<ExportSkill>,
}

/// Download details of a finished export
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSkill {
    /// Where to download the skill package archive
    #[serde(default)]
    pub location: Option<String>,
}

/// Blocking client bound to one bearer token
pub struct SmapiClient {
    base_url: String,
    token: String,
    http: Client,
}

impl fmt::Debug for SmapiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmapiClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl SmapiClient {
    /// Create a client using the default (or env-overridden) base URL
    pub fn new(token: String) -> Result<Self, SmapiError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url, token)
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(base_url: String, token: String) -> Result<Self, SmapiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    /// Start a skill-package export.
    ///
    /// Returns the status location to poll (from the `Location` header,
    /// resolved against the base URL when relative).
    pub fn export_package(&self, skill_id: &str, stage: Stage) -> Result<String, SmapiError> {
        let url = format!("{}/v1/skills/{skill_id}/stages/{stage}/exports", self.base_url);
        debug!("POST {url}");

        let resp = self.http.post(&url).bearer_auth(&self.token).send()?;
        let resp = Self::check_status(resp)?;

        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(SmapiError::MissingLocation)?;
        Ok(self.absolute_url(location))
    }

    /// Check the status of an export previously started
    pub fn export_status(&self, location: &str) -> Result<ExportResponse, SmapiError> {
        debug!("GET {location}");
        let resp = self.http.get(location).bearer_auth(&self.token).send()?;
        let resp = Self::check_status(resp)?;
        Ok(resp.json()?)
    }

    /// Download a finished export archive to `dest`
    pub fn download(&self, url: &str, dest: &Path) -> Result<(), SmapiError> {
        debug!("GET {url} -> {}", dest.display());
        let resp = self.http.get(url).bearer_auth(&self.token).send()?;
        let mut resp = Self::check_status(resp)?;

        let mut out = File::create(dest)?;
        io::copy(&mut resp, &mut out)?;
        Ok(())
    }

    fn absolute_url(&self, location: &str) -> String {
        if location.starts_with("http://") || location.starts_with("https://") {
            location.to_string()
        } else {
            format!("{}/{}", self.base_url, location.trim_start_matches('/'))
        }
    }

    fn check_status(
        resp: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, SmapiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(SmapiError::Status {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            })
        }
    }
}
