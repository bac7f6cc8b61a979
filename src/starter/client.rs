//! HTTP client for the MicroProfile Starter service.
//!
//! Two endpoints: a JSON support matrix describing valid version/server/spec
//! combinations, and a project endpoint that answers a generation request
//! with a zip archive.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{StarterError, StarterResult, SupportMatrix};

/// Default base URL of the starter service.
pub const DEFAULT_BASE_URL: &str = "https://start.microprofile.io";

/// Timeout for the support matrix fetch. The project download deliberately
/// has none: once submitted it runs to completion or failure.
const MATRIX_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully populated project generation request.
///
/// Every field comes from an explicit, non-cancelled user choice; the wizard
/// never submits a partial request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub group_id: String,
    pub artifact_id: String,
    pub mp_version: String,
    pub supported_server: String,
    #[serde(rename = "javaSEVersion")]
    pub java_se_version: String,
    pub selected_specs: Vec<String>,
}

impl GenerationRequest {
    /// File name of the archive the service generates for this request.
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.artifact_id)
    }
}

/// Abstraction over the starter service, so the wizard can run against a
/// fake in tests.
pub trait StarterApi {
    /// Fetch and validate the support matrix.
    fn fetch_support_matrix(&self) -> StarterResult<SupportMatrix>;

    /// Submit a generation request and write the resulting archive to
    /// `dest`. Returns the number of bytes written.
    fn download_project(&self, request: &GenerationRequest, dest: &Path) -> StarterResult<u64>;
}

/// Blocking HTTP client for the starter service.
pub struct StarterClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl StarterClient {
    /// Create a client against the default service URL.
    pub fn new() -> StarterResult<Self> {
        Self::with_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_url(base_url: &str) -> StarterResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("mpstart/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StarterError::Network(e.to_string()))?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), client })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn check_status(response: reqwest::blocking::Response) -> StarterResult<reqwest::blocking::Response> {
        let status = response.status().as_u16();
        if (400..600).contains(&status) {
            tracing::warn!(status, "starter service returned an error status");
            return Err(StarterError::BadResponse { status });
        }
        Ok(response)
    }
}

impl StarterApi for StarterClient {
    fn fetch_support_matrix(&self) -> StarterResult<SupportMatrix> {
        let url = format!("{}/api/3/supportMatrix", self.base_url);
        tracing::debug!(%url, "fetching support matrix");

        let response = self
            .client
            .get(&url)
            .timeout(MATRIX_TIMEOUT)
            .send()
            .map_err(|e| StarterError::Network(e.to_string()))?;

        let response = Self::check_status(response)?;

        let value: serde_json::Value =
            response.json().map_err(|e| StarterError::MalformedMatrix(e.to_string()))?;

        SupportMatrix::from_value(value)
    }

    fn download_project(&self, request: &GenerationRequest, dest: &Path) -> StarterResult<u64> {
        let url = format!("{}/api/2/project", self.base_url);
        tracing::debug!(%url, artifact = %request.artifact_id, "requesting project archive");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| StarterError::Network(e.to_string()))?;

        let mut response = Self::check_status(response)?;

        let mut file = File::create(dest)?;
        let bytes = response
            .copy_to(&mut file)
            .map_err(|e| StarterError::Network(e.to_string()))?;

        tracing::debug!(bytes, dest = %dest.display(), "archive written");
        Ok(bytes)
    }
}

/// The download target: where the archive lands before extraction.
///
/// Lives just long enough to download, extract, and delete the zip.
#[derive(Debug, Clone)]
pub struct DownloadTarget {
    /// Directory the project is generated into.
    pub dir: PathBuf,
    /// Full path of the archive inside `dir`.
    pub archive_path: PathBuf,
}

impl DownloadTarget {
    /// Derive the target for a request in the given directory.
    pub fn new(dir: &Path, request: &GenerationRequest) -> Self {
        let archive_path = dir.join(request.archive_name());
        Self { dir: dir.to_path_buf(), archive_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> GenerationRequest {
        GenerationRequest {
            group_id: "com.example".to_string(),
            artifact_id: "demo".to_string(),
            mp_version: "MP4.1".to_string(),
            supported_server: "LIBERTY".to_string(),
            java_se_version: "SE17".to_string(),
            selected_specs: vec!["CONFIG".to_string(), "METRICS".to_string()],
        }
    }

    #[test]
    fn test_request_wire_format() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "groupId": "com.example",
                "artifactId": "demo",
                "mpVersion": "MP4.1",
                "supportedServer": "LIBERTY",
                "javaSEVersion": "SE17",
                "selectedSpecs": ["CONFIG", "METRICS"]
            })
        );
    }

    #[test]
    fn test_request_has_exactly_six_fields() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_archive_name_from_artifact() {
        assert_eq!(sample_request().archive_name(), "demo.zip");
    }

    #[test]
    fn test_download_target_paths() {
        let target = DownloadTarget::new(Path::new("/tmp/out"), &sample_request());
        assert_eq!(target.archive_path, Path::new("/tmp/out/demo.zip"));
        assert_eq!(target.dir, Path::new("/tmp/out"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = StarterClient::with_url("https://example.com/").unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }
}
