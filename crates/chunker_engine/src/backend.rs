use std::time::Duration;

use chunker_logging::chunker_debug;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{error_detail, GenerateRequest, GenerateResponse, SearchResponse, UploadResponse};
use crate::{BackendError, DocumentUpload, IndexingReceipt};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Scheme, host and optional path prefix; endpoint paths are appended to it.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub upload_path: String,
    pub search_path: String,
    pub generate_path: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            upload_path: "/upload/".to_string(),
            search_path: "/search/".to_string(),
            generate_path: "/gemini-proxy".to_string(),
        }
    }
}

/// The three backend capabilities the workflow depends on.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn upload(&self, document: DocumentUpload) -> Result<IndexingReceipt, BackendError>;

    /// Results come back in relevance order.
    async fn search(&self, query: &str) -> Result<Vec<String>, BackendError>;

    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    upload_url: Url,
    search_url: Url,
    generate_url: Url,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::Network(err.to_string()))?;

        Ok(Self {
            client,
            upload_url: endpoint(&settings.base_url, &settings.upload_path)?,
            search_url: endpoint(&settings.base_url, &settings.search_path)?,
            generate_url: endpoint(&settings.base_url, &settings.generate_path)?,
        })
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn upload(&self, document: DocumentUpload) -> Result<IndexingReceipt, BackendError> {
        let byte_len = document.bytes.len();
        let part = Part::bytes(document.bytes)
            .file_name(document.filename)
            .mime_str(document.mime)
            .map_err(map_reqwest_error)?;
        let form = Form::new().part("file", part);

        chunker_debug!("POST {} ({byte_len} bytes)", self.upload_url);
        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: UploadResponse = read_json(response).await?;
        Ok(body.into())
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, BackendError> {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("q", query);

        chunker_debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: SearchResponse = read_json(response).await?;
        Ok(body.results.unwrap_or_default())
    }

    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        chunker_debug!("POST {} (prompt {} chars)", self.generate_url, prompt.len());
        let response = self
            .client
            .post(self.generate_url.clone())
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: GenerateResponse = read_json(response).await?;
        body.into_text()
    }
}

fn endpoint(base_url: &str, path: &str) -> Result<Url, BackendError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|err| BackendError::InvalidEndpoint(format!("{joined}: {err}")))
}

/// Any non-success status is a failure; its body may carry a `detail` message.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;
    if !status.is_success() {
        return Err(BackendError::HttpStatus {
            status: status.as_u16(),
            detail: error_detail(&body),
        });
    }
    serde_json::from_slice(&body).map_err(|err| BackendError::Decode(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::Timeout(err.to_string());
    }
    if err.is_decode() {
        return BackendError::Decode(err.to_string());
    }
    BackendError::Network(err.to_string())
}
