// API client module: a small blocking HTTP client for the MakeUGC REST API.
// Each call is a single synchronous request; nothing is retried. Response
// bodies come back as raw JSON because the service does not commit to one
// envelope; see `types` for the normalization rules.

use crate::config::{Config, Credential};
use crate::error::{Result, UgcError};
use crate::types::GenerationRequest;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// The three endpoints the tool talks to. `ApiClient` is the HTTP
/// implementation; the pipeline only depends on this trait.
pub trait VideoApi {
    /// `GET /avatars`
    fn fetch_avatars(&self) -> Result<Value>;

    /// `POST /videos/generate`
    fn submit_generation(&self, request: &GenerationRequest) -> Result<Value>;

    /// `GET /videos/{id}`
    fn fetch_video(&self, video_id: &str) -> Result<Value>;
}

/// Blocking client holding the reqwest client and the resolved base URL.
/// Auth and JSON headers are installed once as client defaults.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    /// Builds a client for `config`, authenticating with `credential`.
    pub fn new(config: Config, credential: &Credential) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(credential)?)
            .timeout(config.request_timeout)
            .build()?;
        Ok(ApiClient { client, config })
    }

    /// Reads credential and config from the environment.
    pub fn from_env() -> Result<Self> {
        let credential = Credential::from_env()?;
        Self::new(Config::from_env(), &credential)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn get(&self, path: &str) -> Result<Value> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "GET");
        let res = self.client.get(&url).send()?;
        read_json(res)
    }

    fn post(&self, path: &str, body: &GenerationRequest) -> Result<Value> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, name = %body.name, avatar = ?body.avatar_id, "POST");
        let res = self.client.post(&url).json(body).send()?;
        read_json(res)
    }
}

impl VideoApi for ApiClient {
    fn fetch_avatars(&self) -> Result<Value> {
        self.get("avatars")
    }

    fn submit_generation(&self, request: &GenerationRequest) -> Result<Value> {
        self.post("videos/generate", request)
    }

    fn fetch_video(&self, video_id: &str) -> Result<Value> {
        self.get(&format!("videos/{video_id}"))
    }
}

fn default_headers(credential: &Credential) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&credential.bearer())
        .map_err(|_| UgcError::Usage("MAKEUGC_API_KEY contains invalid characters".into()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Fails on non-success status, otherwise parses the body as JSON. A
/// success body that is not JSON is a protocol error.
fn read_json(res: Response) -> Result<Value> {
    let status = res.status();
    let text = res.text()?;
    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "request rejected");
        return Err(UgcError::remote(status.as_u16(), &text));
    }
    serde_json::from_str(&text).map_err(|_| UgcError::Protocol(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(key: &str) -> Credential {
        Credential::resolve_with(|_| Some(key.to_string())).unwrap()
    }

    #[test]
    fn test_default_headers() {
        let headers = default_headers(&credential("sk-test")).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_invalid_header_characters() {
        let err = default_headers(&credential("bad\nkey")).unwrap_err();
        assert!(matches!(err, UgcError::Usage(_)));
    }
}
