//! HTTP client implementation for the Cloud TTS API.

use std::time::Duration;

use reqwest::{
    Client as ReqwestClient, Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// HTTP client for the Cloud TTS API.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    auth: AuthConfig,
}

/// Authentication configuration.
#[derive(Clone, Debug)]
pub(crate) struct AuthConfig {
    pub(crate) api_key: Option<String>,
    pub(crate) bearer_token: Option<String>,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub(crate) fn new(base_url: String, auth: AuthConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// Makes a JSON request to the API.
    ///
    /// The API key, when present and no bearer token is configured, is passed
    /// as the `key` query parameter the way the REST API documents it.
    pub(crate) async fn request<T, R>(
        &self,
        method: &str,
        path: &str,
        body: Option<&T>,
    ) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.build_url(path);

        let mut request = match method {
            "GET" => self.client.get(&url),
            "POST" => self.client.post(&url),
            _ => return Err(Error::Other(format!("unsupported method: {}", method))),
        };

        request = request.headers(self.default_headers()?);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Builds the full request URL, appending the API key when it carries
    /// the authentication.
    fn build_url(&self, path: &str) -> String {
        let url = format!("{}{}", self.base_url, path);
        match (&self.auth.bearer_token, &self.auth.api_key) {
            (None, Some(key)) => {
                let sep = if path.contains('?') { '&' } else { '?' };
                format!("{}{}key={}", url, sep, key)
            }
            _ => url,
        }
    }

    /// Returns default headers for API requests.
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(ref token) = self.auth.bearer_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::Config(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
            if let Some(ref key) = self.auth.api_key {
                let value = HeaderValue::from_str(key)
                    .map_err(|e| Error::Config(e.to_string()))?;
                headers.insert("X-Goog-Api-Key", value);
            }
        }

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("podforge-googletts-rust/1.0"),
        );
        Ok(headers)
    }

    /// Handles the API response.
    async fn handle_response<R>(&self, response: Response) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&body, status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(Error::from)
    }
}

/// Parses an error response body.
///
/// The API wraps errors as `{"error": {"code", "message", "status"}}`.
fn parse_error(body: &[u8], http_status: u16) -> Error {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        #[serde(default)]
        message: String,
        #[serde(default)]
        status: String,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return Error::api(parsed.error.status, parsed.error.message, http_status);
    }

    Error::api(
        http_status.to_string(),
        String::from_utf8_lossy(body).to_string(),
        http_status,
    )
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_parse_error_structured() {
        let body = br#"{"error":{"code":403,"message":"The request is missing a valid API key.","status":"PERMISSION_DENIED"}}"#;
        let err = parse_error(body, 403);
        assert!(err.to_string().contains("missing a valid API key"));
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_parse_error_opaque() {
        let err = parse_error(b"upstream exploded", 500);
        assert!(err.to_string().contains("upstream exploded"));
    }

    #[test]
    fn test_build_url_api_key() {
        let http = HttpClient::new(
            "https://texttospeech.googleapis.com".to_string(),
            AuthConfig {
                api_key: Some("k1".to_string()),
                bearer_token: None,
            },
        )
        .unwrap();
        assert_eq!(
            http.build_url("/v1/text:synthesize"),
            "https://texttospeech.googleapis.com/v1/text:synthesize?key=k1"
        );
    }

    #[test]
    fn test_build_url_bearer_keeps_path() {
        let http = HttpClient::new(
            "https://texttospeech.googleapis.com".to_string(),
            AuthConfig {
                api_key: Some("k1".to_string()),
                bearer_token: Some("t1".to_string()),
            },
        )
        .unwrap();
        assert_eq!(
            http.build_url("/v1/text:synthesize"),
            "https://texttospeech.googleapis.com/v1/text:synthesize"
        );
    }
}
