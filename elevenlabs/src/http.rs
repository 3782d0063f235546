//! HTTP client implementation for the ElevenLabs API.

use std::time::Duration;

use bytes::Bytes;
use futures::StreamExt;
use reqwest::{
    Client as ReqwestClient, Response, multipart,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// HTTP client for the ElevenLabs API.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub(crate) fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Makes a JSON request to the API.
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
        let url = format!("{}{}", self.base_url, path);

        let mut request = match method {
            "GET" => self.client.get(&url),
            "POST" => self.client.post(&url),
            "DELETE" => self.client.delete(&url),
            _ => return Err(Error::Other(format!("unsupported method: {}", method))),
        };

        request = request.headers(self.default_headers()?);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&body, status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Makes a JSON request and drains the binary response body in full.
    pub(crate) async fn request_bytes<T>(&self, path: &str, body: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers()?)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        // The audio arrives as a chunked byte stream; collect all of it
        // before handing it to the caller.
        let mut stream = response.bytes_stream();
        let mut audio = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk: Bytes = chunk?;
            audio.extend_from_slice(&chunk);
        }

        Ok(audio)
    }

    /// Uploads a multipart form (voice cloning).
    pub(crate) async fn upload<R>(&self, path: &str, form: multipart::Form) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(
            "xi-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|e| Error::Config(e.to_string()))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("podforge-elevenlabs-rust/1.0"),
        );

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&body, status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Returns default headers for JSON API requests.
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "xi-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|e| Error::Config(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("podforge-elevenlabs-rust/1.0"),
        );
        Ok(headers)
    }

    /// Handles an error response.
    async fn handle_error_response(&self, response: Response) -> Error {
        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => parse_error(&body, status),
            Err(e) => Error::Http(e),
        }
    }
}

/// Parses an error response body.
///
/// The API reports errors as `{"detail": ...}`, where detail is either a
/// plain string or a `{message, status}` object.
fn parse_error(body: &[u8], http_status: u16) -> Error {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        let detail = match parsed.detail {
            serde_json::Value::String(s) => s,
            other => other
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        };
        return Error::api(detail, http_status);
    }

    Error::api(String::from_utf8_lossy(body).to_string(), http_status)
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_parse_error_string_detail() {
        let err = parse_error(br#"{"detail":"Invalid voice_id"}"#, 400);
        assert!(err.to_string().contains("Invalid voice_id"));
    }

    #[test]
    fn test_parse_error_object_detail() {
        let err = parse_error(
            br#"{"detail":{"status":"voice_not_found","message":"No such voice"}}"#,
            404,
        );
        assert!(err.to_string().contains("No such voice"));
    }

    #[test]
    fn test_parse_error_opaque() {
        let err = parse_error(b"gateway timeout", 504);
        assert!(err.to_string().contains("gateway timeout"));
    }
}
