use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::{api::types::ApiError, config::RuntimeConfig};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    read_retries: u32,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &RuntimeConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::unknown(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            read_retries: config.read_retries,
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let config = RuntimeConfig {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            ..RuntimeConfig::default()
        };
        Self {
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_default(),
            base_url: config.api_base_url,
            read_retries: config.read_retries,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn endpoint_with_id(&self, collection: &str, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            collection,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("session rejected by the server; clearing token");
            self.set_token(None);
        }
    }

    /// Sends a mutation once; mutations are never retried automatically.
    pub(crate) async fn send<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let request = self.authorize(build()?);
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    /// Sends an idempotent read, retrying transport failures (timeouts,
    /// refused connections) up to `read_retries` times. HTTP error statuses
    /// are returned as-is.
    pub(crate) async fn send_with_retry<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let mut attempt = 0;
        loop {
            let request = self.authorize(build()?);
            match request.send().await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < self.read_retries && (err.is_timeout() || err.is_connect()) => {
                    attempt += 1;
                    tracing::debug!(attempt, error = %err, "retrying read after transport failure");
                }
                Err(err) => {
                    return Err(ApiError::request_failed(format!("Request failed: {}", err)))
                }
            }
        }
    }

    pub(crate) async fn map_json_response<T>(&self, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        ApiError::from_status(status, body.message.or(body.error))
    }

    pub(crate) async fn get_json<T>(&self, url: String) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "GET");
        let response = self
            .send_with_retry(|| Ok(self.http_client().get(&url)))
            .await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn get_json_with_query<Q, T>(
        &self,
        url: String,
        query: &Q,
    ) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "GET");
        let response = self
            .send_with_retry(|| Ok(self.http_client().get(&url).query(query)))
            .await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "POST");
        let response = self
            .send(|| Ok(self.http_client().post(&url).json(body)))
            .await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, url: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "PUT");
        let response = self
            .send(|| Ok(self.http_client().put(&url).json(body)))
            .await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn put_empty<B>(&self, url: String, body: &B) -> Result<(), ApiError>
    where
        B: Serialize,
    {
        tracing::debug!(%url, "PUT");
        let response = self
            .send(|| Ok(self.http_client().put(&url).json(body)))
            .await?;
        self.map_empty_response(response).await
    }

    pub(crate) async fn delete(&self, url: String) -> Result<(), ApiError> {
        tracing::debug!(%url, "DELETE");
        let response = self.send(|| Ok(self.http_client().delete(&url))).await?;
        self.map_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let api = ApiClient::new_with_base_url("http://localhost:8080/api/");
        assert_eq!(api.base_url(), "http://localhost:8080/api");
        assert_eq!(
            api.endpoint("/leaves/all"),
            "http://localhost:8080/api/leaves/all"
        );
    }

    #[test]
    fn endpoint_with_id_escapes_path_separators() {
        let api = ApiClient::new_with_base_url("http://localhost/api");
        assert_eq!(
            api.endpoint_with_id("/admin/departments", "4f1c-9a"),
            "http://localhost/api/admin/departments/4f1c-9a"
        );
        assert_eq!(
            api.endpoint_with_id("/admin/departments", "a/b c"),
            "http://localhost/api/admin/departments/a%2Fb%20c"
        );
    }

    #[test]
    fn token_is_shared_between_clones() {
        let api = ApiClient::new_with_base_url("http://localhost/api");
        let clone = api.clone();
        api.set_token(Some("tok".into()));
        assert_eq!(clone.token().as_deref(), Some("tok"));
        clone.set_token(None);
        assert!(api.token().is_none());
    }
}
