//! Steam HTTP client implementation.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};

use crate::auth::SteamGuard;
use crate::error::SteamError;
use crate::web::endpoints::{STEAM_API_BASE_URL, STEAM_COMMUNITY_BASE_URL};

/// The Steam Web API and community client.
///
/// Reads go to the Web API (API key) or the community site; writes are
/// form-encoded community posts that need the session id of a logged-in
/// browser session. Login and mobile confirmations draw codes from the
/// configured [`SteamGuard`].
///
/// The client does not throttle on its own; wrap it in a
/// [`RateLimitedClient`](crate::rate_limit::RateLimitedClient).
///
/// # Example
///
/// ```rust,no_run
/// use steam_trade_client::types::SteamId;
/// use steam_trade_client::web::SteamWebClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SteamWebClient::builder().api_key("API_KEY").build();
///
///     let summaries = client
///         .get_player_summaries(SteamId::new(76561197960435530))
///         .await?;
///     for player in summaries.response.players {
///         println!("{}: {}", player.steamid, player.personaname);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SteamWebClient {
    http_client: ClientWithMiddleware,
    api_base_url: String,
    community_base_url: String,
    api_key: Option<SecretString>,
    session_id: Option<String>,
    guard: Option<SteamGuard>,
}

impl SteamWebClient {
    /// Create a new client with default settings.
    ///
    /// This client can only read public community data.
    /// Use [`SteamWebClient::builder()`] to configure an API key, session and guard.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> SteamWebClientBuilder {
        SteamWebClientBuilder::new()
    }

    /// The configured Steam Guard, if any.
    pub fn guard(&self) -> Option<&SteamGuard> {
        self.guard.as_ref()
    }

    pub(crate) fn require_guard(&self) -> Result<&SteamGuard, SteamError> {
        self.guard.as_ref().ok_or(SteamError::MissingGuard)
    }

    /// Make a Web API GET request with the API key and query parameters.
    pub(crate) async fn api_get<T, Q>(&self, endpoint: &str, params: &Q) -> Result<T, SteamError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let api_key = self.api_key.as_ref().ok_or(SteamError::MissingApiKey)?;

        #[derive(serde::Serialize)]
        struct KeyParam<'a> {
            key: &'a str,
        }
        let key_string = serde_urlencoded::to_string(KeyParam {
            key: api_key.expose_secret(),
        })
        .map_err(|e| SteamError::InvalidResponse(e.to_string()))?;
        let query_string = encode_params(params)?;

        let url = if query_string.is_empty() {
            format!("{}{}?{}", self.api_base_url, endpoint, key_string)
        } else {
            format!(
                "{}{}?{}&{}",
                self.api_base_url, endpoint, key_string, query_string
            )
        };

        tracing::debug!(endpoint, "Web API request");
        let response = self.http_client.get(&url).send().await?;
        parse_response(response).await
    }

    /// Make a community GET request.
    pub(crate) async fn community_get<T, Q>(&self, path: &str, params: &Q) -> Result<T, SteamError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = encode_params(params)?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.community_base_url, path)
        } else {
            format!("{}{}?{}", self.community_base_url, path, query_string)
        };

        tracing::debug!(path, "community request");
        let response = self.http_client.get(&url).send().await?;
        parse_response(response).await
    }

    /// Make a form-encoded community POST without a session id.
    pub(crate) async fn community_post_form<T, P>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<T, SteamError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let body = encode_params(params)?;
        let text = self.post_form(path, body).await?;
        parse_body(&text)
    }

    /// Make a form-encoded community POST carrying the session id.
    pub(crate) async fn session_post<T, P>(&self, path: &str, params: &P) -> Result<T, SteamError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let text = self.session_post_text(path, params).await?;
        parse_body(&text)
    }

    /// Make a form-encoded community POST carrying the session id,
    /// returning the raw body after the status check.
    pub(crate) async fn session_post_text<P>(&self, path: &str, params: &P) -> Result<String, SteamError>
    where
        P: serde::Serialize + ?Sized,
    {
        let session_id = self.session_id.as_deref().ok_or(SteamError::MissingSession)?;

        #[derive(serde::Serialize)]
        struct SessionParam<'a> {
            sessionid: &'a str,
        }
        let mut body = serde_urlencoded::to_string(SessionParam {
            sessionid: session_id,
        })
        .map_err(|e| SteamError::InvalidResponse(e.to_string()))?;

        let form_data = encode_params(params)?;
        if !form_data.is_empty() {
            body.push('&');
            body.push_str(&form_data);
        }

        self.post_form(path, body).await
    }

    async fn post_form(&self, path: &str, body: String) -> Result<String, SteamError> {
        let url = format!("{}{}", self.community_base_url, path);

        tracing::debug!(path, "community form post");
        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        checked_body(response).await
    }
}

fn encode_params<Q>(params: &Q) -> Result<String, SteamError>
where
    Q: serde::Serialize + ?Sized,
{
    serde_urlencoded::to_string(params).map_err(|e| SteamError::InvalidResponse(e.to_string()))
}

/// Fail on non-success status, otherwise return the body.
async fn checked_body(response: reqwest::Response) -> Result<String, SteamError> {
    let status = response.status();
    if !status.is_success() {
        let mut url = response.url().clone();
        url.set_query(None);
        return Err(SteamError::Status {
            status,
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}

async fn parse_response<T>(response: reqwest::Response) -> Result<T, SteamError>
where
    T: serde::de::DeserializeOwned,
{
    let body = checked_body(response).await?;
    parse_body(&body)
}

fn parse_body<T>(body: &str) -> Result<T, SteamError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        SteamError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
    })
}

impl Default for SteamWebClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SteamWebClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamWebClient")
            .field("api_base_url", &self.api_base_url)
            .field("community_base_url", &self.community_base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("has_session", &self.session_id.is_some())
            .field("has_guard", &self.guard.is_some())
            .finish()
    }
}

/// Builder for [`SteamWebClient`].
pub struct SteamWebClientBuilder {
    api_base_url: String,
    community_base_url: String,
    api_key: Option<SecretString>,
    session_id: Option<String>,
    guard: Option<SteamGuard>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl SteamWebClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_base_url: STEAM_API_BASE_URL.to_string(),
            community_base_url: STEAM_COMMUNITY_BASE_URL.to_string(),
            api_key: None,
            session_id: None,
            guard: None,
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the Web API base URL (useful for testing with a mock server).
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the community base URL (useful for testing with a mock server).
    pub fn community_base_url(mut self, url: impl Into<String>) -> Self {
        self.community_base_url = url.into();
        self
    }

    /// Point both base URLs at the same server.
    pub fn base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url(url.clone()).community_base_url(url)
    }

    /// Set the Steam Web API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the Steam Web API key from an already-wrapped secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the community session id used by write actions.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the Steam Guard secrets for login codes and confirmations.
    pub fn guard(mut self, guard: SteamGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> SteamWebClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("steam-trade-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("steam-trade-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        SteamWebClient {
            http_client: client,
            api_base_url: trim_base(self.api_base_url),
            community_base_url: trim_base(self.community_base_url),
            api_key: self.api_key,
            session_id: self.session_id,
            guard: self.guard,
        }
    }
}

impl Default for SteamWebClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secrets() {
        let client = SteamWebClient::builder()
            .api_key("SECRET_KEY")
            .session_id("abc123")
            .build();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("SECRET_KEY"));
        assert!(!debug_str.contains("abc123"));
        assert!(debug_str.contains("has_api_key: true"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = SteamWebClient::builder()
            .base_url("http://127.0.0.1:8080/")
            .build();
        assert_eq!(client.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(client.community_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_parse_body_reports_payload() {
        let err = parse_body::<serde_json::Value>("<html>").unwrap_err();
        match err {
            SteamError::InvalidResponse(msg) => assert!(msg.contains("<html>")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
