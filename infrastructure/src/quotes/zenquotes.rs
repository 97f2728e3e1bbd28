//! ZenQuotes adapter for the [`QuoteSource`] port.
//!
//! The service answers `GET /api/random` with a JSON array whose elements
//! carry the quote text in `q` and the author in `a`.

use async_trait::async_trait;
use reqwest::StatusCode;
use sentiquote_application::{QuoteFetchError, QuoteSource};
use sentiquote_domain::Quote;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default random-quote endpoint
pub const DEFAULT_QUOTE_URL: &str = "https://zenquotes.io/api/random";

/// Largest response body accepted from the quote service
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Fetches random quotes over HTTPS.
///
/// Holds one pooled [`reqwest::Client`] shared by every request.
#[derive(Debug, Clone)]
pub struct ZenQuotesClient {
    client: reqwest::Client,
    url: String,
}

impl ZenQuotesClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build a client with its own connection pool and `User-Agent`.
    pub fn with_user_agent(
        url: impl Into<String>,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self::new(client, url))
    }
}

#[async_trait]
impl QuoteSource for ZenQuotesClient {
    async fn fetch_random(&self, timeout: Duration) -> Result<Quote, QuoteFetchError> {
        debug!("Fetching quote from {}", self.url);

        let mut response = self
            .client
            .get(&self.url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("Quote service answered {}", status);
            return Err(QuoteFetchError::Status(status.as_u16()));
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_BODY_BYTES as u64)
        {
            debug!("Quote response too large");
            return Err(QuoteFetchError::UnexpectedFormat);
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| transport_error(e, timeout))?
        {
            if body.len() + chunk.len() > MAX_BODY_BYTES {
                debug!("Quote response exceeded {} bytes", MAX_BODY_BYTES);
                return Err(QuoteFetchError::UnexpectedFormat);
            }
            body.extend_from_slice(&chunk);
        }

        parse_quote(&body)
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> QuoteFetchError {
    if e.is_timeout() {
        QuoteFetchError::Timeout(timeout)
    } else {
        QuoteFetchError::Transport(e.to_string())
    }
}

/// Extract the first `{q, a}` element of a ZenQuotes response body.
pub(crate) fn parse_quote(body: &[u8]) -> Result<Quote, QuoteFetchError> {
    let json: Value =
        serde_json::from_slice(body).map_err(|_| QuoteFetchError::UnexpectedFormat)?;

    let first = json
        .as_array()
        .and_then(|items| items.first())
        .ok_or(QuoteFetchError::UnexpectedFormat)?;

    let text = first.get("q").and_then(Value::as_str);
    let author = first.get("a").and_then(Value::as_str);
    match (text, author) {
        (Some(text), Some(author)) => Ok(Quote::new(text, author)),
        _ => Err(QuoteFetchError::UnexpectedFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;

    // ==================== parse_quote ====================

    #[test]
    fn test_parse_first_element() {
        let body = br#"[{"q":"Stay hungry.","a":"Anon","h":"<blockquote/>"},{"q":"x","a":"y"}]"#;
        assert_eq!(parse_quote(body).unwrap(), Quote::new("Stay hungry.", "Anon"));
    }

    #[test]
    fn test_parse_rejects_unexpected_shapes() {
        let bodies: [&[u8]; 7] = [
            b"[]",
            b"{}",
            br#"{"q":"a","a":"b"}"#,
            br#"["just a string"]"#,
            br#"[{"q":"missing author"}]"#,
            br#"[{"q":1,"a":"numeric text"}]"#,
            b"<html>rate limited</html>",
        ];
        for body in bodies {
            assert_eq!(
                parse_quote(body),
                Err(QuoteFetchError::UnexpectedFormat),
                "body: {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    // ==================== HTTP round trips ====================

    /// Serve `router` on an ephemeral local port and return the quote endpoint URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/random", addr)
    }

    fn client(url: String) -> ZenQuotesClient {
        ZenQuotesClient::new(reqwest::Client::new(), url)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve(Router::new().route(
            "/api/random",
            get(|| async { r#"[{"q":"Be yourself.","a":"Oscar Wilde"}]"# }),
        ))
        .await;

        let quote = client(url)
            .fetch_random(Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(quote, Quote::new("Be yourself.", "Oscar Wilde"));
    }

    #[tokio::test]
    async fn test_fetch_non_200_status() {
        let url = serve(Router::new().route(
            "/api/random",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let err = client(url)
            .fetch_random(Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(err, QuoteFetchError::Status(500));
    }

    #[tokio::test]
    async fn test_fetch_empty_array() {
        let url = serve(Router::new().route("/api/random", get(|| async { "[]" }))).await;

        let err = client(url)
            .fetch_random(Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(err, QuoteFetchError::UnexpectedFormat);
    }

    #[tokio::test]
    async fn test_fetch_oversized_body() {
        let url = serve(Router::new().route(
            "/api/random",
            get(|| async {
                let text = "a".repeat(MAX_BODY_BYTES);
                format!(r#"[{{"q":"{}","a":"Anon"}}]"#, text)
            }),
        ))
        .await;

        let err = client(url)
            .fetch_random(Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(err, QuoteFetchError::UnexpectedFormat);
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let url = serve(Router::new().route(
            "/api/random",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "[]"
            }),
        ))
        .await;

        let err = client(url)
            .fetch_random(Duration::from_millis(100))
            .await
            .unwrap_err();
        assert_eq!(err, QuoteFetchError::Timeout(Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{}/api/random", addr))
            .fetch_random(Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteFetchError::Transport(_)));
        assert!(err.to_string().starts_with("Quote fetch failed: "));
    }
}
