//! HTTP configuration, request execution and envelope handling.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};
use crate::notify::{messages, Notifier};
use crate::session::Session;

/// Default API base URL (versioned API root).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL for API requests; paths are resolved against it.
    pub base_url: String,
    /// Overall request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl HttpConfig {
    /// Resolve a relative API path to a full URL.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Url::parse(path).map_err(Error::Url);
        }

        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Url::parse(&base)
            .and_then(|b| b.join(path.trim_start_matches('/')))
            .map_err(Error::Url)
    }
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .gzip(true)
        .build()
        .map_err(Error::Network)
}

/// Uniform response envelope: `{code, message, data}`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

/// Best-effort extraction of a `message` field from a non-2xx body.
fn server_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct Partial {
        message: Option<String>,
    }

    serde_json::from_str::<Partial>(body)
        .ok()
        .and_then(|p| p.message)
        .filter(|m| !m.is_empty())
}

/// Map a raw `(status, body)` pair into the unwrapped envelope payload.
///
/// This is the single normalization point of the error taxonomy: every
/// failure class produces exactly one notification, a 401 additionally
/// clears the session and forces a full reload at `/login`, and callers
/// only ever see the unwrapped `data`.
pub(crate) async fn process_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    session: &Session,
    notifier: &dyn Notifier,
) -> Result<Option<T>> {
    if status == StatusCode::UNAUTHORIZED {
        session.logout().await;
        notifier.error(messages::SESSION_EXPIRED);
        notifier.force_redirect("/login");
        return Err(Error::Unauthorized);
    }

    if status == StatusCode::FORBIDDEN {
        notifier.error(messages::PERMISSION_DENIED);
        return Err(Error::PermissionDenied);
    }

    if !status.is_success() {
        let message = server_message(body).unwrap_or_else(|| messages::SERVER_ERROR.to_owned());
        notifier.error(&message);
        return Err(Error::server(status.as_u16(), message));
    }

    let envelope: Envelope<T> = serde_json::from_str(body).map_err(Error::Json)?;

    if envelope.code != 0 {
        let message = envelope
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| messages::REQUEST_FAILED.to_owned());
        notifier.error(&message);
        return Err(Error::api(envelope.code, message));
    }

    Ok(envelope.data)
}

/// HTTP request executor: attaches the bearer token, sends, and funnels
/// the response through [`process_response`].
pub(crate) struct HttpExecutor<'a> {
    client: &'a Client,
    config: &'a HttpConfig,
    session: &'a Session,
    notifier: &'a dyn Notifier,
}

impl<'a> HttpExecutor<'a> {
    pub(crate) fn new(
        client: &'a Client,
        config: &'a HttpConfig,
        session: &'a Session,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            client,
            config,
            session,
            notifier,
        }
    }

    /// Execute a request and unwrap the envelope.
    pub(crate) async fn dispatch<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.resolve_url(path)?;
        log::debug!("{method} {url}");

        let mut request = self.client.request(method, url);

        let token = self.session.token();
        if !token.is_empty() {
            request = request.bearer_auth(&token);
        }

        if !query.is_empty() {
            request = request.query(query);
        }

        request = match body {
            Some(body) => request.json(body),
            None => request.header("Content-Type", "application/json"),
        };

        // No response at all: one network notification, no retry.
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                self.notifier.error(messages::NETWORK_ERROR);
                return Err(Error::Network(err));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                self.notifier.error(messages::NETWORK_ERROR);
                return Err(Error::Network(err));
            }
        };

        process_response(status, &text, self.session, self.notifier).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::test_support::RecordingNotifier;
    use crate::session::MemoryTokenStorage;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    async fn session_with_token(token: &str) -> Session {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        session.establish(token, Default::default()).await;
        session
    }

    #[test]
    fn test_resolve_url() {
        let config = HttpConfig::default();

        let url = config.resolve_url("auth/login").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/auth/login");

        let url = config.resolve_url("/auth/login").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/auth/login");

        let config = HttpConfig {
            base_url: "https://liferpg.example.com/api".into(),
            ..Default::default()
        };
        let url = config.resolve_url("app/tasks/3/complete").unwrap();
        assert_eq!(
            url.as_str(),
            "https://liferpg.example.com/api/app/tasks/3/complete"
        );
    }

    #[tokio::test]
    async fn test_success_unwraps_data_without_notification() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        let notifier = RecordingNotifier::default();

        let body = r#"{"code": 0, "message": "success", "data": {"token": "t"}}"#;
        let data: Option<serde_json::Value> =
            process_response(StatusCode::OK, body, &session, &notifier)
                .await
                .unwrap();

        assert_eq!(data.unwrap()["token"], "t");
        assert!(notifier.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_business_failure_notifies_once() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        let notifier = RecordingNotifier::default();

        let body = r#"{"code": 1, "message": "用户名或密码错误", "data": null}"#;
        let result: Result<Option<serde_json::Value>> =
            process_response(StatusCode::OK, body, &session, &notifier).await;

        match result {
            Err(Error::Api { code, message }) => {
                assert_eq!(code, 1);
                assert_eq!(message, "用户名或密码错误");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(
            *notifier.errors.lock().unwrap(),
            vec!["用户名或密码错误".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_business_failure_default_message() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        let notifier = RecordingNotifier::default();

        let body = r#"{"code": 7, "data": null}"#;
        let result: Result<Option<serde_json::Value>> =
            process_response(StatusCode::OK, body, &session, &notifier).await;

        assert!(matches!(result, Err(Error::Api { .. })));
        assert_eq!(*notifier.errors.lock().unwrap(), vec![messages::REQUEST_FAILED.to_owned()]);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let session = session_with_token("abc").await;
        assert!(session.is_logged_in());
        let notifier = RecordingNotifier::default();

        let result: Result<Option<serde_json::Value>> =
            process_response(StatusCode::UNAUTHORIZED, "", &session, &notifier).await;

        assert!(matches!(result, Err(Error::Unauthorized)));
        assert!(!session.is_logged_in());
        assert!(session.user_info().is_none());
        assert!(session.menus().is_empty());
        assert_eq!(
            *notifier.errors.lock().unwrap(),
            vec![messages::SESSION_EXPIRED.to_owned()]
        );
        assert_eq!(*notifier.redirects.lock().unwrap(), vec!["/login".to_owned()]);
    }

    #[tokio::test]
    async fn test_forbidden_notifies_and_keeps_session() {
        let session = session_with_token("abc").await;
        let notifier = RecordingNotifier::default();

        let result: Result<Option<serde_json::Value>> =
            process_response(StatusCode::FORBIDDEN, "", &session, &notifier).await;

        assert!(matches!(result, Err(Error::PermissionDenied)));
        assert!(session.is_logged_in());
        assert_eq!(
            *notifier.errors.lock().unwrap(),
            vec![messages::PERMISSION_DENIED.to_owned()]
        );
        assert!(notifier.redirects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_prefers_body_message() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        let notifier = RecordingNotifier::default();

        let body = r#"{"code": -1, "message": "维护中"}"#;
        let result: Result<Option<serde_json::Value>> =
            process_response(StatusCode::BAD_GATEWAY, body, &session, &notifier).await;

        match result {
            Err(Error::Server { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "维护中");
            }
            other => panic!("expected Server error, got {other:?}"),
        }
        assert_eq!(*notifier.errors.lock().unwrap(), vec!["维护中".to_owned()]);
    }

    #[tokio::test]
    async fn test_server_error_fallback_message() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        let notifier = RecordingNotifier::default();

        let result: Result<Option<serde_json::Value>> =
            process_response(StatusCode::INTERNAL_SERVER_ERROR, "oops", &session, &notifier).await;

        assert!(matches!(result, Err(Error::Server { status: 500, .. })));
        assert_eq!(*notifier.errors.lock().unwrap(), vec![messages::SERVER_ERROR.to_owned()]);
    }

    #[tokio::test]
    async fn test_null_data_is_none() {
        let session = Session::new(Arc::new(MemoryTokenStorage::new()));
        let notifier = RecordingNotifier::default();

        let body = r#"{"code": 0, "message": "更新成功", "data": null}"#;
        let data: Option<serde_json::Value> =
            process_response(StatusCode::OK, body, &session, &notifier)
                .await
                .unwrap();

        assert!(data.is_none());
        assert!(notifier.errors.lock().unwrap().is_empty());
    }
}
