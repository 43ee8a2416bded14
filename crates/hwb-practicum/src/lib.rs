//! Homework API adapter.
//!
//! Implements the `hwb-core` `HomeworkApi` port over the Practicum
//! `homework_statuses` endpoint.

use async_trait::async_trait;

use hwb_core::{config::Config, errors::Error, ports::HomeworkApi, Result};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    pub endpoint: String,
    token: String,
    http: reqwest::Client,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|e| Error::External(format!("reqwest client build: {e}")))?;
        Ok(Self {
            endpoint: cfg.endpoint.clone(),
            token: cfg.practicum_token.clone(),
            http,
        })
    }

    fn access_denied(&self, from_date: i64, reason: impl Into<String>) -> Error {
        Error::AccessDenied {
            endpoint: self.endpoint.clone(),
            headers: redacted_headers(),
            params: params(from_date),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value> {
        tracing::info!(
            url = %self.endpoint,
            headers = %redacted_headers(),
            params = %params(from_date),
            "requesting homework statuses"
        );

        let resp = self
            .http
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| self.access_denied(from_date, format!("request error: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(self.access_denied(from_date, format!("HTTP {status}")));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| self.access_denied(from_date, format!("body read error: {e}")))?;

        Ok(serde_json::from_str(&body)?)
    }
}

fn redacted_headers() -> String {
    r#"{"Authorization": "OAuth ***"}"#.to_string()
}

fn params(from_date: i64) -> String {
    format!(r#"{{"from_date": {from_date}}}"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::HeaderMap, http::StatusCode, routing::get, Router};
    use hwb_core::domain::ChatTarget;
    use std::{collections::HashMap, time::Duration};

    async fn homeworks(
        headers: HeaderMap,
        Query(q): Query<HashMap<String, String>>,
    ) -> (StatusCode, String) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if auth != "OAuth secret-token" {
            return (StatusCode::UNAUTHORIZED, "{}".to_string());
        }
        let from = q.get("from_date").cloned().unwrap_or_default();
        (
            StatusCode::OK,
            format!(
                r#"{{"homeworks": [{{"homework_name": "proj1", "status": "approved"}}], "current_date": {from}}}"#
            ),
        )
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/user_api/homework_statuses/")
    }

    fn client(endpoint: &str, token: &str) -> PracticumClient {
        let cfg = Config {
            practicum_token: token.to_string(),
            telegram_token: "t".to_string(),
            telegram_chat_id: ChatTarget::Id(1),
            endpoint: endpoint.to_string(),
            request_timeout: Duration::from_secs(5),
            retry_period: Duration::from_secs(600),
        };
        PracticumClient::new(&cfg).unwrap()
    }

    fn app() -> Router {
        Router::new()
            .route("/api/user_api/homework_statuses/", get(homeworks))
            .route(
                "/broken/",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
            )
            .route("/garbage/", get(|| async { "<html>not json</html>" }))
    }

    #[tokio::test]
    async fn sends_oauth_header_and_from_date() {
        let url = serve(app()).await;
        let body = client(&url, "secret-token").fetch(1234).await.unwrap();
        assert_eq!(body["current_date"], 1234);
        assert_eq!(body["homeworks"][0]["homework_name"], "proj1");
    }

    #[tokio::test]
    async fn non_ok_status_is_access_denied_without_token() {
        let url = serve(app()).await;
        let err = client(&url, "wrong-token").fetch(1).await.unwrap_err();
        match &err {
            Error::AccessDenied {
                endpoint,
                params,
                reason,
                ..
            } => {
                assert_eq!(endpoint, &url);
                assert!(params.contains("\"from_date\": 1"));
                assert!(reason.contains("401"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(!err.to_string().contains("wrong-token"));
    }

    #[tokio::test]
    async fn server_error_is_access_denied() {
        let base = serve(app()).await;
        let url = base.replace("/api/user_api/homework_statuses/", "/broken/");
        let err = client(&url, "secret-token").fetch(1).await.unwrap_err();
        assert!(matches!(err, Error::AccessDenied { ref reason, .. } if reason.contains("500")));
    }

    #[tokio::test]
    async fn invalid_json_is_parse_error() {
        let base = serve(app()).await;
        let url = base.replace("/api/user_api/homework_statuses/", "/garbage/");
        let err = client(&url, "secret-token").fetch(1).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_access_denied() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}/"), "secret-token")
            .fetch(1)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AccessDenied { .. }));
    }
}
