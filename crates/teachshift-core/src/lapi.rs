//! Client for the LAPI scheduling service.
//!
//! Three endpoints are used:
//! - `POST Account/LogOn` issues the bearer token
//! - `GET Semester/Active` returns the current semester id
//! - `GET Schedule/GetJobByAssistant` lists an assistant's jobs for a semester

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::error::SourceError;
use crate::session::Session;

pub const DEFAULT_BASE_URL: &str = "https://bluejack.binus.ac.id/lapi/api";
pub const DEFAULT_MODE: &str = "current";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Account used to obtain the bearer token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity + term + mode of a job listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub username: String,
    pub semester_id: String,
    pub mode: String,
}

/// Where job lists come from.
pub trait JobSource: Send + Sync {
    /// Id of the semester jobs should be listed for.
    fn active_semester(&self) -> impl Future<Output = Result<String, SourceError>> + Send;

    /// Teaching jobs for `query`, in the order the source returns them.
    fn fetch_jobs(
        &self,
        query: &JobQuery,
    ) -> impl Future<Output = Result<Vec<Session>, SourceError>> + Send;
}

#[derive(Serialize)]
struct LogOnRequest<'a> {
    #[serde(rename = "Username")]
    username: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
}

#[derive(Deserialize)]
struct LogOnResponse {
    #[serde(
        rename = "AccessToken",
        alias = "accessToken",
        alias = "access_token",
        default
    )]
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct SemesterResponse {
    #[serde(rename = "SemesterId", alias = "semesterId", default)]
    semester_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LapiClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
}

impl LapiClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        // endpoints are joined relative to the base, which needs a trailing slash
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        Self::new(
            &config.lapi.base_url,
            config.credentials(),
            Duration::from_secs(config.lapi.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        Ok(self.base_url.join(path)?)
    }

    /// Log on and return the access token.
    pub async fn bearer_token(&self) -> Result<String, SourceError> {
        if !self.credentials.is_complete() {
            return Err(SourceError::Auth("credentials not configured".into()));
        }

        let request = LogOnRequest {
            username: &self.credentials.username,
            password: &self.credentials.password,
        };
        let response = self
            .http
            .post(self.endpoint("Account/LogOn")?)
            .json(&request)
            .send()
            .await?;
        let body = success_body(response).await.map_err(|e| match e {
            SourceError::Status { status, body } => {
                SourceError::Auth(format!("HTTP {status}: {body}"))
            }
            other => other,
        })?;

        let parsed: LogOnResponse = serde_json::from_str(&body)?;
        parsed
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| SourceError::Auth("missing access token in response".into()))
    }

    /// Every job of the assistant, unfiltered.
    pub async fn jobs_by_assistant(&self, query: &JobQuery) -> Result<Vec<Session>, SourceError> {
        let mut url = self.endpoint("Schedule/GetJobByAssistant")?;
        url.query_pairs_mut()
            .append_pair("username", &query.username)
            .append_pair("semesterId", &query.semester_id)
            .append_pair("mode", &query.mode);

        let token = self.bearer_token().await?;
        debug!(%url, "fetching jobs");
        let response = self.http.get(url).bearer_auth(token).send().await?;
        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl JobSource for LapiClient {
    async fn active_semester(&self) -> Result<String, SourceError> {
        let response = self.http.get(self.endpoint("Semester/Active")?).send().await?;
        let body = success_body(response).await?;
        let parsed: SemesterResponse = serde_json::from_str(&body)?;
        parsed
            .semester_id
            .filter(|id| !id.is_empty())
            .ok_or(SourceError::MissingSemester)
    }

    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Session>, SourceError> {
        let jobs = self.jobs_by_assistant(query).await?;
        let total = jobs.len();
        let teaching: Vec<Session> = jobs.into_iter().filter(Session::is_teaching).collect();
        info!(
            username = %query.username,
            total,
            teaching = teaching.len(),
            "fetched jobs"
        );
        Ok(teaching)
    }
}

/// Body of a 2xx response, or a [`SourceError::Status`] carrying the body.
async fn success_body(response: Response) -> Result<String, SourceError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(SourceError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> LapiClient {
        LapiClient::new(
            base,
            Credentials {
                username: "KA24-1".into(),
                password: "secret".into(),
            },
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let c = client("https://example.com/lapi/api");
        assert_eq!(
            c.endpoint("Semester/Active").unwrap().as_str(),
            "https://example.com/lapi/api/Semester/Active"
        );
        let c = client("https://example.com/lapi/api/");
        assert_eq!(
            c.endpoint("Account/LogOn").unwrap().as_str(),
            "https://example.com/lapi/api/Account/LogOn"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = LapiClient::new("not a url", Credentials::default(), Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, SourceError::InvalidUrl(_)));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            username: "KA24-1".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{creds:?}");
        assert!(printed.contains("KA24-1"));
        assert!(!printed.contains("hunter2"));
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_any_request() {
        let c = LapiClient::new(
            "http://127.0.0.1:9",
            Credentials::default(),
            Duration::from_secs(1),
        )
        .unwrap();
        let err = c.bearer_token().await.unwrap_err();
        assert!(matches!(err, SourceError::Auth(_)));
    }
}
