//! GitHub REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{DirectoryApi, Member, PublicKey, Team};
use crate::error::{ApiError, ConfigError, Result};

/// GitHub API base URL
pub const API_BASE_URL: &str = "https://api.github.com";

/// REST API version pinned on every request
const API_VERSION: &str = "2022-11-28";

/// GitHub API client authenticated with a personal access token
pub struct GitHubClient {
    http: HttpClient,
    base_url: Url,
}

impl GitHubClient {
    /// Create a new client against an API root, normally [`API_BASE_URL`]
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::Invalid(format!("API URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!("API URL '{}' cannot hold a path", base_url)).into());
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            ConfigError::Invalid("access token contains characters not allowed in a header".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(concat!("teamkeys/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Append path segments to the API root, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Issue an authenticated GET and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments);
        let path = url.path().to_string();
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
                let data = serde_json::from_str(&body).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|body| !body.is_empty())
                    .unwrap_or(path);
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl DirectoryApi for GitHubClient {
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.get(&["orgs", org, "teams"]).await
    }

    async fn list_team_members(&self, org: &str, team: &Team) -> Result<Vec<Member>> {
        self.get(&["orgs", org, "teams", team.slug.as_str(), "members"]).await
    }

    async fn list_user_keys(&self, login: &str) -> Result<Vec<PublicKey>> {
        self.get(&["users", login, "keys"]).await
    }
}
