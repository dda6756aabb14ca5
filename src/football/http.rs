//! HTTP client for the two API-Football endpoints the pipeline reads.

use crate::{
    cli::types::{LeagueId, Season, TeamId},
    error::{MoneyballError, Result},
    football::types::ApiEnvelope,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::time::Duration;
use tracing::{debug, warn};


/// Base path for API-Football v3.
pub const API_FOOTBALL_BASE_URL: &str = "https://v3.football.api-sports.io";

const API_FOOTBALL_HOST: &str = "v3.football.api-sports.io";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the static header set every request carries.
pub fn api_headers(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert("x-rapidapi-host", HeaderValue::from_static(API_FOOTBALL_HOST));
    let mut key = HeaderValue::from_str(api_key)?;
    key.set_sensitive(true);
    h.insert("x-rapidapi-key", key);
    Ok(h)
}

/// Thin client over API-Football. One GET per call, no retries.
///
/// Every failure (transport, HTTP status, malformed body) is logged here and
/// returned as an `Err`; callers decide whether that means "nothing to do".
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, API_FOOTBALL_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent("moneyball-etl/0.1")
            .default_headers(api_headers(api_key)?)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET `/teams?league=..&season=..`
    pub async fn fetch_teams(&self, league: LeagueId, season: Season) -> Result<ApiEnvelope> {
        let url = format!("{}/teams", self.base_url);
        let params = [
            ("league", league.to_string()),
            ("season", season.to_string()),
        ];
        self.get_envelope(&url, &params).await
    }

    /// GET `/teams/statistics?league=..&season=..&team=..`
    pub async fn fetch_team_statistics(
        &self,
        league: LeagueId,
        season: Season,
        team: TeamId,
    ) -> Result<ApiEnvelope> {
        let url = format!("{}/teams/statistics", self.base_url);
        let params = [
            ("league", league.to_string()),
            ("season", season.to_string()),
            ("team", team.to_string()),
        ];
        self.get_envelope(&url, &params).await
    }

    async fn get_envelope(&self, url: &str, params: &[(&str, String)]) -> Result<ApiEnvelope> {
        match self.send(url, params).await {
            Ok(envelope) => {
                if let Some(errors) = envelope.provider_errors() {
                    warn!(url, %errors, "API-Football reported errors");
                }
                Ok(envelope)
            }
            Err(e) => {
                warn!(url, error = %e, "API-Football request failed");
                Err(e)
            }
        }
    }

    async fn send(&self, url: &str, params: &[(&str, String)]) -> Result<ApiEnvelope> {
        debug!(url, ?params, "GET");
        let res = self.http.get(url).query(params).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(MoneyballError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = res.bytes().await?;
        let envelope = serde_json::from_slice::<ApiEnvelope>(&bytes)?;
        Ok(envelope)
    }
}
