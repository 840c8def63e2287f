use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{DataSource, RawScore, ScoreSubmission};
use crate::config::JuryConfig;
use crate::error::{Error, Result};
use crate::record::{PosterRecord, ScoreRecord};

/// Blocking JSON client for the judging REST endpoints
#[derive(Clone)]
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent: ureq::Agent = config.into();

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &JuryConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let mut response = self.agent.get(&url).call().map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            Error::SourceUnavailable(format!("GET {}: {}", endpoint, e))
        })?;

        response.body_mut().read_json::<T>().map_err(|e| {
            warn!("GET {} returned an unreadable body: {}", url, e);
            Error::SourceUnavailable(format!("GET {}: invalid response: {}", endpoint, e))
        })
    }
}

impl DataSource for ApiClient {
    fn fetch_posters(&self) -> Result<Vec<PosterRecord>> {
        let posters: Vec<PosterRecord> = self.get_json("api/posters")?;
        info!("Fetched {} poster(s)", posters.len());
        Ok(posters)
    }

    fn fetch_scores(&self) -> Result<Vec<ScoreRecord>> {
        let scores: Vec<ScoreRecord> = self.get_json("api/scores")?;
        info!("Fetched {} score(s)", scores.len());
        Ok(scores)
    }

    fn fetch_raw_scores(&self) -> Result<Vec<RawScore>> {
        let scores: Vec<RawScore> = self.get_json("api/scores")?;
        info!("Fetched {} raw score(s)", scores.len());
        Ok(scores)
    }

    fn fetch_judges(&self) -> Result<Vec<String>> {
        self.get_json("api/judges")
    }

    fn submit_score(&self, submission: &ScoreSubmission) -> Result<()> {
        submission.validate()?;

        let url = self.url("api/scores");
        info!(
            "Submitting score from {} for {}",
            submission.judge, submission.poster_title
        );
        self.agent
            .post(&url)
            .send_json(submission)
            .map_err(|e| {
                warn!("POST {} failed: {}", url, e);
                Error::SourceUnavailable(format!("POST api/scores: {}", e))
            })?;
        Ok(())
    }
}
