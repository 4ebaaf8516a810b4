//! Backend abstraction and implementations
//!
//! Provides the [`ReportBackend`] trait and two implementations:
//! - [`HttpBackend`]: the real service over HTTP/JSON
//! - [`MockBackend`]: canned in-process responses for demos and tests
//!
//! ## Endpoints
//!
//! - `POST {base_url}/analyze`: body [`UserSubmission`], returns [`AssessmentResult`]
//! - `GET  {base_url}/dashboard-data`: returns [`DashboardSummary`]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::model::{
    AgeDistribution, AssessmentResult, DashboardSummary, RiskCorrelation, Scores,
    SmokerDistribution, UserSubmission,
};
use crate::ReportError;

/// Trait for the scoring/aggregation service.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across spawned request tasks via `Arc<dyn ReportBackend>`.
#[async_trait]
pub trait ReportBackend: Send + Sync {
    /// Scores one submission.
    async fn analyze(&self, submission: &UserSubmission) -> Result<AssessmentResult, ReportError>;

    /// Fetches the pre-computed aggregate statistics.
    async fn dashboard_data(&self) -> Result<DashboardSummary, ReportError>;
}

// ============================================================================
// HTTP Backend
// ============================================================================

/// Default backend location when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP/JSON client for the real backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpBackend {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// No request timeout is applied unless [`with_timeout`](Self::with_timeout)
    /// is called.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Build from the `[backend]` config section.
    pub fn from_config(config: &BackendConfig) -> Self {
        let backend = Self::new(config.base_url.clone());
        match config.timeout_ms {
            Some(ms) => backend.with_timeout(Duration::from_millis(ms)),
            None => backend,
        }
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ReportError> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ReportError::Transport(format!("{endpoint}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, status = status.as_u16(), "backend returned error status");
            return Err(ReportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ReportError::Transport(format!("{endpoint}: body read failed: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ReportError::Decode(format!("{endpoint}: {e}")))
    }
}

#[async_trait]
impl ReportBackend for HttpBackend {
    async fn analyze(&self, submission: &UserSubmission) -> Result<AssessmentResult, ReportError> {
        let url = self.endpoint("/analyze");
        debug!(url = %url, "posting submission");
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(submission);
        self.send(request, "/analyze").await
    }

    async fn dashboard_data(&self) -> Result<DashboardSummary, ReportError> {
        let url = self.endpoint("/dashboard-data");
        debug!(url = %url, "fetching dashboard summary");
        let request = self.client.get(&url);
        self.send(request, "/dashboard-data").await
    }
}

// ============================================================================
// Mock Backend
// ============================================================================

/// In-process backend returning fixed data.
///
/// Used by `--mock` and by tests. It never scores anything: every
/// submission receives the same configured result.
#[derive(Debug)]
pub struct MockBackend {
    assessment: AssessmentResult,
    summary: DashboardSummary,
    failure: Option<String>,
    delay: Duration,
    analyze_calls: AtomicUsize,
    dashboard_calls: AtomicUsize,
}

impl MockBackend {
    /// Creates a mock with the built-in sample data and a short delay.
    pub fn new() -> Self {
        Self {
            assessment: sample_assessment(),
            summary: sample_summary(),
            failure: None,
            delay: Duration::from_millis(600),
            analyze_calls: AtomicUsize::new(0),
            dashboard_calls: AtomicUsize::new(0),
        }
    }

    /// Returns `result` from every `analyze` call.
    pub fn with_assessment(mut self, result: AssessmentResult) -> Self {
        self.assessment = result;
        self
    }

    /// Returns `summary` from every `dashboard_data` call.
    pub fn with_summary(mut self, summary: DashboardSummary) -> Self {
        self.summary = summary;
        self
    }

    /// Makes every call fail with a transport error carrying `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Simulated response latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of `analyze` calls so far.
    pub fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::Relaxed)
    }

    /// Number of `dashboard_data` calls so far.
    pub fn dashboard_calls(&self) -> usize {
        self.dashboard_calls.load(Ordering::Relaxed)
    }

    async fn respond<T: Clone>(&self, value: &T) -> Result<T, ReportError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.failure {
            Some(reason) => Err(ReportError::Transport(reason.clone())),
            None => Ok(value.clone()),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportBackend for MockBackend {
    async fn analyze(&self, submission: &UserSubmission) -> Result<AssessmentResult, ReportError> {
        self.analyze_calls.fetch_add(1, Ordering::Relaxed);
        debug!(name = %submission.name, "mock analyze");
        self.respond(&self.assessment).await
    }

    async fn dashboard_data(&self) -> Result<DashboardSummary, ReportError> {
        self.dashboard_calls.fetch_add(1, Ordering::Relaxed);
        self.respond(&self.summary).await
    }
}

fn sample_assessment() -> AssessmentResult {
    AssessmentResult {
        scores: Scores {
            metabolic: 58.4,
            hypertension: 46.0,
            diabetes: 52.5,
        },
        factors: vec!["높은 BMI 지수".to_string(), "높은 공복 혈당".to_string()],
        recommendations: vec![
            "**혈당 관리:** 정제 탄수화물(흰빵, 설탕) 대신 통곡물과 섬유질 위주의 식단을 구성하세요."
                .to_string(),
            "**체중 관리:** 주 3회, 30분 이상의 유산소 운동(빠르게 걷기, 조깅)을 시작해 보세요."
                .to_string(),
        ],
    }
}

fn sample_summary() -> DashboardSummary {
    DashboardSummary {
        total_users: 12,
        avg_metabolic_score: 41.7,
        avg_age: 43.5,
        age_dist: AgeDistribution {
            labels: ["20대 이하", "30대", "40대", "50대", "60대 이상"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data: vec![2.0, 3.0, 4.0, 2.0, 1.0],
        },
        smoker_dist: SmokerDistribution {
            non_smokers: 8,
            smokers: 4,
        },
        risk_correlation: RiskCorrelation {
            bmi: vec![
                21.4, 23.0, 24.8, 26.1, 27.5, 28.9, 30.2, 22.2, 25.5, 31.8, 19.9, 27.0,
            ],
            metabolic_score: vec![
                12.0, 20.5, 31.0, 44.2, 52.0, 63.5, 78.0, 18.0, 39.5, 88.0, 8.0, 47.5,
            ],
        },
    }
}
