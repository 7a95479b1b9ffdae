//! # Live Status Lookup
//!
//! Asks the utility's status endpoint which load-shedding stage is active.
//!
//! The endpoint answers with a bare integer:
//! - `99` means the data is unavailable
//! - otherwise the active stage is `status - 1`, and stage 0 means no shedding

use crate::error::AppError;
use loadsched_core::Stage;
use std::time::Duration;

/// Public status endpoint queried when no stage is given.
pub const DEFAULT_STATUS_URL: &str = "http://loadshedding.eskom.co.za/LoadShedding/getstatus";

/// Status code meaning "data unavailable".
pub const STATUS_UNAVAILABLE: i64 = 99;

/// Load-shedding state reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveStage {
    /// No load shedding in progress.
    NoShedding,
    /// Shedding at the given stage (always >= 1).
    Shedding(Stage),
}

impl LiveStage {
    /// Decode a raw status code.
    pub fn from_status_code(code: i64) -> Result<Self, AppError> {
        match code {
            STATUS_UNAVAILABLE => Err(AppError::StatusUnavailable),
            1 => Ok(Self::NoShedding),
            n if n > 1 => u32::try_from(n - 1)
                .map(|stage| Self::Shedding(Stage(stage)))
                .map_err(|_| AppError::InvalidStatus(format!("status code {n} out of range"))),
            n => Err(AppError::InvalidStatus(format!("status code {n} out of range"))),
        }
    }

    /// Active stage number; 0 when nothing is being shed.
    #[must_use]
    pub fn stage(self) -> Stage {
        match self {
            Self::NoShedding => Stage::NONE,
            Self::Shedding(stage) => stage,
        }
    }
}

/// Decode a status response body.
pub fn parse_status_body(body: &str) -> Result<LiveStage, AppError> {
    let trimmed = body.trim();
    let code: i64 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidStatus(format!("expected an integer, got {trimmed:?}")))?;
    LiveStage::from_status_code(code)
}

/// HTTP client for the status endpoint.
#[derive(Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    url: String,
}

impl StatusClient {
    /// Create a client for `url` with a per-request `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::NetworkError(e.to_string()))?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// GET the status endpoint once and decode the answer.
    pub async fn fetch_stage(&self) -> Result<LiveStage, AppError> {
        tracing::info!(url = %self.url, "querying load shedding status");

        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("{}: {e}", self.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::NetworkError(format!(
                "{} returned HTTP {}",
                self.url,
                status.as_u16()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("{}: {e}", self.url)))?;

        let live = parse_status_body(&body)?;
        tracing::debug!(stage = %live.stage(), "status decoded");
        Ok(live)
    }
}

// =============================================================================
// TESTS
// =============================================================================
