// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::{JobRecord, JobSourceKind};
use crate::domain::services::keyword_matcher::KeywordMatcher;
use crate::domain::services::recency::RecencyFilter;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error, Clone)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Feed parse error: {0}")]
    Xml(String),
}

/// 职位过滤条件
///
/// 所有来源共享同一套关键词与发布时间窗口
#[derive(Debug, Clone)]
pub struct JobFilter {
    pub keywords: KeywordMatcher,
    pub recency: RecencyFilter,
}

impl JobFilter {
    pub fn new(keywords: KeywordMatcher, recency: RecencyFilter) -> Self {
        Self { keywords, recency }
    }
}

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Which origin this adapter reads from
    fn kind(&self) -> JobSourceKind;

    /// Fetch, normalize and filter listings from the origin
    async fn fetch_listings(&self) -> Result<Vec<JobRecord>, SourceError>;

    /// Fetch listings, degrading any failure to an empty result
    async fn fetch(&self) -> Vec<JobRecord> {
        let source = self.kind();
        info!("Fetching from {}...", source);

        match self.fetch_listings().await {
            Ok(jobs) => {
                info!(source = %source, matched = jobs.len(), "Source fetch completed");
                jobs
            }
            Err(e) => {
                error!(source = %source, error = %e, "Source fetch failed");
                Vec::new()
            }
        }
    }
}
