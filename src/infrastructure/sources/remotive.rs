// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::get_json;
use crate::config::settings::RemotiveSettings;
use crate::domain::models::job_record::{JobRecord, JobSourceKind};
use crate::domain::services::recency::{RawDate, UndatedPolicy};
use crate::domain::sources::source::{JobFilter, JobSource, SourceError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

/// Remotive 接口响应
#[derive(Debug, Deserialize)]
pub struct RemotiveResponse {
    #[serde(default)]
    pub jobs: Vec<RemotiveJob>,
}

/// Remotive 单个职位
#[derive(Debug, Deserialize)]
pub struct RemotiveJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub url: Option<String>,
    pub publication_date: Option<String>,
}

/// Remotive 职位来源
///
/// 一次请求返回全部远程职位，日期缺失或无法解析的职位直接丢弃
pub struct RemotiveSource {
    client: reqwest::Client,
    settings: RemotiveSettings,
    filter: JobFilter,
}

impl RemotiveSource {
    pub const UNDATED_POLICY: UndatedPolicy = UndatedPolicy::Reject;

    pub fn new(client: reqwest::Client, settings: RemotiveSettings, filter: JobFilter) -> Self {
        Self {
            client,
            settings,
            filter,
        }
    }

    pub fn filter_jobs(&self, jobs: Vec<RemotiveJob>) -> Vec<JobRecord> {
        jobs.into_iter()
            .filter_map(|job| self.to_record(job))
            .collect()
    }

    fn to_record(&self, job: RemotiveJob) -> Option<JobRecord> {
        let title = job.title.unwrap_or_default();
        let description = job.description.unwrap_or_default();
        if !self
            .filter
            .keywords
            .matches_any(&[title.as_str(), description.as_str()])
        {
            return None;
        }

        let raw_date = job.publication_date.map(RawDate::Text);
        let posted = self
            .filter
            .recency
            .admit(raw_date.as_ref(), Self::UNDATED_POLICY)?;

        JobRecord::new(
            title,
            job.company_name.unwrap_or_default(),
            job.url.unwrap_or_default(),
            JobSourceKind::Remotive,
            posted,
        )
    }
}

#[async_trait]
impl JobSource for RemotiveSource {
    fn kind(&self) -> JobSourceKind {
        JobSourceKind::Remotive
    }

    async fn fetch_listings(&self) -> Result<Vec<JobRecord>, SourceError> {
        let response: RemotiveResponse = get_json(&self.client, &self.settings.url).await?;
        info!(total = response.jobs.len(), "Remotive: fetched listings");

        Ok(self.filter_jobs(response.jobs))
    }
}
