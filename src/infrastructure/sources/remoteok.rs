// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::get_json;
use crate::config::settings::RemoteOkSettings;
use crate::domain::models::job_record::{JobRecord, JobSourceKind};
use crate::domain::services::recency::{RawDate, UndatedPolicy};
use crate::domain::sources::source::{JobFilter, JobSource, SourceError};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// RemoteOK 职位来源
///
/// 接口返回一个数组，第一个元素是接口说明等元数据，其余元素才是职位。
/// 发布时间取 `epoch`（Unix 秒），缺失时退回 `date` 字段。
pub struct RemoteOkSource {
    client: reqwest::Client,
    settings: RemoteOkSettings,
    filter: JobFilter,
}

impl RemoteOkSource {
    pub const UNDATED_POLICY: UndatedPolicy = UndatedPolicy::Reject;

    pub fn new(client: reqwest::Client, settings: RemoteOkSettings, filter: JobFilter) -> Self {
        Self {
            client,
            settings,
            filter,
        }
    }

    /// Filter a raw listing array. Element 0 is metadata and is always skipped.
    pub fn filter_listings(&self, listings: &[Value]) -> Vec<JobRecord> {
        listings
            .iter()
            .skip(1)
            .filter_map(|job| self.to_record(job))
            .collect()
    }

    fn to_record(&self, job: &Value) -> Option<JobRecord> {
        let position = str_field(job, "position");
        if position.is_empty() {
            return None;
        }

        if !self
            .filter
            .keywords
            .matches_any(&[position, str_field(job, "description")])
        {
            return None;
        }

        let raw_date = raw_date(job, "epoch").or_else(|| raw_date(job, "date"));
        let posted = self
            .filter
            .recency
            .admit(raw_date.as_ref(), Self::UNDATED_POLICY)?;

        JobRecord::new(
            position,
            str_field(job, "company"),
            self.resolve_url(str_field(job, "url")),
            JobSourceKind::RemoteOk,
            posted,
        )
    }

    /// Listing urls are usually path fragments such as `/remote-jobs/123`.
    fn resolve_url(&self, url: &str) -> String {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }

        match Url::parse(&self.settings.base_url).and_then(|base| base.join(url)) {
            Ok(joined) => joined.to_string(),
            Err(e) => {
                debug!(url, error = %e, "RemoteOK: could not join url onto base");
                format!("{}{}", self.settings.base_url, url)
            }
        }
    }
}

fn str_field<'a>(job: &'a Value, key: &str) -> &'a str {
    job.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn raw_date(job: &Value, key: &str) -> Option<RawDate> {
    match job.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|secs| secs as i64))
            .map(RawDate::Epoch),
        Value::String(s) if !s.trim().is_empty() => Some(RawDate::Text(s.clone())),
        _ => None,
    }
}

#[async_trait]
impl JobSource for RemoteOkSource {
    fn kind(&self) -> JobSourceKind {
        JobSourceKind::RemoteOk
    }

    async fn fetch_listings(&self) -> Result<Vec<JobRecord>, SourceError> {
        let listings: Vec<Value> = get_json(&self.client, &self.settings.url).await?;
        info!(
            total = listings.len().saturating_sub(1),
            "RemoteOK: fetched listings"
        );

        Ok(self.filter_listings(&listings))
    }
}
