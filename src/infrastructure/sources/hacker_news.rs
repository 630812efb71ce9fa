// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::get_json;
use crate::config::settings::HackerNewsSettings;
use crate::domain::models::job_record::{JobRecord, JobSourceKind};
use crate::domain::services::recency::{RawDate, UndatedPolicy};
use crate::domain::sources::source::{JobFilter, JobSource, SourceError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

const PLACEHOLDER_COMPANY: &str = "Hacker News";

/// Hacker News 帖子
#[derive(Debug, Clone, Deserialize)]
pub struct HackerNewsItem {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub time: Option<i64>,
}

/// Hacker News 职位来源
///
/// 先获取职位帖子 ID 列表，再逐个请求帖子详情（N+1 次请求，按顺序执行）。
/// 很多帖子没有时间戳，缺失时视为新发布。
pub struct HackerNewsSource {
    client: reqwest::Client,
    settings: HackerNewsSettings,
    filter: JobFilter,
}

impl HackerNewsSource {
    pub const UNDATED_POLICY: UndatedPolicy = UndatedPolicy::AssumeRecent;

    pub fn new(client: reqwest::Client, settings: HackerNewsSettings, filter: JobFilter) -> Self {
        Self {
            client,
            settings,
            filter,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.settings.api_base_url.trim_end_matches('/'), path)
    }

    async fn fetch_item(&self, id: u64) -> Result<Option<HackerNewsItem>, SourceError> {
        get_json(&self.client, &self.api_url(&format!("item/{}.json", id))).await
    }

    /// Map one item to a record. Items without a title are skipped.
    pub fn to_record(&self, id: u64, item: HackerNewsItem) -> Option<JobRecord> {
        let title = item.title.filter(|t| !t.trim().is_empty())?;

        let raw_date = item.time.map(RawDate::Epoch);
        let posted = self
            .filter
            .recency
            .admit(raw_date.as_ref(), Self::UNDATED_POLICY)?;

        let body = item
            .text
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| title.clone());
        if !self.filter.keywords.matches_any(&[title.as_str(), body.as_str()]) {
            return None;
        }

        let url = item
            .url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| format!("{}?id={}", self.settings.item_base_url, id));

        JobRecord::new(title, PLACEHOLDER_COMPANY, url, JobSourceKind::HackerNews, posted)
    }
}

#[async_trait]
impl JobSource for HackerNewsSource {
    fn kind(&self) -> JobSourceKind {
        JobSourceKind::HackerNews
    }

    async fn fetch_listings(&self) -> Result<Vec<JobRecord>, SourceError> {
        let mut ids: Vec<u64> = get_json(&self.client, &self.api_url("jobstories.json")).await?;
        ids.truncate(self.settings.max_items);
        info!(checking = ids.len(), "Hacker News: fetched job story ids");

        let mut results = Vec::new();
        for id in ids {
            let item = match self.fetch_item(id).await {
                Ok(Some(item)) => item,
                Ok(None) => {
                    debug!(id, "Hacker News: item is null, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(id, error = %e, "Hacker News: failed to fetch item, skipping");
                    continue;
                }
            };

            if let Some(record) = self.to_record(id, item) {
                results.push(record);
            }
        }

        Ok(results)
    }
}
