// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 职位来源标识
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JobSourceKind {
    Remotive,
    RemoteOk,
    WeWorkRemotely,
    HackerNews,
}

impl JobSourceKind {
    /// Human readable name used in logs and notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            JobSourceKind::Remotive => "Remotive",
            JobSourceKind::RemoteOk => "RemoteOK",
            JobSourceKind::WeWorkRemotely => "WeWorkRemotely",
            JobSourceKind::HackerNews => "Hacker News",
        }
    }
}

impl fmt::Display for JobSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 职位发布日期
///
/// 来源没有提供可解析的日期、但按来源策略被视为新发布时使用 `Recent`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostedDate {
    On(NaiveDate),
    Recent,
}

impl fmt::Display for PostedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostedDate::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            PostedDate::Recent => f.write_str("Recent"),
        }
    }
}

/// 职位记录
///
/// 由来源适配器在一次抓取中构建，交给通知环节消费一次后丢弃
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub url: String,
    pub source: JobSourceKind,
    pub posted: PostedDate,
}

impl JobRecord {
    /// Builds a record, or `None` when the title or url is blank.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        url: impl Into<String>,
        source: JobSourceKind,
        posted: PostedDate,
    ) -> Option<Self> {
        let title = title.into().trim().to_string();
        let url = url.into().trim().to_string();
        if title.is_empty() || url.is_empty() {
            return None;
        }

        let company = company.into().trim().to_string();
        let company = if company.is_empty() {
            "Unknown".to_string()
        } else {
            company
        };

        Some(Self {
            title,
            company,
            url,
            source,
            posted,
        })
    }
}
