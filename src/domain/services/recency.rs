// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::PostedDate;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 原始发布时间
///
/// 各个来源给出的发布时间格式不一：ISO 字符串、纯日期、Unix 秒或已解析的日期
#[derive(Debug, Clone, PartialEq)]
pub enum RawDate {
    Text(String),
    Epoch(i64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl From<&str> for RawDate {
    fn from(value: &str) -> Self {
        RawDate::Text(value.to_string())
    }
}

impl From<String> for RawDate {
    fn from(value: String) -> Self {
        RawDate::Text(value)
    }
}

impl From<i64> for RawDate {
    fn from(value: i64) -> Self {
        RawDate::Epoch(value)
    }
}

impl From<NaiveDate> for RawDate {
    fn from(value: NaiveDate) -> Self {
        RawDate::Date(value)
    }
}

impl From<NaiveDateTime> for RawDate {
    fn from(value: NaiveDateTime) -> Self {
        RawDate::DateTime(value)
    }
}

/// 日期缺失或无法解析时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndatedPolicy {
    /// 丢弃该记录
    Reject,
    /// 视为新发布的记录
    AssumeRecent,
}

/// Normalize any supported raw timestamp to a calendar date.
///
/// Time of day and zone offset are discarded; an ISO timestamp keeps the
/// calendar date written in it. Epoch seconds are interpreted in UTC.
pub fn normalize_date(raw: &RawDate) -> Option<NaiveDate> {
    match raw {
        RawDate::Text(text) => normalize_text(text),
        RawDate::Epoch(secs) => epoch_to_date(*secs),
        RawDate::Date(date) => Some(*date),
        RawDate::DateTime(datetime) => Some(datetime.date()),
    }
}

fn normalize_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<i64>().ok().and_then(epoch_to_date);
    }

    if text.contains('T') {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Some(datetime.date_naive());
        }
        return NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|datetime| datetime.date());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn epoch_to_date(secs: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(|datetime| datetime.date_naive())
}

/// Whether `raw_date` falls within `window_days` days before `reference_date`.
///
/// Missing, empty or unparsable input is never recent, and neither is a date
/// after the reference date.
pub fn is_recent(raw_date: Option<&RawDate>, reference_date: NaiveDate, window_days: i64) -> bool {
    raw_date
        .and_then(normalize_date)
        .is_some_and(|date| within_window(date, reference_date, window_days))
}

fn within_window(date: NaiveDate, reference_date: NaiveDate, window_days: i64) -> bool {
    let delta = reference_date.signed_duration_since(date).num_days();
    (0..=window_days).contains(&delta)
}

/// 发布时间窗口过滤器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyFilter {
    reference_date: NaiveDate,
    window_days: i64,
}

impl RecencyFilter {
    pub fn new(reference_date: NaiveDate, window_days: i64) -> Self {
        Self {
            reference_date,
            window_days,
        }
    }

    /// Filter anchored on the current UTC date.
    pub fn today(window_days: i64) -> Self {
        Self::new(Utc::now().date_naive(), window_days)
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Decide whether a record is kept, and with which posted date.
    ///
    /// A date that parses is checked against the window. A missing or
    /// unparsable date is resolved by `policy`.
    pub fn admit(&self, raw_date: Option<&RawDate>, policy: UndatedPolicy) -> Option<PostedDate> {
        match raw_date.and_then(normalize_date) {
            Some(date) if within_window(date, self.reference_date, self.window_days) => {
                Some(PostedDate::On(date))
            }
            Some(_) => None,
            None => match policy {
                UndatedPolicy::Reject => None,
                UndatedPolicy::AssumeRecent => Some(PostedDate::Recent),
            },
        }
    }
}
