// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{HttpSettings, DEFAULT_KEYWORDS};
use crate::domain::services::keyword_matcher::KeywordMatcher;
use crate::domain::services::recency::RecencyFilter;
use crate::domain::sources::source::JobFilter;
use crate::utils::http::build_client;
use chrono::NaiveDate;

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

/// Default keywords, three day window ending 2024-01-10.
pub fn filter() -> JobFilter {
    JobFilter::new(
        KeywordMatcher::new(DEFAULT_KEYWORDS),
        RecencyFilter::new(reference_date(), 3),
    )
}

pub fn client() -> reqwest::Client {
    build_client(&HttpSettings {
        timeout_secs: 5,
        user_agent: "jobhound-test".to_string(),
    })
    .unwrap()
}

/// Epoch seconds for noon UTC on the given day of January 2024.
pub fn january_noon(day: u32) -> i64 {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}
