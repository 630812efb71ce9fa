// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::JobRecord;
use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn start_message(started_at: NaiveDateTime) -> String {
    format!(
        "🤖 Job Bot Started\n📅 Date: {}\n⏰ Time: {}",
        format_date(started_at.date()),
        started_at.format("%H:%M:%S")
    )
}

pub fn error_message(error: &str) -> String {
    format!("⚠️ Job bot error: {}", html_escape::encode_text(error))
}

pub fn no_jobs_message(date: NaiveDate) -> String {
    format!("📭 No new matching jobs found for {}.", format_date(date))
}

/// Per-job notification. Title and company are escaped for HTML parse mode.
pub fn job_message(job: &JobRecord) -> String {
    format!(
        "💼 <b>{}</b>\n🏢 {}\n📅 {}\n🔗 {}\n🌍 Source: {}",
        html_escape::encode_text(&job.title),
        html_escape::encode_text(&job.company),
        job.posted,
        html_escape::encode_text(&job.url),
        job.source
    )
}

pub fn summary_message(elapsed: Duration, date: NaiveDate, found: usize, sent: usize) -> String {
    format!(
        "✅ Bot completed in {:.1}s\n📅 Date: {}\n📊 Found: {} jobs\n📤 Sent: {} notifications",
        elapsed.as_secs_f64(),
        format_date(date),
        found,
        sent
    )
}
