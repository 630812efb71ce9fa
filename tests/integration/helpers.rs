// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use jobhound::application::pipeline::JobPipeline;
use jobhound::config::settings::Settings;
use jobhound::domain::services::keyword_matcher::KeywordMatcher;
use jobhound::domain::services::recency::RecencyFilter;
use jobhound::domain::sources::source::JobFilter;
use jobhound::infrastructure::notifier::telegram::TelegramNotifier;
use jobhound::infrastructure::sources::build_sources;
use jobhound::utils::http::build_client;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "integration-token";
pub const SEND_PATH: &str = "/botintegration-token/sendMessage";

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

pub fn january_noon(day: u32) -> i64 {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

/// Load settings from a temporary file pointing every endpoint at `server`.
pub fn settings_for(server: &MockServer, with_credentials: bool) -> Settings {
    let uri = server.uri();
    let credentials = if with_credentials {
        format!("token = \"{}\"\nchat_id = \"-100200\"\n", TOKEN)
    } else {
        String::new()
    };

    let contents = format!(
        r#"
[telegram]
api_base_url = "{uri}"
{credentials}

[pipeline]
send_delay_ms = 0
notify_on_start = false

[http]
timeout_secs = 5

[sources.remotive]
url = "{uri}/remotive/api/remote-jobs"

[sources.remoteok]
url = "{uri}/remoteok/api"
base_url = "https://remoteok.io"

[sources.weworkremotely]
url = "{uri}/wwr/remote-jobs.rss"

[sources.hacker_news]
api_base_url = "{uri}/hn/v0"
"#
    );

    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    Settings::from_file(file.path()).unwrap()
}

/// Wire the pipeline exactly as the binary does, with a fixed reference date.
pub fn pipeline_for(settings: &Settings) -> JobPipeline {
    let client = build_client(&settings.http).unwrap();
    let filter = JobFilter::new(
        KeywordMatcher::new(&settings.filter.keywords),
        RecencyFilter::new(reference_date(), settings.filter.recency_window_days),
    );
    let sources = build_sources(&settings.sources, &client, &filter);
    let notifier = Arc::new(TelegramNotifier::new(client, &settings.telegram));

    JobPipeline::new(sources, notifier, settings.pipeline.clone(), reference_date())
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub async fn mount_telegram(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(server)
        .await;
}

pub async fn mount_empty_sources(server: &MockServer) {
    mount_json(server, "/remotive/api/remote-jobs", json!({ "jobs": [] })).await;
    mount_json(server, "/remoteok/api", json!([{ "legal": "metadata" }])).await;
    Mock::given(method("GET"))
        .and(path("/wwr/remote-jobs.rss"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<rss><channel></channel></rss>"),
        )
        .mount(server)
        .await;
    mount_json(server, "/hn/v0/jobstories.json", json!([])).await;
}

/// Decoded `text` fields of every message posted to Telegram, in order.
pub async fn sent_messages(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == SEND_PATH)
        .filter_map(|request| {
            url::form_urlencoded::parse(&request.body)
                .find(|(key, _)| key == "text")
                .map(|(_, value)| value.into_owned())
        })
        .collect()
}
