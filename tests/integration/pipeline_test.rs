// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::*;
use jobhound::application::pipeline::RunOutcome;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>We Work Remotely</title>
    <item>
      <title>Acme Corp: Python Engineer</title>
      <description><![CDATA[<p>FastAPI services</p>]]></description>
      <pubDate>Tue, 09 Jan 2024 10:00:00 +0000</pubDate>
      <link>https://weworkremotely.com/remote-jobs/acme-python</link>
    </item>
  </channel>
</rss>"#;

#[tokio::test]
async fn test_end_to_end_sources_in_fixed_order() {
    let server = MockServer::start().await;
    mount_telegram(&server).await;

    mount_json(
        &server,
        "/remotive/api/remote-jobs",
        json!({
            "jobs": [{
                "title": "Senior Python Developer",
                "company_name": "Remote & Co",
                "url": "https://remotive.com/remote-jobs/1",
                "description": "Django",
                "publication_date": "2024-01-09T08:00:00"
            }]
        }),
    )
    .await;
    mount_json(
        &server,
        "/remoteok/api",
        json!([
            { "legal": "metadata" },
            {
                "position": "Backend Engineer",
                "company": "OK Inc",
                "epoch": january_noon(10),
                "url": "/remote-jobs/7"
            }
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/wwr/remote-jobs.rss"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;
    mount_json(&server, "/hn/v0/jobstories.json", json!([99])).await;
    mount_json(
        &server,
        "/hn/v0/item/99.json",
        json!({ "id": 99, "title": "Startup hiring a Software Engineer", "time": january_noon(8) }),
    )
    .await;

    let settings = settings_for(&server, true);
    let summary = pipeline_for(&settings).run().await.unwrap();

    assert_eq!(summary.outcome, RunOutcome::Delivered);
    assert_eq!(summary.total_found, 4);
    assert_eq!(summary.attempted, 4);
    assert_eq!(summary.delivered, 4);

    let messages = sent_messages(&server).await;
    assert_eq!(messages.len(), 5);
    assert!(messages[0].contains("Senior Python Developer"));
    assert!(messages[0].contains("🏢 Remote &amp; Co"));
    assert!(messages[0].contains("📅 2024-01-09"));
    assert!(messages[0].contains("Source: Remotive"));
    assert!(messages[1].contains("https://remoteok.io/remote-jobs/7"));
    assert!(messages[1].contains("Source: RemoteOK"));
    assert!(messages[2].contains("🏢 Acme Corp"));
    assert!(messages[2].contains("Source: WeWorkRemotely"));
    assert!(messages[3].contains("https://news.ycombinator.com/item?id=99"));
    assert!(messages[3].contains("Source: Hacker News"));
    assert!(messages[4].contains("📊 Found: 4 jobs"));
    assert!(messages[4].contains("📤 Sent: 4 notifications"));
}

#[tokio::test]
async fn test_no_jobs_sends_single_message() {
    let server = MockServer::start().await;
    mount_telegram(&server).await;
    mount_empty_sources(&server).await;

    let settings = settings_for(&server, true);
    let summary = pipeline_for(&settings).run().await.unwrap();

    assert_eq!(summary.outcome, RunOutcome::NoJobs);
    let messages = sent_messages(&server).await;
    assert_eq!(messages, vec!["📭 No new matching jobs found for 2024-01-10.".to_string()]);
}

#[tokio::test]
async fn test_start_notification_when_enabled() {
    let server = MockServer::start().await;
    mount_telegram(&server).await;
    mount_empty_sources(&server).await;

    let mut settings = settings_for(&server, true);
    settings.pipeline.notify_on_start = true;
    pipeline_for(&settings).run().await.unwrap();

    let messages = sent_messages(&server).await;
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("🤖 Job Bot Started"));
    assert!(messages[1].starts_with("📭"));
}

#[tokio::test]
async fn test_failing_sources_do_not_abort_run() {
    let server = MockServer::start().await;
    mount_telegram(&server).await;
    mount_status(&server, "/remotive/api/remote-jobs", 500).await;
    mount_status(&server, "/remoteok/api", 403).await;
    mount_status(&server, "/wwr/remote-jobs.rss", 404).await;
    mount_json(&server, "/hn/v0/jobstories.json", json!([5])).await;
    mount_json(
        &server,
        "/hn/v0/item/5.json",
        json!({ "id": 5, "title": "Hiring Python folks", "time": january_noon(10) }),
    )
    .await;

    let settings = settings_for(&server, true);
    let summary = pipeline_for(&settings).run().await.unwrap();

    assert_eq!(summary.total_found, 1);
    assert_eq!(summary.delivered, 1);
    assert_eq!(sent_messages(&server).await.len(), 2);
}

#[tokio::test]
async fn test_missing_credentials_still_completes() {
    let server = MockServer::start().await;
    // Mounted first so it takes precedence over the empty Remotive mock.
    mount_json(
        &server,
        "/remotive/api/remote-jobs",
        json!({
            "jobs": [{
                "title": "Backend Engineer",
                "company_name": "NoCreds",
                "url": "https://remotive.com/remote-jobs/2",
                "publication_date": "2024-01-10T00:00:00"
            }]
        }),
    )
    .await;
    mount_empty_sources(&server).await;

    let settings = settings_for(&server, false);
    let summary = pipeline_for(&settings).run().await.unwrap();

    assert_eq!(summary.outcome, RunOutcome::Delivered);
    assert_eq!(summary.total_found, 1);
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.delivered, 0);
    assert!(sent_messages(&server).await.is_empty());
}

#[tokio::test]
async fn test_limit_and_disabled_sources_from_config() {
    let server = MockServer::start().await;
    mount_telegram(&server).await;

    let jobs: Vec<_> = (0..6)
        .map(|i| {
            json!({
                "title": format!("Python role {}", i),
                "company_name": "Many",
                "url": format!("https://remotive.com/remote-jobs/{}", i),
                "publication_date": "2024-01-10T00:00:00"
            })
        })
        .collect();
    mount_json(&server, "/remotive/api/remote-jobs", json!({ "jobs": jobs })).await;

    let mut settings = settings_for(&server, true);
    settings.sources.remoteok.enabled = false;
    settings.sources.weworkremotely.enabled = false;
    settings.sources.hacker_news.enabled = false;
    settings.pipeline.max_notifications = 4;
    let summary = pipeline_for(&settings).run().await.unwrap();

    assert_eq!(summary.total_found, 6);
    assert_eq!(summary.attempted, 4);

    let messages = sent_messages(&server).await;
    assert_eq!(messages.len(), 5);
    assert!(messages[0].contains("Python role 0"));
    assert!(messages[3].contains("Python role 3"));
    assert!(messages[4].contains("📊 Found: 6 jobs"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| !r.url.path().starts_with("/remoteok") && !r.url.path().starts_with("/hn")));
}
