// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use jobhound::application::pipeline::JobPipeline;
use jobhound::config::settings::Settings;
use jobhound::domain::services::keyword_matcher::KeywordMatcher;
use jobhound::domain::services::recency::RecencyFilter;
use jobhound::domain::sources::source::JobFilter;
use jobhound::infrastructure::notifier::telegram::TelegramNotifier;
use jobhound::infrastructure::sources::build_sources;
use jobhound::utils::{http, telemetry};
use std::sync::Arc;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点：加载配置、执行一次完整的抓取与通知流程后退出
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env for local development
    let dotenv = dotenvy::dotenv();

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobhound...");
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to load .env file");
        }
    }

    // 3. Load configuration
    let settings = Settings::new()?;
    info!(
        telegram_token = settings.telegram.token.is_some(),
        chat_id = settings.telegram.chat_id.is_some(),
        "Configuration loaded"
    );

    // 4. Initialize components
    let client = http::build_client(&settings.http)?;
    let filter = JobFilter::new(
        KeywordMatcher::new(&settings.filter.keywords),
        RecencyFilter::today(settings.filter.recency_window_days),
    );
    let sources = build_sources(&settings.sources, &client, &filter);
    info!(sources = sources.len(), "Job sources initialized");

    let notifier = Arc::new(TelegramNotifier::new(client, &settings.telegram));
    if !notifier.has_credentials() {
        warn!("Telegram credentials missing, notifications will not be delivered");
    }

    // 5. Run one pass
    let pipeline = JobPipeline::new(
        sources,
        notifier,
        settings.pipeline.clone(),
        filter.recency.reference_date(),
    );
    let summary = pipeline.run().await?;
    info!(
        outcome = ?summary.outcome,
        total_found = summary.total_found,
        delivered = summary.delivered,
        "Job check finished"
    );

    Ok(())
}
