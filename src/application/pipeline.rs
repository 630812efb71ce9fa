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

use crate::application::messages;
use crate::config::settings::PipelineSettings;
use crate::domain::models::job_record::{JobRecord, JobSourceKind};
use crate::domain::services::notifier::Notifier;
use crate::domain::sources::source::JobSource;
use chrono::{NaiveDate, Utc};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{origin} adapter failed: {message}")]
    SourceFailed {
        origin: JobSourceKind,
        message: String,
    },
}

/// 运行结果类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// 没有匹配的职位，只发送了一条提示
    NoJobs,
    /// 已发送职位通知和汇总
    Delivered,
}

/// 单次运行汇总
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    /// 截断前匹配的职位总数
    pub total_found: usize,
    /// 尝试发送的职位通知数
    pub attempted: usize,
    /// 成功送达的职位通知数
    pub delivered: usize,
    pub elapsed: Duration,
}

/// 职位抓取流水线
///
/// 按固定顺序依次调用各个来源，拼接结果、截断并逐条发送通知
pub struct JobPipeline {
    sources: Vec<Arc<dyn JobSource>>,
    notifier: Arc<dyn Notifier>,
    settings: PipelineSettings,
    report_date: NaiveDate,
}

impl JobPipeline {
    pub fn new(
        sources: Vec<Arc<dyn JobSource>>,
        notifier: Arc<dyn Notifier>,
        settings: PipelineSettings,
        report_date: NaiveDate,
    ) -> Self {
        Self {
            sources,
            notifier,
            settings,
            report_date,
        }
    }

    /// Run one full pass: fetch every source, then notify.
    ///
    /// Returns an error only when a source adapter breaks its own contract;
    /// in that case an error notification has already been attempted and no
    /// job notifications were sent.
    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        let started = Instant::now();
        let started_at = Utc::now().naive_utc();
        info!(started_at = %started_at, date = %self.report_date, "Started job check");

        if self.settings.notify_on_start {
            self.notifier.send(&messages::start_message(started_at)).await;
        }

        let all_jobs = match self.collect().await {
            Ok(jobs) => jobs,
            Err(e) => {
                error!(error = %e, "Pipeline aborted");
                self.notifier
                    .send(&messages::error_message(&e.to_string()))
                    .await;
                return Err(e);
            }
        };

        let total_found = all_jobs.len();
        info!(total_found, "Total matching jobs found");

        if all_jobs.is_empty() {
            let message = messages::no_jobs_message(self.report_date);
            info!("{}", message);
            self.notifier.send(&message).await;
            return Ok(RunSummary {
                outcome: RunOutcome::NoJobs,
                total_found: 0,
                attempted: 0,
                delivered: 0,
                elapsed: started.elapsed(),
            });
        }

        let jobs_to_send = truncate_jobs(all_jobs, self.settings.max_notifications);
        let attempted = jobs_to_send.len();

        let mut delivered = 0;
        for job in &jobs_to_send {
            if self.notifier.send(&messages::job_message(job)).await {
                delivered += 1;
            }
            self.pause().await;
        }

        let elapsed = started.elapsed();
        let summary = messages::summary_message(elapsed, self.report_date, total_found, delivered);
        info!(total_found, attempted, delivered, elapsed_secs = elapsed.as_secs_f64(), "Run completed");
        self.notifier.send(&summary).await;

        Ok(RunSummary {
            outcome: RunOutcome::Delivered,
            total_found,
            attempted,
            delivered,
            elapsed,
        })
    }

    /// Fetch every source in order, concatenating results.
    async fn collect(&self) -> Result<Vec<JobRecord>, PipelineError> {
        let mut all_jobs = Vec::new();

        for source in &self.sources {
            let jobs = AssertUnwindSafe(source.fetch())
                .catch_unwind()
                .await
                .map_err(|panic| PipelineError::SourceFailed {
                    origin: source.kind(),
                    message: panic_message(&*panic),
                })?;
            all_jobs.extend(jobs);
        }

        Ok(all_jobs)
    }

    async fn pause(&self) {
        if self.settings.send_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.send_delay_ms)).await;
        }
    }
}

/// Keep the first `limit` jobs in fetch order.
pub fn truncate_jobs(mut jobs: Vec<JobRecord>, limit: usize) -> Vec<JobRecord> {
    jobs.truncate(limit);
    jobs
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "adapter panicked".to_string()
    }
}
