// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use std::time::Duration;

/// 构建共享的 HTTP 客户端
///
/// 所有职位来源和通知投递都复用这一个客户端，每个请求都受超时约束
pub fn build_client(settings: &HttpSettings) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str())
        .build()
}
