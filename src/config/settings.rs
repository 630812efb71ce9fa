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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 默认关键词列表
pub const DEFAULT_KEYWORDS: [&str; 5] = [
    "python",
    "fastapi",
    "backend",
    "software engineer",
    "backend engineer",
];

/// 应用程序配置设置
///
/// 包含 Telegram、过滤规则、流水线、HTTP 客户端和职位来源等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Telegram 配置
    pub telegram: TelegramSettings,
    /// 过滤配置
    pub filter: FilterSettings,
    /// 流水线配置
    pub pipeline: PipelineSettings,
    /// HTTP 客户端配置
    pub http: HttpSettings,
    /// 职位来源配置
    pub sources: SourcesSettings,
}

/// Telegram 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramSettings {
    /// 机器人令牌
    pub token: Option<String>,
    /// 目标聊天 ID
    pub chat_id: Option<String>,
    /// Bot API 根地址
    pub api_base_url: String,
    /// 消息格式 (HTML, MarkdownV2)
    pub parse_mode: String,
}

impl TelegramSettings {
    /// Both secrets, or `None` when either is missing or blank.
    pub fn credentials(&self) -> Option<TelegramCredentials> {
        let token = self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        let chat_id = self
            .chat_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())?;

        Some(TelegramCredentials {
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }
}

/// Telegram 凭据
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// 过滤配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    /// 关键词列表（任意一个命中即可）
    pub keywords: Vec<String>,
    /// 发布时间窗口（天），0 表示仅当天
    pub recency_window_days: i64,
}

/// 流水线配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    /// 单次运行最多发送的职位通知数
    pub max_notifications: usize,
    /// 每次发送后的暂停时间（毫秒）
    pub send_delay_ms: u64,
    /// 是否发送启动通知
    pub notify_on_start: bool,
}

/// HTTP 客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent 请求头
    pub user_agent: String,
}

/// 职位来源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesSettings {
    pub remotive: RemotiveSettings,
    pub remoteok: RemoteOkSettings,
    pub weworkremotely: WeWorkRemotelySettings,
    pub hacker_news: HackerNewsSettings,
}

/// Remotive 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RemotiveSettings {
    pub enabled: bool,
    /// 职位列表接口地址
    pub url: String,
}

/// RemoteOK 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteOkSettings {
    pub enabled: bool,
    /// 职位列表接口地址
    pub url: String,
    /// 相对职位链接的拼接前缀
    pub base_url: String,
}

/// WeWorkRemotely 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct WeWorkRemotelySettings {
    pub enabled: bool,
    /// RSS 地址
    pub url: String,
}

/// Hacker News 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HackerNewsSettings {
    pub enabled: bool,
    /// Firebase API 根地址
    pub api_base_url: String,
    /// 帖子页面地址，缺少外链时用于拼接职位链接
    pub item_base_url: String,
    /// 最多检查的职位帖子数
    pub max_items: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 按顺序叠加：默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `JOBHOUND__*` 环境变量，最后是 `TELEGRAM_TOKEN` 与 `CHAT_ID`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("JOBHOUND")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("filter.keywords"),
            )
            .set_override_option("telegram.token", std::env::var("TELEGRAM_TOKEN").ok())?
            .set_override_option("telegram.chat_id", std::env::var("CHAT_ID").ok())?;

        builder.build()?.try_deserialize()
    }

    /// Defaults plus a single configuration file, without environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Telegram
            .set_default("telegram.api_base_url", "https://api.telegram.org")?
            .set_default("telegram.parse_mode", "HTML")?
            // Filtering
            .set_default("filter.keywords", DEFAULT_KEYWORDS.to_vec())?
            .set_default("filter.recency_window_days", 3)?
            // Pipeline
            .set_default("pipeline.max_notifications", 15)?
            .set_default("pipeline.send_delay_ms", 1000)?
            .set_default("pipeline.notify_on_start", true)?
            // HTTP client
            .set_default("http.timeout_secs", 30)?
            .set_default(
                "http.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )?
            // Sources
            .set_default("sources.remotive.enabled", true)?
            .set_default("sources.remotive.url", "https://remotive.com/api/remote-jobs")?
            .set_default("sources.remoteok.enabled", true)?
            .set_default("sources.remoteok.url", "https://remoteok.io/api")?
            .set_default("sources.remoteok.base_url", "https://remoteok.io")?
            .set_default("sources.weworkremotely.enabled", true)?
            .set_default(
                "sources.weworkremotely.url",
                "https://weworkremotely.com/remote-jobs.rss",
            )?
            .set_default("sources.hacker_news.enabled", true)?
            .set_default(
                "sources.hacker_news.api_base_url",
                "https://hacker-news.firebaseio.com/v0",
            )?
            .set_default(
                "sources.hacker_news.item_base_url",
                "https://news.ycombinator.com/item",
            )?
            .set_default("sources.hacker_news.max_items", 50)
    }
}
