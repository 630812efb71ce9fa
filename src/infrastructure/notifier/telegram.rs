// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{TelegramCredentials, TelegramSettings};
use crate::domain::services::notifier::Notifier;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Telegram 通知实现
pub struct TelegramNotifier {
    /// HTTP 客户端
    client: reqwest::Client,
    /// Bot API 根地址
    api_base_url: String,
    /// 消息格式
    parse_mode: String,
    /// 凭据，缺失时所有发送都会失败
    credentials: Option<TelegramCredentials>,
}

impl TelegramNotifier {
    /// 创建新的 Telegram 通知实现
    pub fn new(client: reqwest::Client, settings: &TelegramSettings) -> Self {
        Self {
            client,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            parse_mode: settings.parse_mode.clone(),
            credentials: settings.credentials(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn send_message_url(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_base_url, token)
    }
}

fn preview(message: &str) -> String {
    message.chars().take(50).collect()
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> bool {
        let Some(credentials) = &self.credentials else {
            warn!("Missing Telegram credentials, message not sent");
            return false;
        };

        let form = [
            ("chat_id", credentials.chat_id.as_str()),
            ("text", message),
            ("parse_mode", self.parse_mode.as_str()),
        ];

        let response = match self
            .client
            .post(self.send_message_url(&credentials.token))
            .form(&form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                // reqwest includes the url (and thus the token) in its errors
                error!(error = %e.without_url(), "Failed to send Telegram message");
                return false;
            }
        };

        let status = response.status();
        if status.is_success() {
            info!(preview = %preview(message), "Telegram message sent");
            true
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Telegram rejected message");
            false
        }
    }
}
