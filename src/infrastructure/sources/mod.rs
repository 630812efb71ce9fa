// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 职位来源适配器模块
///
/// 每个来源一个适配器，按固定顺序由流水线调用：
/// Remotive、RemoteOK、WeWorkRemotely（RSS）、Hacker News
pub mod hacker_news;
pub mod remoteok;
pub mod remotive;
pub mod weworkremotely;

#[cfg(test)]
mod test_support;

use crate::config::settings::SourcesSettings;
use crate::domain::sources::source::{JobFilter, JobSource, SourceError};
use serde::de::DeserializeOwned;
use std::sync::Arc;

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout
        } else if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

/// GET `url`, failing on any non-2xx status.
async fn get_checked(client: &reqwest::Client, url: &str) -> Result<reqwest::Response, SourceError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response)
}

/// GET `url` and decode the body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, SourceError> {
    let body = get_checked(client, url).await?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// GET `url` and return the body as text.
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, SourceError> {
    Ok(get_checked(client, url).await?.text().await?)
}

/// Build the enabled adapters in pipeline order.
pub fn build_sources(
    settings: &SourcesSettings,
    client: &reqwest::Client,
    filter: &JobFilter,
) -> Vec<Arc<dyn JobSource>> {
    let mut sources: Vec<Arc<dyn JobSource>> = Vec::new();

    if settings.remotive.enabled {
        sources.push(Arc::new(remotive::RemotiveSource::new(
            client.clone(),
            settings.remotive.clone(),
            filter.clone(),
        )));
    }
    if settings.remoteok.enabled {
        sources.push(Arc::new(remoteok::RemoteOkSource::new(
            client.clone(),
            settings.remoteok.clone(),
            filter.clone(),
        )));
    }
    if settings.weworkremotely.enabled {
        sources.push(Arc::new(weworkremotely::WeWorkRemotelySource::new(
            client.clone(),
            settings.weworkremotely.clone(),
            filter.clone(),
        )));
    }
    if settings.hacker_news.enabled {
        sources.push(Arc::new(hacker_news::HackerNewsSource::new(
            client.clone(),
            settings.hacker_news.clone(),
            filter.clone(),
        )));
    }

    sources
}
