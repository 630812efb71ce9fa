// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::get_text;
use crate::config::settings::WeWorkRemotelySettings;
use crate::domain::models::job_record::{JobRecord, JobSourceKind};
use crate::domain::services::recency::{RawDate, UndatedPolicy};
use crate::domain::sources::source::{JobFilter, JobSource, SourceError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::info;

const PLACEHOLDER_COMPANY: &str = "WeWorkRemotely Job";

/// RSS 中的 `pubDate` 去掉星期与时区后的格式，例如 `27 Dec 2025 10:00:00`
const PUB_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// RSS 条目
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub pub_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemField {
    Title,
    Description,
    Link,
    PubDate,
}

impl ItemField {
    fn from_tag(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(ItemField::Title),
            b"description" => Some(ItemField::Description),
            b"link" => Some(ItemField::Link),
            b"pubDate" => Some(ItemField::PubDate),
            _ => None,
        }
    }
}

impl FeedItem {
    fn push(&mut self, field: ItemField, text: &str) {
        let target = match field {
            ItemField::Title => &mut self.title,
            ItemField::Description => &mut self.description,
            ItemField::Link => &mut self.link,
            ItemField::PubDate => &mut self.pub_date,
        };
        target.push_str(text);
    }

    fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            link: self.link.trim().to_string(),
            pub_date: self.pub_date.trim().to_string(),
        }
    }
}

fn xml_error(reader: &Reader<&[u8]>, message: impl std::fmt::Display) -> SourceError {
    SourceError::Xml(format!("at byte {}: {}", reader.error_position(), message))
}

/// Parse every `<item>` of an RSS document.
///
/// A missing child element leaves the field empty. Any malformed markup fails
/// the whole document.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>, SourceError> {
    let mut reader = Reader::from_str(xml);
    let mut items = Vec::new();
    let mut current: Option<FeedItem> = None;
    let mut field: Option<ItemField> = None;
    let mut depth: usize = 0;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                saw_root = true;
                let name = e.name();
                if name.as_ref() == b"item" {
                    current = Some(FeedItem::default());
                    field = None;
                } else if current.is_some() && field.is_none() {
                    field = ItemField::from_tag(name.as_ref());
                }
            }
            Ok(Event::Empty(_)) => saw_root = true,
            Ok(Event::End(e)) => {
                depth = depth.saturating_sub(1);
                let name = e.name();
                if name.as_ref() == b"item" {
                    if let Some(item) = current.take() {
                        items.push(item.trimmed());
                    }
                    field = None;
                } else if field.is_some() && ItemField::from_tag(name.as_ref()) == field {
                    field = None;
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    let text = e.decode().map_err(|err| xml_error(&reader, err))?;
                    item.push(f, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    item.push(f, &String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    if let Some(ch) = e.resolve_char_ref().map_err(|err| xml_error(&reader, err))? {
                        item.push(f, ch.encode_utf8(&mut [0u8; 4]));
                    } else {
                        let name = e.decode().map_err(|err| xml_error(&reader, err))?;
                        let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                            xml_error(&reader, format!("unknown entity &{};", name))
                        })?;
                        item.push(f, resolved);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(&reader, e)),
            _ => {}
        }
    }

    if !saw_root {
        return Err(SourceError::Xml("document has no root element".to_string()));
    }
    if depth != 0 {
        return Err(SourceError::Xml(format!(
            "document ended with {} unclosed element(s)",
            depth
        )));
    }

    Ok(items)
}

/// Parse a `pubDate`, ignoring its leading weekday and trailing zone token
/// (`+0000`, `-0500`, `GMT`). Feeds often carry a weekday that does not match
/// the date, so it is never checked.
pub fn parse_pub_date(pub_date: &str) -> Option<NaiveDateTime> {
    let pub_date = pub_date.trim();
    let pub_date = match pub_date.split_once(',') {
        Some((weekday, rest)) if weekday.chars().all(|c| c.is_ascii_alphabetic()) => rest.trim(),
        _ => pub_date,
    };
    let without_zone = match pub_date.rsplit_once(' ') {
        Some((head, zone))
            if zone.starts_with('+')
                || zone.starts_with('-')
                || zone.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            head.trim_end()
        }
        _ => pub_date,
    };

    NaiveDateTime::parse_from_str(without_zone, PUB_DATE_FORMAT).ok()
}

/// `Company: Role` titles carry the company name; otherwise use a placeholder.
fn company_from_title(title: &str) -> &str {
    match title.split_once(": ") {
        Some((company, _)) if !company.trim().is_empty() => company.trim(),
        _ => PLACEHOLDER_COMPANY,
    }
}

/// WeWorkRemotely 职位来源（RSS）
///
/// RSS 只包含最新的职位，所以 `pubDate` 无法解析时视为新发布
pub struct WeWorkRemotelySource {
    client: reqwest::Client,
    settings: WeWorkRemotelySettings,
    filter: JobFilter,
}

impl WeWorkRemotelySource {
    pub const UNDATED_POLICY: UndatedPolicy = UndatedPolicy::AssumeRecent;

    pub fn new(
        client: reqwest::Client,
        settings: WeWorkRemotelySettings,
        filter: JobFilter,
    ) -> Self {
        Self {
            client,
            settings,
            filter,
        }
    }

    pub fn filter_items(&self, items: Vec<FeedItem>) -> Vec<JobRecord> {
        items
            .into_iter()
            .filter_map(|item| self.to_record(item))
            .collect()
    }

    fn to_record(&self, item: FeedItem) -> Option<JobRecord> {
        if !self
            .filter
            .keywords
            .matches_any(&[item.title.as_str(), item.description.as_str()])
        {
            return None;
        }

        let raw_date = parse_pub_date(&item.pub_date).map(RawDate::DateTime);
        let posted = self
            .filter
            .recency
            .admit(raw_date.as_ref(), Self::UNDATED_POLICY)?;

        let company = company_from_title(&item.title).to_string();
        JobRecord::new(
            item.title,
            company,
            item.link,
            JobSourceKind::WeWorkRemotely,
            posted,
        )
    }
}

#[async_trait]
impl JobSource for WeWorkRemotelySource {
    fn kind(&self) -> JobSourceKind {
        JobSourceKind::WeWorkRemotely
    }

    async fn fetch_listings(&self) -> Result<Vec<JobRecord>, SourceError> {
        let body = get_text(&self.client, &self.settings.url).await?;
        let items = parse_feed(&body)?;
        info!(total = items.len(), "WeWorkRemotely: fetched feed items");

        Ok(self.filter_items(items))
    }
}
