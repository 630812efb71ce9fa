// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 关键词匹配（keyword_matcher）：大小写不敏感的关键词包含判断
/// - 通知服务（notifier）：消息投递接口
/// - 新鲜度过滤（recency）：统一的日期解析与发布时间窗口判断
pub mod keyword_matcher;
pub mod notifier;
pub mod recency;
