// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：职位记录及其来源、发布日期
/// - 职位来源（sources）：各个来源适配器需要实现的接口
/// - 服务（services）：日期新鲜度过滤、关键词匹配和通知接口
///
/// 领域层不依赖于任何外部实现，HTTP 与消息投递都在基础设施层完成。
pub mod models;
pub mod services;
pub mod sources;
