// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含职位抓取流水线和通知消息的编排逻辑
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、职位来源接口和过滤规则
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成，如各个职位来源的 HTTP 适配器和 Telegram 通知
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
