// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 包含职位来源的 HTTP 适配器和 Telegram 通知实现
pub mod notifier;
pub mod sources;
