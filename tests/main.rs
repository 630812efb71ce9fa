// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 测试主模块
///
/// 端到端运行整个流水线：所有职位来源与 Telegram 接口都由本地模拟服务器提供
mod integration;
