// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 负责编排一次完整的运行：依次调用各个职位来源、截断结果并发送通知
pub mod messages;
pub mod pipeline;
