// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

/// 通知服务特质
///
/// 定义单条消息投递的核心逻辑
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 发送一条消息
    ///
    /// # 参数
    ///
    /// * `message` - 已格式化的消息正文
    ///
    /// # 返回值
    ///
    /// * `true` - 投递成功
    /// * `false` - 缺少凭据或投递失败，错误已记录日志
    async fn send(&self, message: &str) -> bool;
}
