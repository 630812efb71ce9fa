// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 职位来源领域模块
///
/// 定义职位来源适配器的接口、错误类型以及共享的过滤条件
pub mod source;
