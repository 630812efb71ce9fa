// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 职位记录是唯一的领域实体，只在一次运行中短暂存在
pub mod job_record;
