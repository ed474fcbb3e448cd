// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 提供从HTTP请求中提取数据的工具
/// 解析失败时统一返回 400 和 JSON 错误体
pub mod json_body;
pub mod student_id;
