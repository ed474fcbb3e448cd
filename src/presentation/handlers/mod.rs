// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器把请求转交给学生服务，并把结果转换为HTTP响应
pub mod student_handler;
