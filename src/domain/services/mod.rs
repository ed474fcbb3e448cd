// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含学生服务特质（student_service），
/// 表示层通过该特质与业务逻辑交互。
pub mod student_service;
