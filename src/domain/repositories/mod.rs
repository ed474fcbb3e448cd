// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的仓库接口，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 学生仓库（student_repository）：管理学生记录的持久化与统计查询
pub mod student_repository;
