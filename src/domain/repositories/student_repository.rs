// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::student::{Student, YearCount};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 学生仓库特质
///
/// 定义学生数据访问接口，遵循依赖倒置原则，
/// 领域层不依赖于具体的数据存储实现。
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// 根据ID查找学生
    ///
    /// # 参数
    ///
    /// * `id` - 学生的唯一标识符
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Student))` - 找到学生
    /// * `Ok(None)` - 未找到
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, RepositoryError>;

    /// 插入新学生，忽略传入的ID，由存储层分配
    ///
    /// # 返回值
    ///
    /// * `Ok(Student)` - 带有已分配ID的学生
    /// * `Err(RepositoryError)` - 插入失败
    async fn create(&self, student: &Student) -> Result<Student, RepositoryError>;

    /// 更新已存在的学生
    ///
    /// # 返回值
    ///
    /// * `Ok(Student)` - 更新后的学生
    /// * `Err(RepositoryError::NotFound)` - 学生不存在
    async fn update(&self, student: &Student) -> Result<Student, RepositoryError>;

    /// 根据ID删除学生
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 已删除
    /// * `Ok(false)` - 该ID不存在
    async fn delete_by_id(&self, id: i32) -> Result<bool, RepositoryError>;

    /// 查询全部学生，按ID升序
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError>;

    /// 学生总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 按出生年份分组统计学生数量，按年份升序
    async fn count_by_birth_year(&self) -> Result<Vec<YearCount>, RepositoryError>;
}
