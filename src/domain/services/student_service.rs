// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::student::{Student, YearCount};
use crate::domain::repositories::student_repository::RepositoryError;
use async_trait::async_trait;
use thiserror::Error;

/// 学生服务错误类型
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 输入数据未通过校验
    #[error("Validation failed: {0}")]
    Validation(String),
    /// 目标学生不存在
    #[error("Student not found")]
    NotFound,
    /// 仓库层错误
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 学生服务特质
///
/// HTTP 层只通过该特质访问学生记录，持久化、校验与统计均由实现方负责。
#[async_trait]
pub trait StudentService: Send + Sync {
    /// 保存学生
    ///
    /// 已存在的ID执行更新，否则插入新记录并由存储层分配ID。
    ///
    /// # 参数
    ///
    /// * `student` - 要保存的学生
    ///
    /// # 返回值
    ///
    /// * `Ok(Student)` - 持久化后的学生
    /// * `Err(ServiceError)` - 校验失败或持久化失败
    async fn save(&self, student: Student) -> Result<Student, ServiceError>;

    /// 删除学生
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 已删除
    /// * `Ok(false)` - 该ID不存在
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;

    /// 获取全部学生
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError>;

    /// 学生总数
    async fn count_students(&self) -> Result<i64, ServiceError>;

    /// 按出生年份统计学生数量
    async fn find_nbr_student_by_year(&self) -> Result<Vec<YearCount>, ServiceError>;
}
