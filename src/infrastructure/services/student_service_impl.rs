// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::student::{Student, YearCount};
use crate::domain::repositories::student_repository::{RepositoryError, StudentRepository};
use crate::domain::services::student_service::{ServiceError, StudentService};
use crate::infrastructure::metrics;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use validator::{Validate, ValidationErrors};

/// 学生服务实现
///
/// 基于仓库完成校验、新增或更新的判定以及统计查询
pub struct StudentServiceImpl<R: StudentRepository> {
    repo: Arc<R>,
}

impl<R: StudentRepository> StudentServiceImpl<R> {
    /// 创建新的学生服务实例
    ///
    /// # 参数
    ///
    /// * `repo` - 学生仓库
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: StudentRepository + 'static> StudentService for StudentServiceImpl<R> {
    async fn save(&self, student: Student) -> Result<Student, ServiceError> {
        student
            .validate()
            .map_err(|e| ServiceError::Validation(describe_validation_errors(&e)))?;

        // An id that does not exist yet falls through to insert with a fresh id.
        if student.is_persisted() && self.repo.find_by_id(student.id).await?.is_some() {
            match self.repo.update(&student).await {
                Ok(updated) => {
                    info!(student_id = updated.id, "Student updated");
                    metrics::record_student_saved(false);
                    return Ok(updated);
                }
                // row deleted between lookup and update
                Err(RepositoryError::NotFound) => {
                    debug!(student_id = student.id, "Student vanished before update, inserting");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let created = self.repo.create(&student).await?;
        info!(student_id = created.id, "Student created");
        metrics::record_student_saved(true);
        Ok(created)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = if id > 0 {
            self.repo.delete_by_id(id).await?
        } else {
            false
        };

        if deleted {
            info!(student_id = id, "Student deleted");
        } else {
            debug!(student_id = id, "Delete requested for unknown student");
        }
        metrics::record_student_delete(deleted);
        Ok(deleted)
    }

    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    async fn count_students(&self) -> Result<i64, ServiceError> {
        let count = self.repo.count().await?;
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn find_nbr_student_by_year(&self) -> Result<Vec<YearCount>, ServiceError> {
        Ok(self.repo.count_by_birth_year().await?)
    }
}

/// 将校验错误整理为单行消息，按字段名排序
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
