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
use crate::infrastructure::database::entities::student as student_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, NotSet,
    PaginatorTrait, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;

/// 分组统计查询结果行
#[derive(Debug, FromQueryResult)]
struct YearCountRow {
    birth_year: i32,
    count: i64,
}

/// 学生仓库实现
pub struct StudentRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl StudentRepositoryImpl {
    /// 创建新的学生仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的学生仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, RepositoryError> {
        let model = student_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, student: &Student) -> Result<Student, RepositoryError> {
        let model = student_entity::ActiveModel {
            id: NotSet,
            name: Set(student.name.clone()),
            birth_year: Set(student.birth_year),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn update(&self, student: &Student) -> Result<Student, RepositoryError> {
        let mut model: student_entity::ActiveModel =
            student_entity::Entity::find_by_id(student.id)
                .one(self.db.as_ref())
                .await?
                .ok_or(RepositoryError::NotFound)?
                .into();

        model.name = Set(student.name.clone());
        model.birth_year = Set(student.birth_year);

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = student_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        let models = student_entity::Entity::find()
            .order_by_asc(student_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = student_entity::Entity::find()
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    async fn count_by_birth_year(&self) -> Result<Vec<YearCount>, RepositoryError> {
        let rows = student_entity::Entity::find()
            .select_only()
            .column(student_entity::Column::BirthYear)
            .column_as(Expr::col(student_entity::Column::Id).count(), "count")
            .group_by(student_entity::Column::BirthYear)
            .order_by_asc(student_entity::Column::BirthYear)
            .into_model::<YearCountRow>()
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| YearCount {
                year: row.birth_year,
                count: row.count,
            })
            .collect())
    }
}
