// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// 最早允许的出生年份
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// 学生实体
///
/// `id` 为 0 表示尚未持久化，由存储层分配标识符。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// 学生唯一标识符
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: i32,
    /// 学生姓名
    #[validate(
        length(min = 1, max = 255, message = "name must be between 1 and 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    /// 出生年份，用于按年份统计
    #[validate(custom(function = "validate_birth_year"))]
    pub birth_year: i32,
}

impl Student {
    /// 创建一个尚未持久化的学生
    pub fn new(name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            birth_year,
        }
    }

    /// 是否已由存储层分配标识符
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// 按出生年份统计的学生数量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct YearCount {
    /// 出生年份
    pub year: i32,
    /// 该年份出生的学生人数
    pub count: i64,
}

/// `null` 与缺省一样视为尚未持久化
fn deserialize_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("name cannot be empty".into());
        return Err(err);
    }
    Ok(())
}

fn validate_birth_year(year: i32) -> Result<(), ValidationError> {
    let current = Utc::now().year();
    if !(MIN_BIRTH_YEAR..=current).contains(&year) {
        let mut err = ValidationError::new("birth_year_range");
        err.message =
            Some(format!("birthYear must be between {} and {}", MIN_BIRTH_YEAR, current).into());
        return Err(err);
    }
    Ok(())
}
