// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use studentrs::domain::models::student::{Student, YearCount};
use studentrs::domain::repositories::student_repository::{RepositoryError, StudentRepository};
use studentrs::infrastructure::repositories::student_repo_impl::StudentRepositoryImpl;

/// 测试仓库的CRUD操作
///
/// 验证插入分配ID、按ID查询、更新与删除
#[tokio::test]
async fn test_repository_crud_operations() {
    let repo = StudentRepositoryImpl::new(create_test_db().await);

    let created = repo.create(&Student::new("Ana", 2001)).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Ana");

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    let updated = repo
        .update(&Student {
            name: "Ana Maria".to_string(),
            birth_year: 2002,
            ..created.clone()
        })
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.birth_year, 2002);

    assert!(repo.delete_by_id(created.id).await.unwrap());
    assert!(!repo.delete_by_id(created.id).await.unwrap());
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

/// 插入时忽略调用方提供的ID
#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let repo = StudentRepositoryImpl::new(create_test_db().await);

    let created = repo
        .create(&Student {
            id: 500,
            name: "Ana".to_string(),
            birth_year: 2001,
        })
        .await
        .unwrap();

    assert_ne!(created.id, 500);
}

#[tokio::test]
async fn test_update_unknown_student_returns_not_found() {
    let repo = StudentRepositoryImpl::new(create_test_db().await);

    let result = repo
        .update(&Student {
            id: 99,
            name: "Ghost".to_string(),
            birth_year: 2000,
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_find_all_is_ordered_by_id_and_matches_count() {
    let repo = StudentRepositoryImpl::new(create_test_db().await);
    for (name, year) in [("Carla", 1999), ("Ana", 2001), ("Bruno", 2000)] {
        repo.create(&Student::new(name, year)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    let ids: Vec<i32> = all.iter().map(|s| s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();

    assert_eq!(ids, sorted);
    assert_eq!(repo.count().await.unwrap(), all.len() as u64);
    assert_eq!(all[0].name, "Carla");
}

/// 测试按出生年份分组统计
#[tokio::test]
async fn test_count_by_birth_year_groups_and_orders_by_year() {
    let repo = StudentRepositoryImpl::new(create_test_db().await);
    for year in [2001, 2000, 2000] {
        repo.create(&Student::new("S", year)).await.unwrap();
    }

    let stats = repo.count_by_birth_year().await.unwrap();

    assert_eq!(
        stats,
        vec![
            YearCount { year: 2000, count: 2 },
            YearCount { year: 2001, count: 1 },
        ]
    );
}

#[tokio::test]
async fn test_count_by_birth_year_on_empty_table() {
    let repo = StudentRepositoryImpl::new(create_test_db().await);

    assert!(repo.count_by_birth_year().await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);
}
