// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const STUDENTS_CREATED_TOTAL: &str = "students_created_total";
pub const STUDENTS_UPDATED_TOTAL: &str = "students_updated_total";
pub const STUDENTS_DELETED_TOTAL: &str = "students_deleted_total";
pub const STUDENTS_DELETE_MISSES_TOTAL: &str = "students_delete_misses_total";

/// 初始化指标系统
///
/// 在配置的地址上启动 Prometheus 导出器并注册学生相关指标。
/// 未启用或安装失败时只记录日志，计数器调用仍然安全。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match format!("{}:{}", settings.host, settings.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}:{}: {}", settings.host, settings.port, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(STUDENTS_CREATED_TOTAL, "Total number of students created");
    describe_counter!(STUDENTS_UPDATED_TOTAL, "Total number of students updated");
    describe_counter!(STUDENTS_DELETED_TOTAL, "Total number of students deleted");
    describe_counter!(
        STUDENTS_DELETE_MISSES_TOTAL,
        "Total number of delete requests for unknown student ids"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次学生保存
pub fn record_student_saved(created: bool) {
    if created {
        counter!(STUDENTS_CREATED_TOTAL).increment(1);
    } else {
        counter!(STUDENTS_UPDATED_TOTAL).increment(1);
    }
}

/// 记录一次删除请求的结果
pub fn record_student_delete(deleted: bool) {
    if deleted {
        counter!(STUDENTS_DELETED_TOTAL).increment(1);
    } else {
        counter!(STUDENTS_DELETE_MISSES_TOTAL).increment(1);
    }
}
