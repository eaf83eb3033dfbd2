// src/models/maintenance.rs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- 枚举 ---
// 维保的类型、紧急程度和状态在请求里是自由文本，
// 每个枚举只有下面这一个解析入口，创建和更新共用。

// 映射数据库的 CREATE TYPE maintenance_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "maintenance_type", rename_all = "snake_case")]
pub enum MaintenanceType {
    Routine,
    Emergency,
    Inspection,
    Upgrade,
}

impl FromStr for MaintenanceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "routine" => Ok(Self::Routine),
            "emergency" => Ok(Self::Emergency),
            "inspection" => Ok(Self::Inspection),
            "upgrade" => Ok(Self::Upgrade),
            _ => Err(()),
        }
    }
}

// 映射数据库的 CREATE TYPE urgency_level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "urgency_level", rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl FromStr for UrgencyLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

// 映射数据库的 CREATE TYPE maintenance_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "maintenance_status", rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Pending,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl FromStr for MaintenanceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "scheduled" => Ok(Self::Scheduled),
            "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

// --- 维保申请 ---

/// maintenance_requests 表的一行。
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: i32,

    // 客户信息
    pub customer_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,

    // 设备与服务信息
    pub elevator_location: String,
    pub elevator_type: Option<String>,
    pub maintenance_type: MaintenanceType,
    pub urgency_level: UrgencyLevel,
    pub description: Option<String>,
    pub preferred_time: Option<String>,

    // 工作流字段
    pub status: MaintenanceStatus,
    pub technician_notes: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新建维保申请的入库数据（类型和紧急程度已解析为枚举）。
#[derive(Debug, Clone)]
pub struct NewMaintenanceRequest {
    pub customer_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub elevator_location: String,
    pub elevator_type: Option<String>,
    pub maintenance_type: MaintenanceType,
    pub urgency_level: UrgencyLevel,
    pub description: Option<String>,
    pub preferred_time: Option<String>,
}

/// 状态更新的入库数据。四个字段整体覆盖，未提供的写入 NULL。
#[derive(Debug, Clone)]
pub struct MaintenanceStatusChange {
    pub status: MaintenanceStatus,
    pub technician_notes: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_type_parses_case_insensitively() {
        assert_eq!("routine".parse::<MaintenanceType>(), Ok(MaintenanceType::Routine));
        assert_eq!("ROUTINE".parse::<MaintenanceType>(), Ok(MaintenanceType::Routine));
        assert_eq!("Upgrade".parse::<MaintenanceType>(), Ok(MaintenanceType::Upgrade));
        assert!("notarealtype".parse::<MaintenanceType>().is_err());
    }

    #[test]
    fn urgency_parses_case_insensitively() {
        assert_eq!("low".parse::<UrgencyLevel>(), Ok(UrgencyLevel::Low));
        assert_eq!("High".parse::<UrgencyLevel>(), Ok(UrgencyLevel::High));
        assert!("urgent".parse::<UrgencyLevel>().is_err());
    }

    #[test]
    fn status_parses_by_name_only() {
        assert_eq!("InProgress".parse::<MaintenanceStatus>(), Ok(MaintenanceStatus::InProgress));
        assert_eq!("inprogress".parse::<MaintenanceStatus>(), Ok(MaintenanceStatus::InProgress));
        // 按名称匹配，下划线写法不属于枚举名。
        assert!("in_progress".parse::<MaintenanceStatus>().is_err());
    }

    #[test]
    fn status_serializes_symbolic_name() {
        assert_eq!(
            serde_json::to_string(&MaintenanceStatus::InProgress).unwrap(),
            "\"InProgress\""
        );
    }
}
