// src/models/requirement.rs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- 枚举 ---

// 映射数据库的 CREATE TYPE elevator_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "elevator_type", rename_all = "snake_case")]
pub enum ElevatorType {
    Passenger,
    Freight,
    Home,
    Escalator,
    MovingWalkway,
}

// 映射数据库的 CREATE TYPE requirement_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "requirement_status", rename_all = "snake_case")]
pub enum RequirementStatus {
    Pending,
    Reviewing,
    Quoted,
    Accepted,
    Rejected,
}

impl FromStr for RequirementStatus {
    type Err = ();

    /// 状态值按名称解析，不区分大小写（路径参数用）。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reviewing" => Ok(Self::Reviewing),
            "quoted" => Ok(Self::Quoted),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}

// --- 采购需求 ---

/// elevator_requirements 表的一行。
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorRequirement {
    pub id: i32,

    // 联系信息
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub company_name: Option<String>,
    pub project_name: Option<String>,
    pub project_address: Option<String>,

    // 规格参数
    pub elevator_type: ElevatorType,
    pub quantity: i32,
    pub floors: i32,
    pub floor_height: Option<Decimal>,
    pub car_capacity: Option<i32>,
    pub car_speed: Option<Decimal>,
    pub hoistway_width: Option<Decimal>,
    pub hoistway_depth: Option<Decimal>,
    pub pit_depth: Option<Decimal>,
    pub overhead_height: Option<Decimal>,
    pub car_width: Option<Decimal>,
    pub car_depth: Option<Decimal>,
    pub car_height: Option<Decimal>,
    pub door_width: Option<Decimal>,
    pub door_height: Option<Decimal>,

    // 商务信息
    pub special_requirements: Option<String>,
    pub budget_range: Option<String>,
    pub delivery_time: Option<String>,

    // 工作流字段
    pub status: RequirementStatus,
    pub admin_notes: Option<String>,
    pub quote_amount: Option<Decimal>,
    pub quote_date: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新建采购需求的入库数据，由接口层在校验通过后组装。
#[derive(Debug, Clone)]
pub struct NewRequirement {
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub company_name: Option<String>,
    pub project_name: Option<String>,
    pub project_address: Option<String>,
    pub elevator_type: ElevatorType,
    pub quantity: i32,
    pub floors: i32,
    pub floor_height: Option<Decimal>,
    pub car_capacity: Option<i32>,
    pub car_speed: Option<Decimal>,
    pub hoistway_width: Option<Decimal>,
    pub hoistway_depth: Option<Decimal>,
    pub pit_depth: Option<Decimal>,
    pub overhead_height: Option<Decimal>,
    pub car_width: Option<Decimal>,
    pub car_depth: Option<Decimal>,
    pub car_height: Option<Decimal>,
    pub door_width: Option<Decimal>,
    pub door_height: Option<Decimal>,
    pub special_requirements: Option<String>,
    pub budget_range: Option<String>,
    pub delivery_time: Option<String>,
}

/// 状态更新的入库数据。整体覆盖：未提供的字段写入 NULL，
/// 这是对外公开的契约，不做部分合并。
#[derive(Debug, Clone)]
pub struct RequirementStatusChange {
    pub status: RequirementStatus,
    pub admin_notes: Option<String>,
    pub quote_amount: Option<Decimal>,
}
