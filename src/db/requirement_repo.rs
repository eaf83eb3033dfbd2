// src/db/requirement_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::requirement::{
        ElevatorRequirement, NewRequirement, RequirementStatus, RequirementStatusChange,
    },
};

// 列清单由各查询共用，避免某处 SELECT * 在后续加列时悄悄变形。
const COLUMNS: &str = "id, contact_name, contact_phone, contact_email, company_name, \
    project_name, project_address, elevator_type, quantity, floors, floor_height, \
    car_capacity, car_speed, hoistway_width, hoistway_depth, pit_depth, overhead_height, \
    car_width, car_depth, car_height, door_width, door_height, special_requirements, \
    budget_range, delivery_time, status, admin_notes, quote_amount, quote_date, \
    created_at, updated_at";

#[derive(Clone)]
pub struct RequirementRepository {
    pool: PgPool,
}

impl RequirementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 入库一条新需求。status 与两个时间戳由数据库默认值生成。
    pub async fn insert(&self, new: &NewRequirement) -> Result<ElevatorRequirement, AppError> {
        let sql = format!(
            "INSERT INTO elevator_requirements (
                contact_name, contact_phone, contact_email, company_name, project_name,
                project_address, elevator_type, quantity, floors, floor_height,
                car_capacity, car_speed, hoistway_width, hoistway_depth, pit_depth,
                overhead_height, car_width, car_depth, car_height, door_width,
                door_height, special_requirements, budget_range, delivery_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    $16, $17, $18, $19, $20, $21, $22, $23, $24)
            RETURNING {COLUMNS}"
        );

        let requirement = sqlx::query_as::<_, ElevatorRequirement>(&sql)
            .bind(&new.contact_name)
            .bind(&new.contact_phone)
            .bind(&new.contact_email)
            .bind(&new.company_name)
            .bind(&new.project_name)
            .bind(&new.project_address)
            .bind(new.elevator_type)
            .bind(new.quantity)
            .bind(new.floors)
            .bind(new.floor_height)
            .bind(new.car_capacity)
            .bind(new.car_speed)
            .bind(new.hoistway_width)
            .bind(new.hoistway_depth)
            .bind(new.pit_depth)
            .bind(new.overhead_height)
            .bind(new.car_width)
            .bind(new.car_depth)
            .bind(new.car_height)
            .bind(new.door_width)
            .bind(new.door_height)
            .bind(&new.special_requirements)
            .bind(&new.budget_range)
            .bind(&new.delivery_time)
            .fetch_one(&self.pool)
            .await?;

        Ok(requirement)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ElevatorRequirement>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM elevator_requirements WHERE id = $1");

        let requirement = sqlx::query_as::<_, ElevatorRequirement>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(requirement)
    }

    /// 全量列表，最新的在前。
    pub async fn find_all(&self) -> Result<Vec<ElevatorRequirement>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM elevator_requirements ORDER BY created_at DESC");

        let requirements = sqlx::query_as::<_, ElevatorRequirement>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(requirements)
    }

    pub async fn find_by_status(
        &self,
        status: RequirementStatus,
    ) -> Result<Vec<ElevatorRequirement>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM elevator_requirements
             WHERE status = $1
             ORDER BY created_at DESC"
        );

        let requirements = sqlx::query_as::<_, ElevatorRequirement>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(requirements)
    }

    /// 状态整体覆盖。stamp_quote 为真的那次更新盖上报价时间，
    /// 其余更新保留 quote_date 原值。返回 None 表示行不存在。
    pub async fn update_status(
        &self,
        id: i32,
        change: &RequirementStatusChange,
        stamp_quote: bool,
    ) -> Result<Option<ElevatorRequirement>, AppError> {
        let sql = format!(
            "UPDATE elevator_requirements
             SET status = $2,
                 admin_notes = $3,
                 quote_amount = $4,
                 quote_date = CASE WHEN $5 THEN NOW() ELSE quote_date END,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let requirement = sqlx::query_as::<_, ElevatorRequirement>(&sql)
            .bind(id)
            .bind(change.status)
            .bind(&change.admin_notes)
            .bind(change.quote_amount)
            .bind(stamp_quote)
            .fetch_optional(&self.pool)
            .await?;

        Ok(requirement)
    }

    /// 删除一条需求，返回是否确有此行。
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM elevator_requirements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
