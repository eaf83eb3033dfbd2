// src/db/maintenance_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::maintenance::{
        MaintenanceRequest, MaintenanceStatus, MaintenanceStatusChange, NewMaintenanceRequest,
    },
};

const COLUMNS: &str = "id, customer_name, contact_phone, contact_email, elevator_location, \
    elevator_type, maintenance_type, urgency_level, description, preferred_time, \
    status, technician_notes, scheduled_time, completed_time, created_at, updated_at";

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 入库一条新申请。类型与紧急程度在上游已解析成枚举，
    /// 这里只会收到合法值。
    pub async fn insert(
        &self,
        new: &NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, AppError> {
        let sql = format!(
            "INSERT INTO maintenance_requests (
                customer_name, contact_phone, contact_email, elevator_location,
                elevator_type, maintenance_type, urgency_level, description, preferred_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}"
        );

        let request = sqlx::query_as::<_, MaintenanceRequest>(&sql)
            .bind(&new.customer_name)
            .bind(&new.contact_phone)
            .bind(&new.contact_email)
            .bind(&new.elevator_location)
            .bind(&new.elevator_type)
            .bind(new.maintenance_type)
            .bind(new.urgency_level)
            .bind(&new.description)
            .bind(&new.preferred_time)
            .fetch_one(&self.pool)
            .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MaintenanceRequest>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM maintenance_requests WHERE id = $1");

        let request = sqlx::query_as::<_, MaintenanceRequest>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    /// 全量列表，最新的在前。
    pub async fn find_all(&self) -> Result<Vec<MaintenanceRequest>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM maintenance_requests ORDER BY created_at DESC");

        let requests = sqlx::query_as::<_, MaintenanceRequest>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(requests)
    }

    pub async fn find_by_status(
        &self,
        status: MaintenanceStatus,
    ) -> Result<Vec<MaintenanceRequest>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM maintenance_requests
             WHERE status = $1
             ORDER BY created_at DESC"
        );

        let requests = sqlx::query_as::<_, MaintenanceRequest>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(requests)
    }

    /// 按联系电话精确匹配，客户查单用。
    pub async fn find_by_phone(&self, phone: &str) -> Result<Vec<MaintenanceRequest>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM maintenance_requests
             WHERE contact_phone = $1
             ORDER BY created_at DESC"
        );

        let requests = sqlx::query_as::<_, MaintenanceRequest>(&sql)
            .bind(phone)
            .fetch_all(&self.pool)
            .await?;

        Ok(requests)
    }

    /// 工作流字段整体覆盖。返回 None 表示行不存在。
    pub async fn update_status(
        &self,
        id: i32,
        change: &MaintenanceStatusChange,
    ) -> Result<Option<MaintenanceRequest>, AppError> {
        let sql = format!(
            "UPDATE maintenance_requests
             SET status = $2,
                 technician_notes = $3,
                 scheduled_time = $4,
                 completed_time = $5,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let request = sqlx::query_as::<_, MaintenanceRequest>(&sql)
            .bind(id)
            .bind(change.status)
            .bind(&change.technician_notes)
            .bind(change.scheduled_time)
            .bind(change.completed_time)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    /// 删除一条申请，返回是否确有此行。
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
