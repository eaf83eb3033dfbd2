// src/services/maintenance_service.rs

use crate::{
    common::error::AppError,
    db::MaintenanceRepository,
    models::maintenance::{
        MaintenanceRequest, MaintenanceStatus, MaintenanceStatusChange, NewMaintenanceRequest,
    },
};

#[derive(Clone)]
pub struct MaintenanceService {
    maintenance_repo: MaintenanceRepository,
}

impl MaintenanceService {
    pub fn new(maintenance_repo: MaintenanceRepository) -> Self {
        Self { maintenance_repo }
    }

    // --- 提交 ---

    pub async fn create(&self, new: NewMaintenanceRequest) -> Result<MaintenanceRequest, AppError> {
        let request = self.maintenance_repo.insert(&new).await?;
        tracing::info!(
            "新增维保申请 id={} 客户={}",
            request.id,
            request.customer_name
        );
        Ok(request)
    }

    // --- 查询 ---

    pub async fn get_by_id(&self, id: i32) -> Result<MaintenanceRequest, AppError> {
        self.maintenance_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::MaintenanceNotFound)
    }

    pub async fn get_all(&self) -> Result<Vec<MaintenanceRequest>, AppError> {
        self.maintenance_repo.find_all().await
    }

    pub async fn get_by_status(
        &self,
        status: MaintenanceStatus,
    ) -> Result<Vec<MaintenanceRequest>, AppError> {
        self.maintenance_repo.find_by_status(status).await
    }

    pub async fn get_by_phone(&self, phone: &str) -> Result<Vec<MaintenanceRequest>, AppError> {
        self.maintenance_repo.find_by_phone(phone).await
    }

    // --- 工作流 ---

    /// 工作流字段整体覆盖，未提供的字段写 NULL。
    pub async fn update_status(
        &self,
        id: i32,
        change: MaintenanceStatusChange,
    ) -> Result<MaintenanceRequest, AppError> {
        let request = self
            .maintenance_repo
            .update_status(id, &change)
            .await?
            .ok_or(AppError::MaintenanceNotFound)?;

        tracing::info!("维保申请 id={} 状态更新为 {:?}", id, request.status);
        Ok(request)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.maintenance_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::MaintenanceNotFound);
        }
        tracing::info!("删除维保申请 id={}", id);
        Ok(())
    }
}
