// src/services/requirement_service.rs

use crate::{
    common::error::AppError,
    db::RequirementRepository,
    models::requirement::{
        ElevatorRequirement, NewRequirement, RequirementStatus, RequirementStatusChange,
    },
};

#[derive(Clone)]
pub struct RequirementService {
    requirement_repo: RequirementRepository,
}

impl RequirementService {
    pub fn new(requirement_repo: RequirementRepository) -> Self {
        Self { requirement_repo }
    }

    // --- 提交 ---

    pub async fn create(&self, new: NewRequirement) -> Result<ElevatorRequirement, AppError> {
        let requirement = self.requirement_repo.insert(&new).await?;
        tracing::info!(
            "新增采购需求 id={} 联系人={}",
            requirement.id,
            requirement.contact_name
        );
        Ok(requirement)
    }

    // --- 查询 ---

    pub async fn get_by_id(&self, id: i32) -> Result<ElevatorRequirement, AppError> {
        self.requirement_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::RequirementNotFound)
    }

    pub async fn get_all(&self) -> Result<Vec<ElevatorRequirement>, AppError> {
        self.requirement_repo.find_all().await
    }

    pub async fn get_by_status(
        &self,
        status: RequirementStatus,
    ) -> Result<Vec<ElevatorRequirement>, AppError> {
        self.requirement_repo.find_by_status(status).await
    }

    // --- 工作流 ---

    /// 状态整体覆盖。切到已报价时盖上报价时间，其余状态保留原值。
    pub async fn update_status(
        &self,
        id: i32,
        change: RequirementStatusChange,
    ) -> Result<ElevatorRequirement, AppError> {
        let stamp_quote = change.status == RequirementStatus::Quoted;

        let requirement = self
            .requirement_repo
            .update_status(id, &change, stamp_quote)
            .await?
            .ok_or(AppError::RequirementNotFound)?;

        tracing::info!("采购需求 id={} 状态更新为 {:?}", id, requirement.status);
        Ok(requirement)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.requirement_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::RequirementNotFound);
        }
        tracing::info!("删除采购需求 id={}", id);
        Ok(())
    }
}
