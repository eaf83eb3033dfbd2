// src/display.rs
// 枚举的中文展示名。只属于展示层：接口响应里单独带一个
// display 字段，存储和线上的枚举值始终是符号名。

use crate::models::requirement::{ElevatorType, RequirementStatus};

pub fn elevator_type_label(value: ElevatorType) -> &'static str {
    match value {
        ElevatorType::Passenger => "乘客电梯",
        ElevatorType::Freight => "货梯",
        ElevatorType::Home => "家用电梯",
        ElevatorType::Escalator => "自动扶梯",
        ElevatorType::MovingWalkway => "自动人行道",
    }
}

pub fn requirement_status_label(value: RequirementStatus) -> &'static str {
    match value {
        RequirementStatus::Pending => "待处理",
        RequirementStatus::Reviewing => "审核中",
        RequirementStatus::Quoted => "已报价",
        RequirementStatus::Accepted => "已接受",
        RequirementStatus::Rejected => "已拒绝",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevator_type_labels() {
        assert_eq!(elevator_type_label(ElevatorType::Passenger), "乘客电梯");
        assert_eq!(elevator_type_label(ElevatorType::MovingWalkway), "自动人行道");
    }

    #[test]
    fn status_labels() {
        assert_eq!(requirement_status_label(RequirementStatus::Pending), "待处理");
        assert_eq!(requirement_status_label(RequirementStatus::Quoted), "已报价");
    }
}
