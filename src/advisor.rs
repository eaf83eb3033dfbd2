// src/advisor.rs
// 表单的智能推荐与成本估算。全部是纯函数：输入一个不可变的
// 项目画像，输出推荐列表或价格区间，过程不持有任何状态。

use serde::{Deserialize, Serialize};

use crate::models::requirement::ElevatorType;

/// 建筑类型，影响载重与数量推荐。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    Residential,
    Office,
    Hotel,
    Hospital,
    Shopping,
    Factory,
    Villa,
}

/// 安装位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Indoor,
    SemiOutdoor,
    Outdoor,
}

/// 气候条件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Normal,
    ExtremeCold,
    ExtremeHot,
    Humid,
    Tropical,
}

/// 一次推荐或估算的全部输入。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProfile {
    pub elevator_type: Option<ElevatorType>,
    pub building_type: Option<BuildingType>,
    pub floors: Option<i32>,
    pub quantity: Option<i32>,
    pub car_capacity: Option<i32>,
    /// 日均客流量（人次）。
    pub daily_traffic: Option<i32>,
    pub placement: Option<Placement>,
    pub climate: Option<Climate>,
    /// 地震烈度（6-9 度）。
    pub seismic_intensity: Option<i32>,
    /// 是否沿海地区。
    #[serde(default)]
    pub coastal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Capacity,
    Speed,
    Quantity,
    Environment,
    Safety,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub message: String,
    pub value: String,
}

/// 成本估算结果，金额为人民币元。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub min: i64,
    pub max: i64,
    pub recommended: i64,
    /// 环境因素带来的成本上浮百分比。
    pub environment_factor: i64,
}

/// 各类型的额定速度上限（m/s）。
fn max_speed(elevator_type: ElevatorType) -> f64 {
    match elevator_type {
        ElevatorType::Passenger => 4.0,
        ElevatorType::Freight => 1.0,
        ElevatorType::Home => 0.4,
        ElevatorType::Escalator => 0.75,
        ElevatorType::MovingWalkway => 0.9,
    }
}

/// 根据项目画像生成配置推荐。电梯类型和楼层数都给出后才有输出。
pub fn recommend(profile: &ProjectProfile) -> Vec<Recommendation> {
    let (Some(elevator_type), Some(floors)) = (profile.elevator_type, profile.floors) else {
        return Vec::new();
    };

    let mut recommendations = Vec::new();

    // 载重推荐
    if profile.building_type == Some(BuildingType::Residential)
        && elevator_type == ElevatorType::Passenger
    {
        let (range, value) = if floors <= 18 {
            ("800-1000kg", 800)
        } else {
            ("1000-1350kg", 1000)
        };
        recommendations.push(Recommendation {
            kind: RecommendationKind::Capacity,
            title: "载重建议".to_string(),
            message: format!("住宅楼建议载重 {}", range),
            value: value.to_string(),
        });
    }

    // 速度推荐
    if floors >= 10 {
        let speed = f64::min(max_speed(elevator_type), f64::from(floors) * 0.15);
        recommendations.push(Recommendation {
            kind: RecommendationKind::Speed,
            title: "速度建议".to_string(),
            message: format!("{}层建筑建议速度 {:.1}m/s", floors, speed),
            value: format!("{:.1}", speed),
        });
    }

    // 数量推荐
    if let (Some(traffic), Some(building_type)) = (profile.daily_traffic, profile.building_type) {
        let recommended = match building_type {
            BuildingType::Office if traffic > 500 => (f64::from(traffic) / 300.0).ceil() as i32,
            BuildingType::Residential if traffic > 200 => (f64::from(traffic) / 150.0).ceil() as i32,
            _ => 1,
        };
        if recommended > 1 {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Quantity,
                title: "数量建议".to_string(),
                message: format!("根据客流量建议安装 {} 台电梯", recommended),
                value: recommended.to_string(),
            });
        }
    }

    // 环境因素推荐
    if profile.climate == Some(Climate::Humid) || profile.coastal {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Environment,
            title: "防腐蚀建议".to_string(),
            message: "高湿度或沿海环境建议选择不锈钢材质和防腐蚀涂层".to_string(),
            value: "corrosion_resistant".to_string(),
        });
    }

    if profile.placement == Some(Placement::Outdoor) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Environment,
            title: "室外环境建议".to_string(),
            message: "露天环境建议选择全封闭井道和防水等级IP65以上的控制系统".to_string(),
            value: "outdoor_protection".to_string(),
        });
    }

    if profile.seismic_intensity.is_some_and(|i| i >= 7) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Safety,
            title: "抗震建议".to_string(),
            message: "高地震烈度区域建议配置地震感应器和紧急平层装置".to_string(),
            value: "earthquake_protection".to_string(),
        });
    }

    if profile.climate == Some(Climate::ExtremeCold) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Environment,
            title: "低温环境建议".to_string(),
            message: "极寒地区建议配置井道加热系统和低温润滑油".to_string(),
            value: "cold_weather_package".to_string(),
        });
    }

    recommendations
}

/// 估算总价区间。电梯类型、数量、楼层缺一则无法估算。
pub fn estimate_cost(profile: &ProjectProfile) -> Option<CostEstimate> {
    let elevator_type = profile.elevator_type?;
    let quantity = profile.quantity.filter(|q| *q > 0)?;
    let floors = profile.floors.filter(|f| *f > 0)?;

    // 基础价格
    let base_cost = match elevator_type {
        ElevatorType::Passenger => 150_000.0,
        ElevatorType::Freight => 200_000.0,
        ElevatorType::Home => 100_000.0,
        ElevatorType::Escalator => 300_000.0,
        ElevatorType::MovingWalkway => 150_000.0,
    };

    // 楼层系数
    let floor_multiplier = f64::max(1.0, 1.0 + f64::from(floors) * 0.05);

    // 载重系数
    let capacity_multiplier = match profile.car_capacity {
        Some(capacity) if capacity > 0 => f64::max(1.0, f64::from(capacity) / 1000.0),
        _ => 1.0,
    };

    // 环境因素成本调整
    let mut environment_multiplier = 1.0;
    match profile.placement {
        Some(Placement::Outdoor) => environment_multiplier += 0.25,
        Some(Placement::SemiOutdoor) => environment_multiplier += 0.15,
        _ => {}
    }
    match profile.climate {
        Some(Climate::ExtremeCold) | Some(Climate::ExtremeHot) => environment_multiplier += 0.2,
        Some(Climate::Humid) | Some(Climate::Tropical) => environment_multiplier += 0.15,
        _ => {}
    }
    if profile.coastal {
        environment_multiplier += 0.12;
    }
    match profile.seismic_intensity {
        Some(i) if i >= 8 => environment_multiplier += 0.18,
        Some(7) => environment_multiplier += 0.1,
        _ => {}
    }

    let total = base_cost
        * f64::from(quantity)
        * floor_multiplier
        * capacity_multiplier
        * environment_multiplier;

    Some(CostEstimate {
        min: (total * 0.8).round() as i64,
        max: (total * 1.2).round() as i64,
        recommended: total.round() as i64,
        environment_factor: ((environment_multiplier - 1.0) * 100.0).round() as i64,
    })
}
