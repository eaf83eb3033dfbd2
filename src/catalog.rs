// src/catalog.rs
// 电梯图纸目录：一组静态的（载重、速度、轿厢宽度）组合，
// 每个组合对应一份 PDF 图纸。文件名本身就是规格的唯一来源。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 内置图纸目录。图纸目录不可读时 /api/files 用它兜底。
pub const DRAWING_FILES: [&str; 33] = [
    "载重630kg-速度1m每秒-轿厢宽度1100mm.pdf",
    "载重630kg-速度1.5m每秒-轿厢宽度1100mm.pdf",
    "载重630kg-速度1m每秒-轿厢宽度1400mm.pdf",
    "载重630kg-速度1.75m每秒-轿厢宽度1400mm.pdf",
    "载重800kg-速度1m每秒-轿厢宽度1400mm.pdf",
    "载重800kg-速度1.5m每秒-轿厢宽度1400mm.pdf",
    "载重800kg-速度1.75m每秒-轿厢宽度1400mm.pdf",
    "载重800kg-速度2m每秒-轿厢宽度1400mm.pdf",
    "载重800kg-速度2.5m每秒-轿厢宽度1400mm.pdf",
    "载重900kg-速度1m每秒-轿厢宽度1500mm.pdf",
    "载重900kg-速度1.5m每秒-轿厢宽度1500mm.pdf",
    "载重900kg-速度1.75m每秒-轿厢宽度1500mm.pdf",
    "载重900kg-速度2m每秒-轿厢宽度1500mm.pdf",
    "载重900kg-速度2.5m每秒-轿厢宽度1500mm.pdf",
    "载重1000kg-速度1m每秒-轿厢宽度1100mm.pdf",
    "载重1000kg-速度1.5m每秒-轿厢宽度1100mm.pdf",
    "载重1000kg-速度1.75m每秒-轿厢宽度1100mm.pdf",
    "载重1000kg-速度2m每秒-轿厢宽度1100mm.pdf",
    "载重1000kg-速度2.5m每秒-轿厢宽度1100mm.pdf",
    "载重1000kg-速度1m每秒-轿厢宽度1600mm.pdf",
    "载重1000kg-速度1.5m每秒-轿厢宽度1600mm.pdf",
    "载重1000kg-速度1.75m每秒-轿厢宽度1600mm.pdf",
    "载重1000kg-速度2m每秒-轿厢宽度1600mm.pdf",
    "载重1000kg-速度2.5m每秒-轿厢宽度1600mm.pdf",
    "载重1050kg-速度1m每秒-轿厢宽度1100mm.pdf",
    "载重1050kg-速度1.5m每秒-轿厢宽度1100mm.pdf",
    "载重1050kg-速度1.75m每秒-轿厢宽度1100mm.pdf",
    "载重1050kg-速度2m每秒-轿厢宽度1100mm.pdf",
    "载重1050kg-速度2.5m每秒-轿厢宽度1100mm.pdf",
    "载重1050kg-速度1m每秒-轿厢宽度1600mm.pdf",
    "载重1050kg-速度1.5m每秒-轿厢宽度1600mm.pdf",
    "载重1050kg-速度1.75m每秒-轿厢宽度1600mm.pdf",
    "载重1050kg-速度2m每秒-轿厢宽度1600mm.pdf",
];

/// 从图纸文件名解析出的三个规格面，单位保留在值里（800kg、1.5m每秒、1400mm）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DrawingSpec {
    pub load: String,
    pub speed: String,
    pub width: String,
}

/// 文件名约定：载重{载重}-速度{速度}-轿厢宽度{宽度}.pdf。
/// 不符合约定的文件名返回 None。
pub fn parse_file_name(name: &str) -> Option<DrawingSpec> {
    let rest = name.strip_suffix(".pdf")?;
    let rest = rest.strip_prefix("载重")?;
    let (load, rest) = rest.split_once("-速度")?;
    let (speed, width) = rest.split_once("-轿厢宽度")?;
    if load.is_empty() || speed.is_empty() || width.is_empty() {
        return None;
    }
    Some(DrawingSpec {
        load: load.to_string(),
        speed: speed.to_string(),
        width: width.to_string(),
    })
}

/// 筛选条件。三个面都可选，给出的面必须全部精确匹配（逻辑与）；
/// 一个面都不给时所有条目都命中。
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DrawingFilter {
    pub load: Option<String>,
    pub speed: Option<String>,
    pub width: Option<String>,
}

impl DrawingFilter {
    pub fn matches(&self, spec: &DrawingSpec) -> bool {
        self.load.as_deref().map_or(true, |v| v == spec.load)
            && self.speed.as_deref().map_or(true, |v| v == spec.speed)
            && self.width.as_deref().map_or(true, |v| v == spec.width)
    }
}

/// 整个内置目录：文件名加上解析出的规格。
pub fn full_catalog() -> Vec<(&'static str, DrawingSpec)> {
    DRAWING_FILES
        .iter()
        .filter_map(|name| parse_file_name(name).map(|spec| (*name, spec)))
        .collect()
}
