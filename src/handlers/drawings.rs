// src/handlers/drawings.rs

use std::fmt::Write as _;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{self, DrawingFilter, DrawingSpec},
    common::{error::AppError, response::ApiResponse},
    config::AppState,
};

/// 图纸清单里的一项。specs 为 None 表示文件名不符合规格命名约定。
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawingFileInfo {
    pub file_name: String,
    /// 字节数；走内置清单兜底时为 0。
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs: Option<DrawingSpec>,
}

// ---
// Handler: 图纸清单
// ---
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "Drawings",
    params(
        ("load" = Option<String>, Query, description = "载重面，如 800kg"),
        ("speed" = Option<String>, Query, description = "速度面，如 1.5m每秒"),
        ("width" = Option<String>, Query, description = "轿厢宽度面，如 1400mm")
    ),
    responses(
        (status = 200, description = "图纸清单，可按规格面筛选", body = ApiResponse<Vec<DrawingFileInfo>>)
    )
)]
pub async fn list_drawing_files(
    State(app_state): State<AppState>,
    Query(filter): Query<DrawingFilter>,
) -> Result<impl IntoResponse, AppError> {
    let files = match read_directory(&app_state.drawings_dir).await {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("图纸目录不可用，回退到内置清单: {}", e);
            builtin_listing()
        }
    };

    // 给了筛选面时，文件名不符合命名约定的条目一律不命中
    let has_facets = filter.load.is_some() || filter.speed.is_some() || filter.width.is_some();
    let files: Vec<DrawingFileInfo> = files
        .into_iter()
        .filter(|file| match &file.specs {
            Some(spec) => filter.matches(spec),
            None => !has_facets,
        })
        .collect();

    Ok(Json(ApiResponse::success(files)))
}

// ---
// Handler: 图纸下载
// ---
#[utoipa::path(
    get,
    path = "/api/download/{file_name}",
    tag = "Drawings",
    responses(
        (status = 200, description = "PDF 文件", content_type = "application/pdf"),
        (status = 400, description = "无效的文件名"),
        (status = 404, description = "文件不存在")
    ),
    params(
        ("file_name" = String, Path, description = "图纸文件名")
    )
)]
pub async fn download_drawing(
    State(app_state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // 路径穿越防护：文件名里不允许出现路径分隔符或父目录引用
    if file_name.contains(['/', '\\']) || file_name.contains("..") {
        return Err(AppError::InvalidFileName);
    }

    let path = app_state.drawings_dir.join(&file_name);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::FileNotFound)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename*=UTF-8''{}", rfc5987_encode(&file_name)),
        ),
    ];

    Ok((headers, bytes))
}

async fn read_directory(dir: &std::path::Path) -> std::io::Result<Vec<DrawingFileInfo>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.ends_with(".pdf") {
            continue;
        }

        let metadata = entry.metadata().await?;
        if !metadata.is_file() {
            continue;
        }

        files.push(DrawingFileInfo {
            file_name: name.to_string(),
            size: metadata.len(),
            modified_date: metadata.modified().ok().map(DateTime::<Utc>::from),
            specs: catalog::parse_file_name(name),
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// 目录缺失时的兜底：内置的 33 份图纸清单，尺寸未知计 0。
fn builtin_listing() -> Vec<DrawingFileInfo> {
    catalog::full_catalog()
        .into_iter()
        .map(|(name, spec)| DrawingFileInfo {
            file_name: name.to_string(),
            size: 0,
            modified_date: None,
            specs: Some(spec),
        })
        .collect()
}

/// RFC 5987 扩展参数编码，中文文件名要进 Content-Disposition 必须走这里。
fn rfc5987_encode(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'!' | b'#' | b'$' | b'&' | b'+'
            | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_non_ascii_file_names() {
        assert_eq!(rfc5987_encode("a b.pdf"), "a%20b.pdf");
        assert_eq!(rfc5987_encode("图.pdf"), "%E5%9B%BE.pdf");
    }
}
