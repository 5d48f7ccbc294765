// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时目录、JSON 文档构造、标准序列生成等功能
// ==========================================

#![allow(dead_code)]

use housing_pipeline::engine::SeriesGenerator;
use housing_pipeline::{logging, HousingSeries};
use serde_json::{json, Value};
use std::error::Error;
use std::path::PathBuf;
use tempfile::TempDir;

/// 构造一条 JSON 年度记录
pub fn entry(
    year: i64,
    marketed: i64,
    submitted: i64,
    planned: i64,
    built: i64,
    required: i64,
) -> Value {
    json!({
        "year": year,
        "marketed": marketed,
        "submitted": submitted,
        "planned": planned,
        "built": built,
        "required": required,
    })
}

/// 包装为 { "data": [...] } 文档
pub fn document(entries: Vec<Value>) -> Value {
    json!({ "data": entries })
}

/// 将 JSON 文本写入临时目录
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 文件路径
pub fn write_temp_file(name: &str, content: &str) -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

/// canonical 预设生成的标准序列
pub fn canonical_series() -> HousingSeries {
    logging::init_test();
    SeriesGenerator::canonical().generate()
}
