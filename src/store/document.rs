// ==========================================
// 住房供给管线数据 - JSON 文档读写
// ==========================================
// 格式: UTF-8，两空格缩进，{ "data": [...] }
// 写入: 整体覆盖目标文件
// ==========================================

use crate::domain::HousingSeries;
use crate::store::error::StoreResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 将序列写为缩进 JSON（覆盖已有文件）
pub fn write_series(path: &Path, series: &HousingSeries) -> StoreResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, series)?;
    writer.flush()?;

    tracing::info!(path = %path.display(), records = series.len(), "序列已写入");
    Ok(())
}

/// 读取序列文档（结构严格按 YearRecord 反序列化）
pub fn read_series(path: &Path) -> StoreResult<HousingSeries> {
    let raw = std::fs::read_to_string(path)?;
    let series: HousingSeries = serde_json::from_str(&raw)?;
    Ok(series)
}
