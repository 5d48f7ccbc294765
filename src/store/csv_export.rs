// ==========================================
// 住房供给管线数据 - CSV 导出
// ==========================================
// 列: 年份 + marketed / submitted / planned / built / required 的显示名称
// 编码: UTF-8 + BOM（便于表格软件识别）
// ==========================================

use crate::domain::{HousingSeries, SeriesKind};
use crate::i18n;
use crate::store::error::StoreResult;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 导出到文件
///
/// # 参数
/// - path: 目标文件
/// - series: 序列
/// - locale: 表头语言（"en" / "he"）
pub fn export_csv(path: &Path, series: &HousingSeries, locale: &str) -> StoreResult<()> {
    let file = File::create(path)?;
    write_csv(file, series, locale)?;

    tracing::info!(path = %path.display(), rows = series.len(), "CSV 已导出");
    Ok(())
}

/// 写入任意 writer
pub fn write_csv<W: Write>(mut out: W, series: &HousingSeries, locale: &str) -> StoreResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = Writer::from_writer(out);

    let mut header = vec![i18n::t_in("series.year", locale)];
    header.extend(SeriesKind::ALL.iter().map(|k| i18n::t_in(k.i18n_key(), locale)));
    wtr.write_record(&header)?;

    for record in &series.data {
        let mut row = vec![record.year.to_string()];
        row.extend(SeriesKind::ALL.iter().map(|&k| record.value(k).to_string()));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
