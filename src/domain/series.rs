// ==========================================
// 住房供给管线数据 - 年度记录与序列文档
// ==========================================
// 文档格式: { "data": [YearRecord, ...] }
// 生命周期: 由生成器整体创建，之后只读
// ==========================================

use crate::domain::types::SeriesKind;
use serde::{Deserialize, Serialize};

/// 每条记录必须包含的字段（校验顺序与之一致）
pub const REQUIRED_FIELDS: [&str; 6] = [
    "year",
    "marketed",
    "submitted",
    "planned",
    "built",
    "required",
];

// ==========================================
// YearRecord - 年度记录
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    /// 年份（序列内唯一且严格递增）
    pub year: i32,

    /// 已上市单元数（管线最后一个阶段）
    pub marketed: i64,

    /// 已提交单元数
    pub submitted: i64,

    /// 规划中单元数
    pub planned: i64,

    /// 已建成单元数（滞后一年，取自上一年 marketed）
    pub built: i64,

    /// 当年政策目标
    pub required: i64,
}

impl YearRecord {
    /// 按指标类型取值
    pub fn value(&self, kind: SeriesKind) -> i64 {
        match kind {
            SeriesKind::Marketed => self.marketed,
            SeriesKind::Submitted => self.submitted,
            SeriesKind::Planned => self.planned,
            SeriesKind::Built => self.built,
            SeriesKind::Required => self.required,
        }
    }

    /// marketed + submitted + planned
    pub fn pipeline_total(&self) -> i64 {
        self.marketed + self.submitted + self.planned
    }

    /// 距目标的缺口（负数表示超出目标）
    pub fn gap_to_target(&self) -> i64 {
        self.required - self.pipeline_total()
    }
}

// ==========================================
// HousingSeries - 序列文档
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingSeries {
    pub data: Vec<YearRecord>,
}

impl HousingSeries {
    pub fn new(data: Vec<YearRecord>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn first(&self) -> Option<&YearRecord> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&YearRecord> {
        self.data.last()
    }

    pub fn find_year(&self, year: i32) -> Option<&YearRecord> {
        self.data.iter().find(|r| r.year == year)
    }

    /// (首年, 末年)
    pub fn year_range(&self) -> Option<(i32, i32)> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some((first.year, last.year)),
            _ => None,
        }
    }
}
