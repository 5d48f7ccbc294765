// ==========================================
// 住房供给管线数据 - 领域类型定义
// ==========================================
// 管线阶段: planned → submitted → marketed → built
// required 为政策目标（不属于管线阶段）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 指标类型 (Series Kind)
// ==========================================
// 序列化格式: snake_case (与 JSON 字段名一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Marketed,  // 已上市
    Submitted, // 已提交
    Planned,   // 规划中
    Built,     // 已建成
    Required,  // 目标需求
}

impl SeriesKind {
    /// 输出/导出顺序（与 JSON 字段顺序一致）
    pub const ALL: [SeriesKind; 5] = [
        SeriesKind::Marketed,
        SeriesKind::Submitted,
        SeriesKind::Planned,
        SeriesKind::Built,
        SeriesKind::Required,
    ];

    /// 受目标上限约束的三个管线阶段
    pub const PIPELINE: [SeriesKind; 3] = [
        SeriesKind::Marketed,
        SeriesKind::Submitted,
        SeriesKind::Planned,
    ];

    /// JSON 字段名
    pub fn field_name(&self) -> &'static str {
        match self {
            SeriesKind::Marketed => "marketed",
            SeriesKind::Submitted => "submitted",
            SeriesKind::Planned => "planned",
            SeriesKind::Built => "built",
            SeriesKind::Required => "required",
        }
    }

    /// 显示名称的 i18n 键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SeriesKind::Marketed => "series.marketed",
            SeriesKind::Submitted => "series.submitted",
            SeriesKind::Planned => "series.planned",
            SeriesKind::Built => "series.built",
            SeriesKind::Required => "series.required",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

// ==========================================
// 变化幅度等级 (Change Level)
// ==========================================
// 按 |Δ| 与阈值 (significant / major) 比较得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeLevel {
    Neutral,     // 低于 significant
    Significant, // 介于 significant 与 major 之间
    Major,       // 不低于 major
}

impl fmt::Display for ChangeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeLevel::Neutral => write!(f, "NEUTRAL"),
            ChangeLevel::Significant => write!(f, "SIGNIFICANT"),
            ChangeLevel::Major => write!(f, "MAJOR"),
        }
    }
}

// ==========================================
// 变化方向 (Change Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn of(delta: i64) -> Self {
        match delta {
            d if d > 0 => ChangeDirection::Up,
            d if d < 0 => ChangeDirection::Down,
            _ => ChangeDirection::Flat,
        }
    }
}
