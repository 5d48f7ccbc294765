// ==========================================
// 住房供给管线数据 - 校验错误类型
// ==========================================
// 分类: Io / Parse / Structural / Field / Relationship / Bound
// 所有错误信息必须包含显式原因（年份 + 违规取值）
// ==========================================

use crate::domain::{Quantity, SeriesKind};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 错误大类（用于区分解析失败与业务规则违规）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    Io,
    Parse,
    Structural,
    Field,
    Relationship,
    Bound,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::Io => write!(f, "IO"),
            ValidationErrorKind::Parse => write!(f, "PARSE"),
            ValidationErrorKind::Structural => write!(f, "STRUCTURAL"),
            ValidationErrorKind::Field => write!(f, "FIELD"),
            ValidationErrorKind::Relationship => write!(f, "RELATIONSHIP"),
            ValidationErrorKind::Bound => write!(f, "BOUND"),
        }
    }
}

/// 校验错误类型（遇到即中止）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ===== 输入读取 =====
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid JSON format - {0}")]
    Parse(String),

    // ===== 文档结构 =====
    #[error("Invalid JSON structure - missing 'data' key")]
    MissingDataKey,

    #[error("'data' must be a non-empty array")]
    EmptyData,

    #[error("record #{index} is not a JSON object")]
    RecordNotObject { index: usize },

    // ===== 字段 =====
    #[error("Missing required fields in year {}: {}", display_year(.year), .fields.join(", "))]
    MissingFields {
        year: Option<i64>,
        fields: Vec<String>,
    },

    #[error("Field '{field}' in year {} must be {expected}", display_year(.year))]
    InvalidFieldType {
        year: Option<i64>,
        field: String,
        expected: &'static str,
    },

    // ===== 业务规则 =====
    #[error("Invalid status progression in year {year} (Planned: {planned}, Submitted: {submitted}, Marketed: {marketed})")]
    Relationship {
        year: i64,
        planned: Quantity,
        submitted: Quantity,
        marketed: Quantity,
    },

    #[error("Built units exceed marketed units in year {year} (Built: {built}, Marketed: {marketed})")]
    BuiltExceedsMarketed {
        year: i64,
        built: Quantity,
        marketed: Quantity,
    },

    #[error("Pipeline exceeds required target in year {year}: {breakdown}")]
    TargetExceeded {
        year: i64,
        breakdown: TargetBreakdown,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::Io { .. } => ValidationErrorKind::Io,
            ValidationError::Parse(_) => ValidationErrorKind::Parse,
            ValidationError::MissingDataKey
            | ValidationError::EmptyData
            | ValidationError::RecordNotObject { .. } => ValidationErrorKind::Structural,
            ValidationError::MissingFields { .. } | ValidationError::InvalidFieldType { .. } => {
                ValidationErrorKind::Field
            }
            ValidationError::Relationship { .. } => ValidationErrorKind::Relationship,
            ValidationError::BuiltExceedsMarketed { .. }
            | ValidationError::TargetExceeded { .. } => ValidationErrorKind::Bound,
        }
    }

    /// 出错年份（结构/解析错误无年份）
    pub fn year(&self) -> Option<i64> {
        match self {
            ValidationError::MissingFields { year, .. }
            | ValidationError::InvalidFieldType { year, .. } => *year,
            ValidationError::Relationship { year, .. }
            | ValidationError::BuiltExceedsMarketed { year, .. }
            | ValidationError::TargetExceeded { year, .. } => Some(*year),
            _ => None,
        }
    }
}

fn display_year(year: &Option<i64>) -> String {
    match year {
        Some(y) => y.to_string(),
        None => "unknown".to_string(),
    }
}

// ==========================================
// TargetBreakdown - 目标占比明细
// ==========================================

/// 单个阶段占目标的比例
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentShare {
    pub kind: SeriesKind,
    pub value: Quantity,
    /// value / required × 100
    pub share_pct: f64,
    pub exceeds_target: bool,
}

/// 目标上限违规时的明细
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetBreakdown {
    pub required: Quantity,
    pub components: Vec<ComponentShare>,
    pub sum: Quantity,
    pub sum_share_pct: f64,
    pub sum_exceeds_target: bool,
}

impl TargetBreakdown {
    /// 由三阶段取值构造
    pub fn new(
        required: Quantity,
        marketed: Quantity,
        submitted: Quantity,
        planned: Quantity,
    ) -> Self {
        let share = |value: Quantity| {
            if required.is_positive() {
                value.as_f64() / required.as_f64() * 100.0
            } else {
                f64::INFINITY
            }
        };

        let components = [
            (SeriesKind::Marketed, marketed),
            (SeriesKind::Submitted, submitted),
            (SeriesKind::Planned, planned),
        ]
        .into_iter()
        .map(|(kind, value)| ComponentShare {
            kind,
            value,
            share_pct: share(value),
            exceeds_target: value > required,
        })
        .collect();

        let sum = marketed + submitted + planned;
        Self {
            required,
            components,
            sum,
            sum_share_pct: share(sum),
            sum_exceeds_target: sum > required,
        }
    }

    pub fn any_component_exceeds(&self) -> bool {
        self.components.iter().any(|c| c.exceeds_target)
    }
}

impl fmt::Display for TargetBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required={}", self.required)?;
        for c in &self.components {
            write!(f, ", {}={} ({:.1}%)", c.kind, c.value, c.share_pct)?;
        }
        write!(f, ", sum={} ({:.1}%)", self.sum, self.sum_share_pct)
    }
}

/// Result 类型别名
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            ValidationError::Parse("eof".into()).kind(),
            ValidationErrorKind::Parse
        );
        assert_eq!(ValidationError::EmptyData.kind(), ValidationErrorKind::Structural);
        assert_eq!(
            ValidationError::BuiltExceedsMarketed {
                year: 2025,
                built: Quantity::Int(100),
                marketed: Quantity::Int(50)
            }
            .kind(),
            ValidationErrorKind::Bound
        );
    }

    #[test]
    fn test_missing_fields_message() {
        let err = ValidationError::MissingFields {
            year: None,
            fields: vec!["year".into(), "planned".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required fields in year unknown: year, planned"
        );
        assert_eq!(err.year(), None);
    }

    #[test]
    fn test_breakdown_shares() {
        let breakdown = TargetBreakdown::new(
            Quantity::Int(1000),
            Quantity::Int(600),
            Quantity::Int(300),
            Quantity::Int(200),
        );
        assert!(breakdown.sum_exceeds_target);
        assert!(!breakdown.any_component_exceeds());
        assert!((breakdown.components[0].share_pct - 60.0).abs() < 1e-9);
        assert_eq!(breakdown.sum, Quantity::Int(1100));

        let text = breakdown.to_string();
        assert!(text.contains("marketed=600 (60.0%)"));
        assert!(text.contains("sum=1100 (110.0%)"));
    }
}
