// ==========================================
// 住房供给管线数据 - 序列校验器
// ==========================================
// 规则顺序（遇到第一个违规即中止）:
// 1. 文档为对象且包含 data
// 2. data 为非空数组
// 3. 逐条记录:
//    a. 必填字段齐全且为数值
//    b. planned ≤ submitted ≤ marketed
//    c. built ≤ marketed
//    d. 增长检查（仅警告，不中止）
//    e. 目标上限（按 TargetBoundPolicy）
// ==========================================

use crate::config::{GrowthProfile, TargetBoundPolicy};
use crate::domain::{HousingSeries, Quantity, REQUIRED_FIELDS};
use crate::engine::error::{TargetBreakdown, ValidationError, ValidationResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

// ==========================================
// CheckedRecord - 通过字段检查的记录
// ==========================================
// 整数字段保持精确，超过 2^53 的取值也能正确比较
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckedRecord {
    pub year: i64,
    pub marketed: Quantity,
    pub submitted: Quantity,
    pub planned: Quantity,
    pub built: Quantity,
    pub required: Quantity,
}

impl CheckedRecord {
    pub fn pipeline_total(&self) -> Quantity {
        self.marketed + self.submitted + self.planned
    }
}

// ==========================================
// GrowthWarning - 增长异常警告（非致命）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthWarning {
    pub year: i64,
    pub previous_marketed: Quantity,
    pub marketed: Quantity,
    /// 警告窗口末年（含）
    pub window_end: i64,
}

impl GrowthWarning {
    /// 增长率（上一年为 0 时无意义）
    pub fn growth_pct(&self) -> Option<f64> {
        if self.previous_marketed.is_positive() {
            let previous = self.previous_marketed.as_f64();
            Some((self.marketed.as_f64() - previous) / previous * 100.0)
        } else {
            None
        }
    }
}

impl fmt::Display for GrowthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Negative marketing growth in the period up to {}: {} ({} -> {}",
            self.window_end, self.year, self.previous_marketed, self.marketed
        )?;
        if let Some(pct) = self.growth_pct() {
            write!(f, ", {:.1}%", pct)?;
        }
        write!(f, ")")
    }
}

// ==========================================
// SeriesSummary - 校验通过后的摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub record_count: usize,
    pub first_year: i64,
    pub last_year: i64,
    pub final_record: CheckedRecord,
}

impl SeriesSummary {
    /// 末年距目标的缺口
    pub fn final_gap(&self) -> Quantity {
        self.final_record.required - self.final_record.pipeline_total()
    }
}

// ==========================================
// ValidationReport - 校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// 中止前累计的警告
    pub warnings: Vec<GrowthWarning>,
    pub outcome: ValidationResult<SeriesSummary>,
}

impl ValidationReport {
    fn failed(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            outcome: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.outcome.as_ref().err()
    }

    pub fn summary(&self) -> Option<&SeriesSummary> {
        self.outcome.as_ref().ok()
    }
}

// ==========================================
// SeriesValidator - 序列校验器
// ==========================================
pub struct SeriesValidator {
    policy: TargetBoundPolicy,
    growth_window_end: i64,
}

impl Default for SeriesValidator {
    fn default() -> Self {
        Self::new(TargetBoundPolicy::default())
    }
}

impl SeriesValidator {
    /// 增长警告窗口默认取 canonical 预设的 pivot_year
    pub fn new(policy: TargetBoundPolicy) -> Self {
        Self {
            policy,
            growth_window_end: i64::from(GrowthProfile::default().pivot_year),
        }
    }

    /// 覆写增长警告窗口末年
    pub fn with_growth_window_end(mut self, year: i64) -> Self {
        self.growth_window_end = year;
        self
    }

    pub fn policy(&self) -> TargetBoundPolicy {
        self.policy
    }

    /// 读取并校验文件
    pub fn validate_file(&self, path: &Path) -> ValidationReport {
        match std::fs::read_to_string(path) {
            Ok(raw) => self.validate_str(&raw),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "读取校验文件失败");
                ValidationReport::failed(ValidationError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// 解析并校验 JSON 文本
    pub fn validate_str(&self, raw: &str) -> ValidationReport {
        match serde_json::from_str::<Value>(raw) {
            Ok(doc) => self.validate_value(&doc),
            Err(e) => {
                tracing::error!(error = %e, "JSON 解析失败");
                ValidationReport::failed(ValidationError::Parse(e.to_string()))
            }
        }
    }

    /// 校验内存中的序列
    pub fn validate_series(&self, series: &HousingSeries) -> ValidationReport {
        match serde_json::to_value(series) {
            Ok(doc) => self.validate_value(&doc),
            Err(e) => ValidationReport::failed(ValidationError::Parse(e.to_string())),
        }
    }

    /// 校验已解析的 JSON 文档
    pub fn validate_value(&self, doc: &Value) -> ValidationReport {
        let mut warnings = Vec::new();
        let outcome = self.run_checks(doc, &mut warnings);

        if let Err(e) = &outcome {
            tracing::error!(kind = %e.kind(), year = ?e.year(), "校验失败: {}", e);
        }

        ValidationReport { warnings, outcome }
    }

    fn run_checks(
        &self,
        doc: &Value,
        warnings: &mut Vec<GrowthWarning>,
    ) -> ValidationResult<SeriesSummary> {
        // 1. 顶层必须是包含 data 的对象
        let data = doc
            .as_object()
            .and_then(|obj| obj.get("data"))
            .ok_or(ValidationError::MissingDataKey)?;

        // 2. data 必须是非空数组
        let entries = match data.as_array() {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Err(ValidationError::EmptyData),
        };

        // 3. 逐条校验
        let mut previous: Option<CheckedRecord> = None;
        for (index, entry) in entries.iter().enumerate() {
            let obj = entry
                .as_object()
                .ok_or(ValidationError::RecordNotObject { index })?;

            let record = check_fields(obj)?;
            check_relationship(&record)?;
            check_built(&record)?;

            if let Some(warning) = self.check_growth(&record, previous.as_ref()) {
                tracing::warn!(year = warning.year, "{}", warning);
                warnings.push(warning);
            }

            self.check_target_bound(&record)?;
            previous = Some(record);
        }

        // entries 非空，previous 必然存在
        let final_record = previous.ok_or(ValidationError::EmptyData)?;
        let first_year = match entries.first().and_then(|e| e.get("year")).and_then(Value::as_i64)
        {
            Some(year) => year,
            None => final_record.year,
        };

        Ok(SeriesSummary {
            record_count: entries.len(),
            first_year,
            last_year: final_record.year,
            final_record,
        })
    }

    /// d. 增长检查：窗口内 marketed 同比下降则警告（上一年 marketed 须为正）
    fn check_growth(
        &self,
        record: &CheckedRecord,
        previous: Option<&CheckedRecord>,
    ) -> Option<GrowthWarning> {
        let prev = previous?;
        if record.year <= self.growth_window_end
            && prev.marketed.is_positive()
            && record.marketed < prev.marketed
        {
            return Some(GrowthWarning {
                year: record.year,
                previous_marketed: prev.marketed,
                marketed: record.marketed,
                window_end: self.growth_window_end,
            });
        }
        None
    }

    /// e. 目标上限检查
    fn check_target_bound(&self, record: &CheckedRecord) -> ValidationResult<()> {
        let breakdown = TargetBreakdown::new(
            record.required,
            record.marketed,
            record.submitted,
            record.planned,
        );

        let violated = match self.policy {
            TargetBoundPolicy::MarketedOnly => record.marketed > record.required,
            TargetBoundPolicy::PerComponentAndSum => {
                breakdown.any_component_exceeds() || breakdown.sum_exceeds_target
            }
        };

        if violated {
            return Err(ValidationError::TargetExceeded {
                year: record.year,
                breakdown,
            });
        }
        Ok(())
    }
}

/// a. 必填字段检查
fn check_fields(obj: &Map<String, Value>) -> ValidationResult<CheckedRecord> {
    let year_hint = obj.get("year").and_then(Value::as_i64);

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !obj.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            year: year_hint,
            fields: missing,
        });
    }

    let year = year_hint.ok_or_else(|| ValidationError::InvalidFieldType {
        year: None,
        field: "year".to_string(),
        expected: "an integer",
    })?;

    let number = |field: &str| -> ValidationResult<Quantity> {
        obj.get(field)
            .and_then(Quantity::from_json)
            .ok_or_else(|| ValidationError::InvalidFieldType {
                year: Some(year),
                field: field.to_string(),
                expected: "a number",
            })
    };

    Ok(CheckedRecord {
        year,
        marketed: number("marketed")?,
        submitted: number("submitted")?,
        planned: number("planned")?,
        built: number("built")?,
        required: number("required")?,
    })
}

/// b. planned ≤ submitted ≤ marketed
fn check_relationship(record: &CheckedRecord) -> ValidationResult<()> {
    if record.planned <= record.submitted && record.submitted <= record.marketed {
        return Ok(());
    }
    Err(ValidationError::Relationship {
        year: record.year,
        planned: record.planned,
        submitted: record.submitted,
        marketed: record.marketed,
    })
}

/// c. built ≤ marketed
fn check_built(record: &CheckedRecord) -> ValidationResult<()> {
    if record.built <= record.marketed {
        return Ok(());
    }
    Err(ValidationError::BuiltExceedsMarketed {
        year: record.year,
        built: record.built,
        marketed: record.marketed,
    })
}
