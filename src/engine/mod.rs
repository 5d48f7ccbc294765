// ==========================================
// 住房供给管线数据 - 引擎层
// ==========================================
// 职责: 序列生成 / 序列校验 / 同比分析
// 约束: 引擎不做文件写入，所有违规必须输出原因
// ==========================================

pub mod analysis;
pub mod error;
pub mod generator;
pub mod validator;

// 重导出核心引擎
pub use analysis::{ChangeThresholds, SeriesAnalyzer, SeriesChange, YearAnalysis};
pub use error::{
    ComponentShare, TargetBreakdown, ValidationError, ValidationErrorKind, ValidationResult,
};
pub use generator::{SeriesGenerator, StageValues};
pub use validator::{
    CheckedRecord, GrowthWarning, SeriesSummary, SeriesValidator, ValidationReport,
};
