// ==========================================
// 住房供给管线数据 - 核心库
// ==========================================
// 职责: 生成 2025-2040 年度住房管线序列，并校验其不变量
// 数据流: Generator → JSON 文档 → Validator（单向，无共享运行时状态）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 增长参数预设 / 校验策略 / 命令行选项
pub mod config;

// 引擎层 - 生成 / 校验 / 分析
pub mod engine;

// 存储层 - JSON 读写 / CSV 导出
pub mod store;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{GrowthPreset, GrowthProfile, TargetBoundPolicy};
pub use domain::{HousingSeries, Quantity, SeriesKind, YearRecord};
pub use engine::{
    SeriesAnalyzer, SeriesGenerator, SeriesSummary, SeriesValidator, ValidationError,
    ValidationErrorKind, ValidationReport,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "housing-pipeline";
