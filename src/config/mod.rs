// ==========================================
// 住房供给管线数据 - 配置层
// ==========================================
// 职责: 生成器增长参数 / 命名预设 / 校验策略 / 命令行选项
// 存储: 无持久化，参数来自预设或可选 JSON 参数文件
// ==========================================

pub mod error;
pub mod growth_profile;
pub mod run_options;
pub mod validation_policy;

// 重导出核心配置类型
pub use error::{ConfigError, ConfigResult};
pub use growth_profile::{
    GrowthCurve, GrowthPreset, GrowthProfile, SubmittedModel, MAX_YEAR_SPAN,
};
pub use run_options::{GenerateOptions, ValidateOptions};
pub use validation_policy::TargetBoundPolicy;
