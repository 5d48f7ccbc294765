// ==========================================
// 住房供给管线数据 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    // ===== 预设/策略 =====
    #[error("unknown growth preset '{name}' (valid: {valid})")]
    UnknownPreset { name: String, valid: String },

    #[error("unknown target bound policy '{0}' (valid: marketed_only, strict)")]
    UnknownPolicy(String),

    #[error("invalid growth profile: {0}")]
    InvalidProfile(String),

    #[error("failed to load growth profile from {path}: {message}")]
    ProfileLoad { path: String, message: String },

    // ===== 命令行参数 =====
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unexpected extra argument: {0}")]
    UnexpectedArgument(String),

    #[error("unsupported locale '{0}' (valid: en, he)")]
    UnsupportedLocale(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
