// ==========================================
// 住房供给管线数据 - 领域模型层
// ==========================================
// 职责: 定义年度记录、序列文档与指标类型
// 约束: 不含文件访问逻辑，不含生成/校验逻辑
// ==========================================

pub mod quantity;
pub mod series;
pub mod types;

// 重导出核心类型
pub use quantity::Quantity;
pub use series::{HousingSeries, YearRecord, REQUIRED_FIELDS};
pub use types::{ChangeDirection, ChangeLevel, SeriesKind};
